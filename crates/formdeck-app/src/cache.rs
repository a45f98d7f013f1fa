//! The in-memory catalog cache.
//!
//! The cache has exactly one writer path: the result of a successful list
//! fetch replaces the whole backing sequence. There is no incremental merge
//! and no client-side uniqueness enforcement; backend order is preserved.
//! Search is a pure projection recomputed per call — catalogs are small and
//! searches are keystroke-driven, so memoization would buy nothing.

use std::sync::{PoisonError, RwLock};

use formdeck_core::CatalogEntry;

/// Thread-safe, wholesale-replaced catalog storage.
#[derive(Debug, Default)]
pub struct CatalogCache {
    entries: RwLock<Vec<CatalogEntry>>,
}

impl CatalogCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically swaps the backing sequence. No partial update is ever
    /// visible to readers.
    pub fn replace(&self, entries: Vec<CatalogEntry>) {
        *self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner) = entries;
    }

    /// Empties the catalog (the terminal-load-failure path).
    pub fn clear(&self) {
        self.replace(Vec::new());
    }

    /// Returns the entries whose title or description contains `query`
    /// case-insensitively. An empty (or all-whitespace) query matches
    /// everything. Never mutates the catalog.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<CatalogEntry> {
        let needle = query.trim().to_lowercase();
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);

        if needle.is_empty() {
            return entries.clone();
        }

        entries
            .iter()
            .filter(|entry| {
                entry.title.to_lowercase().contains(&needle)
                    || entry.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Returns a copy of the full catalog in backend order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CatalogEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of entries currently cached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true when the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, description: &str) -> CatalogEntry {
        CatalogEntry::new("", title, description, "https://x/entry.1=")
    }

    fn seeded() -> CatalogCache {
        let cache = CatalogCache::new();
        cache.replace(vec![
            entry("Intake Form", "New member intake"),
            entry("Feedback", "Quarterly survey"),
        ]);
        cache
    }

    #[test]
    fn empty_query_returns_the_full_catalog() {
        let cache = seeded();
        assert_eq!(cache.search("").len(), 2);
        assert_eq!(cache.search("   ").len(), 2);
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let cache = seeded();
        let hits = cache.search("form");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Intake Form");
    }

    #[test]
    fn search_matches_description_too() {
        let cache = seeded();
        let hits = cache.search("SURVEY");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Feedback");
    }

    #[test]
    fn search_never_mutates_the_catalog() {
        let cache = seeded();
        let _ = cache.search("form");
        let _ = cache.search("nothing matches this");
        assert_eq!(cache.search("").len(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn replace_is_wholesale() {
        let cache = seeded();
        cache.replace(vec![entry("Only", "")]);
        let all = cache.snapshot();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Only");
    }

    #[test]
    fn backend_order_is_preserved() {
        let cache = CatalogCache::new();
        cache.replace(vec![entry("B", ""), entry("A", ""), entry("C", "")]);
        let titles: Vec<_> = cache.snapshot().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, ["B", "A", "C"]);
    }

    #[test]
    fn clear_empties_the_catalog() {
        let cache = seeded();
        cache.clear();
        assert!(cache.is_empty());
    }
}
