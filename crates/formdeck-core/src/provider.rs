//! Document-provider detection and viewer URL templating.
//!
//! Two providers get special treatment when an entry is opened: prefilled
//! form links receive the caller's identity plus an embedding flag, and
//! slide-deck links are rewritten from their "publish" shape to the
//! embeddable one. Every other URL is used verbatim.

use crate::error::{Error, Result};
use crate::identity::Identity;

/// Substring identifying a form-provider URL.
pub const FORM_PROVIDER_MARKER: &str = "docs.google.com/forms";

/// Substring identifying a slide-deck-provider URL.
pub const SLIDES_PROVIDER_MARKER: &str = "docs.google.com/presentation";

/// Prefill-field marker a saved form URL must contain.
pub const ENTRY_PREFILL_MARKER: &str = "entry.";

/// Trailing assignment marker a prefilled form URL must end with.
pub const ASSIGNMENT_MARKER: &str = "=";

/// Embedding flag appended to templated form URLs.
const EMBED_FLAG: &str = "&embedded=true";

/// The external document system behind an entry's URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Prefilled form; the identity token is appended at open time.
    Form,
    /// Published slide deck; rewritten to its embed shape at open time.
    SlideDeck,
    /// Anything else; used verbatim.
    Other,
}

impl Provider {
    /// Detects the provider by substring match on the URL.
    #[must_use]
    pub fn detect(url: &str) -> Self {
        if url.contains(FORM_PROVIDER_MARKER) {
            Self::Form
        } else if url.contains(SLIDES_PROVIDER_MARKER) {
            Self::SlideDeck
        } else {
            Self::Other
        }
    }
}

/// Templates a document URL for embedded viewing.
///
/// - Form provider: requires the trailing `=` assignment marker, then appends
///   the URL-encoded identity and the embedding flag.
/// - Slide-deck provider: rewrites the first `/pub?` segment to `/embed?`;
///   when no embed segment is present, inserts `/embed` after the
///   `/d/e/<token>` document-id segment.
/// - Any other URL is returned unchanged.
///
/// # Errors
///
/// Returns [`Error::Viewer`] when a form URL does not end with the trailing
/// assignment marker.
pub fn template_url(url: &str, identity: &Identity) -> Result<String> {
    match Provider::detect(url) {
        Provider::Form => {
            if !url.ends_with(ASSIGNMENT_MARKER) {
                return Err(Error::viewer(
                    "a form link must end with \"=\" so the identity can be appended",
                ));
            }
            Ok(format!(
                "{url}{}{EMBED_FLAG}",
                urlencoding::encode(identity.as_str())
            ))
        }
        Provider::SlideDeck => Ok(embed_slide_deck(url)),
        Provider::Other => Ok(url.to_string()),
    }
}

/// Rewrites a slide-deck URL into its embeddable form.
fn embed_slide_deck(url: &str) -> String {
    let rewritten = url.replacen("/pub?", "/embed?", 1);
    if rewritten.contains("/embed?") {
        return rewritten;
    }
    insert_embed_segment(&rewritten)
}

/// Inserts `/embed` after the `/d/e/<token>` segment, if one exists.
fn insert_embed_segment(url: &str) -> String {
    const DOC_ID_PREFIX: &str = "/d/e/";

    let Some(start) = url.find(DOC_ID_PREFIX) else {
        return url.to_string();
    };

    let token_start = start + DOC_ID_PREFIX.len();
    let token_end = url[token_start..]
        .find('/')
        .map_or(url.len(), |offset| token_start + offset);

    let mut out = String::with_capacity(url.len() + "/embed".len());
    out.push_str(&url[..token_end]);
    out.push_str("/embed");
    out.push_str(&url[token_end..]);
    out
}
