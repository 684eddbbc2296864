//! The three text assets that make up a generated site.

use serde::{Deserialize, Serialize};

/// A complete set of site assets: a body-fragment of markup (not a full
/// document), a stylesheet, and a script.
///
/// All three fields must be non-empty before being handed to the writer;
/// the normalizer and the fallback generator both guarantee this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteAssets {
    /// Markup body fragment. Wrapped in a full document by the writer.
    pub html: String,

    /// Stylesheet, written verbatim.
    pub css: String,

    /// Script, written verbatim.
    pub js: String,
}

impl SiteAssets {
    /// True when all three assets are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.html.is_empty() && !self.css.is_empty() && !self.js.is_empty()
    }
}
