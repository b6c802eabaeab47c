//! Client-side adapter delivery.
//!
//! The rendered page is static; a small bundled script drives it in the
//! browser using the same attribute contract the controllers in
//! [`crate::ui`] read and write (`data-filter`, `data-tags`, `data-id`,
//! `data-src`, `#lightbox`).

use std::path::{Path, PathBuf};

use crate::config::PageConfig;

/// The bundled client adapter.
pub const CLIENT_SCRIPT: &str = include_str!("../../assets/folio.js");

/// How a document gets its client script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientScript {
    /// No script; the page is inert.
    Omitted,
    /// Reference a script the user provides.
    Linked(String),
    /// Reference the bundled script, written next to the page at `src`.
    Bundled(String),
    /// Embed the bundled script in the document.
    Inline,
}

impl ClientScript {
    /// Resolve delivery from page settings.
    ///
    /// With bundling on, a relative `script` path gets the bundled file and a
    /// missing one gets the script inlined. Absolute paths and URLs are always
    /// linked as given.
    #[must_use]
    pub fn from_config(page: &PageConfig) -> Self {
        match (&page.script, page.bundle_script) {
            (Some(src), true) if is_local(src) => Self::Bundled(src.clone()),
            (Some(src), _) => Self::Linked(src.clone()),
            (None, true) => Self::Inline,
            (None, false) => Self::Omitted,
        }
    }

    /// The same delivery for a page with no directory to write next to.
    #[must_use]
    pub fn inlined(self) -> Self {
        match self {
            Self::Bundled(_) => Self::Inline,
            other => other,
        }
    }

    /// The `src` to reference, if any.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Linked(src) | Self::Bundled(src) => Some(src),
            Self::Omitted | Self::Inline => None,
        }
    }

    /// Where the bundled script goes for a page written to `page_path`.
    #[must_use]
    pub fn bundle_path(&self, page_path: &Path) -> Option<PathBuf> {
        match self {
            Self::Bundled(src) => {
                let dir = page_path.parent().unwrap_or_else(|| Path::new(""));
                Some(dir.join(src))
            }
            _ => None,
        }
    }
}

fn is_local(src: &str) -> bool {
    !(src.contains("://") || src.starts_with('/'))
}
