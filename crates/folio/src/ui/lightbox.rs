//! Lightbox overlay state.
//!
//! There is exactly one overlay. Opening while open replaces the image.

use tracing::{debug, trace};

use crate::node::Element;
use crate::render::page::{LIGHTBOX_ID, LIGHTBOX_IMAGE_ID};

/// Overlay state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    /// Nothing displayed.
    #[default]
    Closed,
    /// Displaying one image.
    Open {
        /// The displayed image url.
        url: String,
    },
}

impl LightboxState {
    /// Whether the overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// The displayed image url, if open.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Open { url } => Some(url),
            Self::Closed => None,
        }
    }
}

/// Owns the overlay state and the cancellation key.
#[derive(Debug, Clone)]
pub struct LightboxController {
    state: LightboxState,
    close_key: String,
}

impl Default for LightboxController {
    fn default() -> Self {
        Self::new("Escape")
    }
}

impl LightboxController {
    /// A closed lightbox that closes on `close_key`.
    #[must_use]
    pub fn new(close_key: impl Into<String>) -> Self {
        Self {
            state: LightboxState::Closed,
            close_key: close_key.into(),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    /// Show an image. With no image (or an empty url) this is a no-op and
    /// returns false.
    pub fn open(&mut self, image_url: Option<&str>) -> bool {
        let Some(url) = image_url.map(str::trim).filter(|url| !url.is_empty()) else {
            trace!("Lightbox activated without an image");
            return false;
        };
        debug!(url = %url, "Opening lightbox");
        self.state = LightboxState::Open {
            url: url.to_string(),
        };
        true
    }

    /// Close the overlay. Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        if !self.state.is_open() {
            return false;
        }
        debug!("Closing lightbox");
        self.state = LightboxState::Closed;
        true
    }

    /// Handle a key press. Only the close key does anything, and only while open.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == self.close_key && self.close()
    }

    /// Write the overlay state into a rendered tree.
    pub fn apply_to(&self, root: &mut Element) {
        let url = self.state.url();
        root.visit_mut(&mut |el: &mut Element| {
            let id = el.get_attr("id").map(str::to_string);
            match id.as_deref() {
                Some(LIGHTBOX_ID) => {
                    el.set_class("active", url.is_some());
                    el.set_attr("aria-hidden", if url.is_some() { "false" } else { "true" });
                }
                Some(LIGHTBOX_IMAGE_ID) => match url {
                    Some(url) => el.set_attr("src", url),
                    None => el.remove_attr("src"),
                },
                _ => {}
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://img.example/docs.png";

    #[test]
    fn test_closed_by_default() {
        let lightbox = LightboxController::default();
        assert_eq!(lightbox.state(), &LightboxState::Closed);
        assert!(lightbox.state().url().is_none());
    }

    #[test]
    fn test_open_then_close() {
        let mut lightbox = LightboxController::default();
        assert!(lightbox.open(Some(URL)));
        assert_eq!(lightbox.state().url(), Some(URL));

        assert!(lightbox.close());
        assert_eq!(lightbox.state(), &LightboxState::Closed);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut lightbox = LightboxController::default();
        assert!(!lightbox.close());
        assert!(!lightbox.close());
        assert_eq!(lightbox.state(), &LightboxState::Closed);
    }

    #[test]
    fn test_open_without_image_is_noop() {
        let mut lightbox = LightboxController::default();
        assert!(!lightbox.open(None));
        assert!(!lightbox.open(Some("")));
        assert!(!lightbox.state().is_open());
    }

    #[test]
    fn test_open_without_image_keeps_current() {
        let mut lightbox = LightboxController::default();
        lightbox.open(Some(URL));
        lightbox.open(None);
        assert_eq!(lightbox.state().url(), Some(URL));
    }

    #[test]
    fn test_open_replaces_image() {
        let mut lightbox = LightboxController::default();
        lightbox.open(Some(URL));
        lightbox.open(Some("https://img.example/schema.png"));
        assert_eq!(
            lightbox.state().url(),
            Some("https://img.example/schema.png")
        );
    }

    #[test]
    fn test_close_key() {
        let mut lightbox = LightboxController::default();
        assert!(!lightbox.handle_key("Escape"));

        lightbox.open(Some(URL));
        assert!(!lightbox.handle_key("Enter"));
        assert!(lightbox.state().is_open());
        assert!(lightbox.handle_key("Escape"));
        assert!(!lightbox.state().is_open());
    }

    #[test]
    fn test_custom_close_key() {
        let mut lightbox = LightboxController::new("q");
        lightbox.open(Some(URL));
        assert!(!lightbox.handle_key("Escape"));
        assert!(lightbox.handle_key("q"));
    }

    #[test]
    fn test_apply_to_tree() {
        let mut root = Element::new("main").child(
            Element::new("div")
                .attr("id", LIGHTBOX_ID)
                .child(Element::new("img").attr("id", LIGHTBOX_IMAGE_ID)),
        );
        let mut lightbox = LightboxController::default();
        lightbox.open(Some(URL));
        lightbox.apply_to(&mut root);

        let overlay = root.find_all(&|e: &Element| e.get_attr("id") == Some(LIGHTBOX_ID))[0];
        assert!(overlay.has_class("active"));
        let img = root.find_by_tag("img")[0];
        assert_eq!(img.get_attr("src"), Some(URL));

        lightbox.close();
        lightbox.apply_to(&mut root);
        assert!(root.find_by_class("active").is_empty());
        assert!(root.find_by_tag("img")[0].get_attr("src").is_none());
    }
}
