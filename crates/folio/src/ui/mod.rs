//! Interactive state: active filter, expanded cards, lightbox.
//!
//! Each concern has its own controller owning its state. Controllers never
//! read global state; they are handed the cards or the tree they act on.

pub mod app;
pub mod expand;
pub mod filter;
pub mod lightbox;

pub use app::{App, Event};
pub use expand::ExpandController;
pub use filter::{CardState, FilterController, FilterId};
pub use lightbox::{LightboxController, LightboxState};
