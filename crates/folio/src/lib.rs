//! `folio` - Render a project catalog into a filterable portfolio page
//!
//! This library turns a static catalog of projects and technology tags into a
//! view tree of expandable project cards, a tag filter bar and a screenshot
//! lightbox, and tracks the interactive state of that page.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod markup;
pub mod node;
pub mod render;
pub mod ui;

pub use catalog::{Catalog, Project, TagDefinition, TagRegistry};
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use node::{Element, Node};
pub use ui::{App, Event};
