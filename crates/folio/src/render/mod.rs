//! Rendering from catalog data to view trees.
//!
//! Every renderer here is a pure function returning an [`Element`](crate::node::Element);
//! inserting the result anywhere is the caller's job. The [`html`] adapter
//! turns trees into markup text, and [`client`] ships the script that makes
//! the written page interactive.

pub mod card;
pub mod client;
pub mod filter_bar;
pub mod html;
pub mod page;

pub use card::{render_card, render_card_with, resolved_tags};
pub use client::ClientScript;
pub use filter_bar::{compute_used_tags, render_filter_bar, render_filter_bar_with};
pub use page::render_page;
