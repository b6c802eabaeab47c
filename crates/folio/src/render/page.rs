//! Whole-page layout: heading, filter bar, card grid and lightbox overlay.

use tracing::debug;

use super::card::render_card_with;
use super::filter_bar::{compute_used_tags, render_filter_bar_with};
use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::node::Element;

/// Id of the card grid container.
pub const GRID_ID: &str = "projects-grid";
/// Id of the lightbox overlay.
pub const LIGHTBOX_ID: &str = "lightbox";
/// Id of the lightbox image.
pub const LIGHTBOX_IMAGE_ID: &str = "lightbox-img";

/// Lightbox close key, on the page root for the client script.
pub const DATA_CLOSE_KEY: &str = "data-close-key";
/// Indicator label of a collapsed card.
pub const DATA_LABEL_VIEW: &str = "data-label-view";
/// Indicator label of an expanded card.
pub const DATA_LABEL_HIDE: &str = "data-label-hide";

/// Render the initial page: "all" filter active, every card visible and
/// collapsed, lightbox closed.
#[must_use]
pub fn render_page(catalog: &Catalog, config: &SiteConfig) -> Element {
    let used = compute_used_tags(catalog);
    debug!(
        projects = catalog.projects.len(),
        used_tags = used.len(),
        "Rendering page"
    );

    let grid = Element::new("section")
        .class("projects-grid")
        .attr("id", GRID_ID)
        .children(
            catalog
                .projects
                .iter()
                .map(|project| render_card_with(project, &catalog.tags, &config.labels)),
        );

    Element::new("main")
        .class("portfolio")
        .attr(DATA_CLOSE_KEY, &config.lightbox.close_key)
        .attr(DATA_LABEL_VIEW, &config.labels.view_details)
        .attr(DATA_LABEL_HIDE, &config.labels.hide_details)
        .child(
            Element::new("header")
                .class("portfolio-header")
                .child(Element::new("h1").text(&config.site.heading)),
        )
        .child(render_filter_bar_with(
            &used,
            &catalog.tags,
            &config.labels.all_filter,
        ))
        .child(grid)
        .child(render_lightbox(&config.labels.close))
}

fn render_lightbox(close_label: &str) -> Element {
    Element::new("div")
        .class("lightbox")
        .attr("id", LIGHTBOX_ID)
        .attr("role", "dialog")
        .attr("aria-hidden", "true")
        .child(
            Element::new("button")
                .class("lightbox-close")
                .attr("type", "button")
                .attr("aria-label", "Close")
                .text(close_label),
        )
        .child(Element::new("img").attr("id", LIGHTBOX_IMAGE_ID).attr("alt", ""))
}

/// Find an element by its `id` attribute.
#[must_use]
pub fn find_by_id<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    root.find_all(&|e: &Element| e.get_attr("id") == Some(id))
        .into_iter()
        .next()
}
