//! Project card rendering.
//!
//! A card is a header (meta line, title, summary, tag chips) followed by a
//! detail panel holding the optional sections, and an expand indicator. The
//! detail panel is always built; expanding a card only changes its classes.

use tracing::{trace, warn};

use crate::catalog::{ArchitectureStep, Feature, Project, Screenshot, TagRegistry};
use crate::config::Labels;
use crate::markup;
use crate::node::{Element, Node};
use crate::ui::filter::ALL_FILTER;

/// Class of the card root element.
pub const CARD_CLASS: &str = "project-card";
/// Class of the card header, the expand/collapse trigger.
pub const HEADER_CLASS: &str = "project-header";
/// Class of the expand indicator.
pub const INDICATOR_CLASS: &str = "expand-indicator";
/// Class of a screenshot item, the lightbox trigger.
pub const SCREENSHOT_CLASS: &str = "screenshot-item";
/// Attribute carrying the project id.
pub const DATA_ID: &str = "data-id";
/// Attribute carrying the comma-joined resolved tag ids.
pub const DATA_TAGS: &str = "data-tags";
/// Attribute carrying a screenshot's image url.
pub const DATA_SRC: &str = "data-src";

/// Render a card with the default labels.
#[must_use]
pub fn render_card(project: &Project, registry: &TagRegistry) -> Element {
    render_card_with(project, registry, &Labels::default())
}

/// Render a card.
///
/// Tag ids missing from the registry are dropped from the chips and from the
/// card's tag annotation. Empty optional sections are omitted.
#[must_use]
pub fn render_card_with(project: &Project, registry: &TagRegistry, labels: &Labels) -> Element {
    let tags = resolved_tags(project, registry);

    let header = Element::new("div")
        .class(HEADER_CLASS)
        .attr("role", "button")
        .attr("aria-expanded", "false")
        .child(
            Element::new("div")
                .class("project-meta")
                .child(Element::new("span").class("project-type").text(&project.kind))
                .child(Element::new("span").class("project-date").text(&project.date)),
        )
        .child(Element::new("h3").class("project-title").text(&project.title))
        .child(Element::new("p").class("project-summary").text(&project.summary))
        .child(render_chips(&tags, registry));

    let mut inner = Element::new("div").class("project-details-inner");
    if let Some(challenge) = project.challenge() {
        let paragraph = Element::new("p").children(markup::render_inline(challenge));
        inner = inner.child(section(&labels.challenge).child(paragraph));
    }
    if !project.architecture.is_empty() {
        let diagram = render_architecture(&project.architecture, &labels.connector);
        inner = inner.child(section(&labels.architecture).child(diagram));
    }
    if !project.features.is_empty() {
        let list = render_features(&project.features, &labels.feature_separator);
        inner = inner.child(section(&labels.features).child(list));
    }
    if !project.highlights.is_empty() {
        let list = render_highlights(&project.highlights);
        inner = inner.child(section(&labels.highlights).child(list));
    }
    if !project.screenshots.is_empty() {
        let gallery = render_gallery(&project.screenshots);
        inner = inner.child(section(&labels.screenshots).child(gallery));
    }

    Element::new("article")
        .class(CARD_CLASS)
        .attr(DATA_TAGS, tags.join(","))
        .attr(DATA_ID, &project.id)
        .child(header)
        .child(Element::new("div").class("project-details").child(inner))
        .child(
            Element::new("div")
                .class(INDICATOR_CLASS)
                .child(Element::new("span").text(&labels.view_details))
                .child(chevron_glyph()),
        )
}

/// The project's tag ids that resolve in the registry, in project order.
#[must_use]
pub fn resolved_tags(project: &Project, registry: &TagRegistry) -> Vec<String> {
    project
        .tags
        .iter()
        .filter(|id| {
            if id.as_str() == ALL_FILTER {
                warn!(project = %project.id, "Skipping tag that shadows the all filter");
                return false;
            }
            let known = registry.contains(id);
            if !known {
                trace!(project = %project.id, tag = %id, "Skipping unregistered tag");
            }
            known
        })
        .cloned()
        .collect()
}

fn render_chips(tags: &[String], registry: &TagRegistry) -> Element {
    Element::new("div")
        .class("tech-stack")
        .children(tags.iter().filter_map(|id| registry.lookup(id)).map(|tag| {
            Element::new("span")
                .class("tech-tag")
                .attr("data-tag", &tag.id)
                .child(Element::new("img").attr("src", &tag.icon).attr("alt", &tag.label))
                .text(&tag.label)
        }))
}

fn section(heading: &str) -> Element {
    Element::new("div")
        .class("detail-section")
        .child(Element::new("h4").text(heading))
}

/// Steps left to right, with one connector strictly between each adjacent pair.
fn render_architecture(steps: &[ArchitectureStep], connector: &str) -> Element {
    let mut flow = Element::new("div").class("arch-flow");
    for (i, step) in steps.iter().enumerate() {
        if i > 0 {
            flow = flow.child(
                Element::new("span")
                    .class("arch-arrow")
                    .attr("aria-hidden", "true")
                    .text(connector),
            );
        }
        flow = flow.child(
            Element::new("div")
                .class("arch-node")
                .class_if("highlight", step.highlight)
                .child(Element::new("div").class("arch-node-label").text(&step.label))
                .child(Element::new("div").class("arch-node-name").text(&step.name)),
        );
    }
    Element::new("div").class("architecture-diagram").child(flow)
}

fn render_features(features: &[Feature], separator: &str) -> Element {
    Element::new("ul").children(features.iter().map(|feature| {
        Element::new("li")
            .child(Element::new("strong").text(&feature.title))
            .text(separator)
            .children(markup::render_inline(&feature.description))
    }))
}

fn render_highlights(highlights: &[String]) -> Element {
    Element::new("ul").children(
        highlights
            .iter()
            .map(|text| Element::new("li").children(markup::render_inline(text))),
    )
}

fn render_gallery(screenshots: &[Screenshot]) -> Element {
    Element::new("div")
        .class("screenshots-gallery")
        .children(screenshots.iter().map(render_screenshot))
}

fn render_screenshot(shot: &Screenshot) -> Element {
    let item = Element::new("div").class(SCREENSHOT_CLASS);
    if let Some(url) = shot.image_url() {
        item.attr(DATA_SRC, url)
            .child(Element::new("img").attr("src", url).attr("alt", &shot.alt))
    } else {
        item.child(
            Element::new("div")
                .class("screenshot-placeholder")
                .child(picture_glyph())
                .child(Element::new("span").text(&shot.placeholder)),
        )
    }
}

fn svg(stroke_width: &str) -> Element {
    Element::new("svg")
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("stroke-width", stroke_width)
        .attr("aria-hidden", "true")
}

fn picture_glyph() -> Node {
    svg("1.5")
        .child(
            Element::new("rect")
                .attr("x", "3")
                .attr("y", "3")
                .attr("width", "18")
                .attr("height", "18")
                .attr("rx", "2"),
        )
        .child(
            Element::new("circle")
                .attr("cx", "8.5")
                .attr("cy", "8.5")
                .attr("r", "1.5"),
        )
        .child(Element::new("path").attr("d", "m21 15-5-5L5 21"))
        .into()
}

fn chevron_glyph() -> Node {
    svg("2")
        .child(Element::new("path").attr("d", "m6 9 6 6 6-6"))
        .into()
}
