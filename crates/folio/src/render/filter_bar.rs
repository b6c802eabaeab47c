//! Filter bar rendering.

use std::collections::HashSet;

use crate::catalog::{Catalog, TagRegistry};
use crate::node::Element;
use crate::ui::filter::ALL_FILTER;

/// Class of a filter control.
pub const FILTER_BUTTON_CLASS: &str = "filter-btn";
/// Attribute carrying the filter id of a control.
pub const DATA_FILTER: &str = "data-filter";

/// Distinct tag ids used across the catalog, in first-seen order.
///
/// Ids missing from the registry are included; the filter bar skips them.
#[must_use]
pub fn compute_used_tags(catalog: &Catalog) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .projects
        .iter()
        .flat_map(|project| project.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

/// Render the filter bar with the default "all" label.
#[must_use]
pub fn render_filter_bar(used_tags: &[String], registry: &TagRegistry) -> Element {
    render_filter_bar_with(used_tags, registry, "All Projects")
}

/// Render the filter bar: the "all" control (active), then one control per
/// used tag that resolves in the registry. A tag id equal to the "all" filter
/// never gets its own control.
#[must_use]
pub fn render_filter_bar_with(
    used_tags: &[String],
    registry: &TagRegistry,
    all_label: &str,
) -> Element {
    let all = button(ALL_FILTER, all_label).class("active");
    let tags = used_tags
        .iter()
        .filter(|id| id.as_str() != ALL_FILTER)
        .filter_map(|id| registry.lookup(id))
        .map(|tag| button(&tag.id, &tag.label));

    Element::new("div")
        .class("filter-buttons")
        .attr("id", "filter-buttons")
        .attr("role", "toolbar")
        .child(all)
        .children(tags)
}

fn button(filter: &str, label: &str) -> Element {
    Element::new("button")
        .class(FILTER_BUTTON_CLASS)
        .attr("type", "button")
        .attr(DATA_FILTER, filter)
        .text(label)
}
