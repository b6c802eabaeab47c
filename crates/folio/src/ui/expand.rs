//! Per-card expand/collapse state.
//!
//! Cards toggle independently; any number may be expanded at once.

use std::collections::HashSet;

use tracing::debug;

use crate::node::{Element, Node};
use crate::render::card::{CARD_CLASS, DATA_ID, HEADER_CLASS, INDICATOR_CLASS};

/// Class added to an expanded card.
pub const EXPANDED_CLASS: &str = "expanded";

/// Tracks which cards are expanded.
#[derive(Debug, Clone)]
pub struct ExpandController {
    expanded: HashSet<String>,
    view_label: String,
    hide_label: String,
}

impl Default for ExpandController {
    fn default() -> Self {
        Self::new("View Details", "Hide Details")
    }
}

impl ExpandController {
    /// A controller with every card collapsed.
    #[must_use]
    pub fn new(view_label: impl Into<String>, hide_label: impl Into<String>) -> Self {
        Self {
            expanded: HashSet::new(),
            view_label: view_label.into(),
            hide_label: hide_label.into(),
        }
    }

    /// Flip a card's state. Returns the new expanded flag.
    pub fn toggle(&mut self, project_id: &str) -> bool {
        let expanded = if self.expanded.remove(project_id) {
            false
        } else {
            self.expanded.insert(project_id.to_string());
            true
        };
        debug!(project = %project_id, expanded, "Toggled card");
        expanded
    }

    /// Whether a card is expanded.
    #[must_use]
    pub fn is_expanded(&self, project_id: &str) -> bool {
        self.expanded.contains(project_id)
    }

    /// Number of expanded cards.
    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    /// Indicator label for a card's current state.
    #[must_use]
    pub fn indicator_label(&self, project_id: &str) -> &str {
        if self.is_expanded(project_id) {
            &self.hide_label
        } else {
            &self.view_label
        }
    }

    /// Collapse every card.
    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    /// Write expanded classes, header state and indicator labels into a
    /// rendered tree.
    pub fn apply_to(&self, root: &mut Element) {
        root.visit_mut(&mut |el: &mut Element| {
            if !el.has_class(CARD_CLASS) {
                return;
            }
            let Some(id) = el.get_attr(DATA_ID).map(str::to_string) else {
                return;
            };
            let expanded = self.is_expanded(&id);
            let label = self.indicator_label(&id).to_string();
            el.set_class(EXPANDED_CLASS, expanded);

            for child in &mut el.children {
                let Some(part) = child.as_element_mut() else {
                    continue;
                };
                if part.has_class(HEADER_CLASS) {
                    part.set_attr("aria-expanded", if expanded { "true" } else { "false" });
                } else if part.has_class(INDICATOR_CLASS) {
                    if let Some(span) = part
                        .children
                        .iter_mut()
                        .filter_map(|n| n.as_element_mut())
                        .find(|e| e.tag == "span")
                    {
                        span.children = vec![Node::text(label.clone())];
                    }
                }
            }
        });
    }
}
