//! Active-filter state.

use std::fmt;

use tracing::debug;

use crate::node::Element;
use crate::render::card::{CARD_CLASS, DATA_ID};
use crate::render::filter_bar::{DATA_FILTER, FILTER_BUTTON_CLASS};

/// Sentinel filter id matching every card.
pub const ALL_FILTER: &str = "all";

/// The active filter: everything, or one tag id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterId {
    /// Show every card.
    #[default]
    All,
    /// Show cards carrying this tag id.
    Tag(String),
}

impl FilterId {
    /// The id as used in filter controls.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_FILTER,
            Self::Tag(id) => id,
        }
    }

    /// Whether a card with these tags passes this filter.
    #[must_use]
    pub fn matches(&self, tags: &[String]) -> bool {
        match self {
            Self::All => true,
            Self::Tag(id) => tags.iter().any(|tag| tag == id),
        }
    }
}

impl From<&str> for FilterId {
    fn from(id: &str) -> Self {
        if id == ALL_FILTER {
            Self::All
        } else {
            Self::Tag(id.to_string())
        }
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter-relevant state of one rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    /// Project id.
    pub id: String,
    /// Resolved tag ids.
    pub tags: Vec<String>,
    /// Whether the card is currently shown.
    pub visible: bool,
}

impl CardState {
    /// A visible card.
    #[must_use]
    pub fn new(id: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            tags,
            visible: true,
        }
    }
}

/// Owns the active filter and re-applies card visibility.
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    active: FilterId,
}

impl FilterController {
    /// A controller with "all" active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active filter.
    #[must_use]
    pub fn active(&self) -> &FilterId {
        &self.active
    }

    /// Activate `filter` and update every card's visibility. Returns the
    /// number of visible cards.
    pub fn select(&mut self, filter: FilterId, cards: &mut [CardState]) -> usize {
        debug!(filter = %filter, "Selecting filter");
        self.active = filter;
        let mut visible = 0;
        for card in cards.iter_mut() {
            card.visible = self.active.matches(&card.tags);
            if card.visible {
                visible += 1;
            }
        }
        visible
    }

    /// Mark the active control and hide filtered-out cards in a rendered tree.
    pub fn apply_to(&self, root: &mut Element, cards: &[CardState]) {
        let active = self.active.as_str();
        root.visit_mut(&mut |el: &mut Element| {
            if el.has_class(FILTER_BUTTON_CLASS) {
                let is_active = el.get_attr(DATA_FILTER) == Some(active);
                el.set_class("active", is_active);
                el.set_attr("aria-pressed", if is_active { "true" } else { "false" });
            } else if el.has_class(CARD_CLASS) {
                let visible = el
                    .get_attr(DATA_ID)
                    .and_then(|id| cards.iter().find(|card| card.id == id))
                    .map_or(true, |card| card.visible);
                if visible {
                    el.remove_attr("hidden");
                } else {
                    el.set_attr("hidden", "");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<CardState> {
        vec![
            CardState::new("a", vec!["supabase".into()]),
            CardState::new("b", vec!["n8n".into()]),
            CardState::new("c", vec!["supabase".into(), "n8n".into()]),
        ]
    }

    fn visible(cards: &[CardState]) -> Vec<&str> {
        cards
            .iter()
            .filter(|c| c.visible)
            .map(|c| c.id.as_str())
            .collect()
    }

    #[test]
    fn test_filter_id_from_str() {
        assert_eq!(FilterId::from("all"), FilterId::All);
        assert_eq!(FilterId::from("n8n"), FilterId::Tag("n8n".into()));
        assert_eq!(FilterId::All.to_string(), "all");
        assert_eq!(FilterId::Tag("n8n".into()).as_str(), "n8n");
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(FilterController::new().active(), &FilterId::All);
    }

    #[test]
    fn test_select_tag() {
        let mut cards = cards();
        let mut controller = FilterController::new();

        let count = controller.select(FilterId::from("n8n"), &mut cards);
        assert_eq!(count, 2);
        assert_eq!(visible(&cards), ["b", "c"]);
    }

    #[test]
    fn test_select_all_restores_everything() {
        let mut cards = cards();
        let mut controller = FilterController::new();
        controller.select(FilterId::from("supabase"), &mut cards);

        controller.select(FilterId::All, &mut cards);
        assert_eq!(visible(&cards), ["a", "b", "c"]);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut cards = cards();
        let mut controller = FilterController::new();
        controller.select(FilterId::from("supabase"), &mut cards);
        let first = cards.clone();

        controller.select(FilterId::from("supabase"), &mut cards);
        assert_eq!(cards, first);
    }

    #[test]
    fn test_select_unknown_tag_hides_all() {
        let mut cards = cards();
        let mut controller = FilterController::new();
        assert_eq!(controller.select(FilterId::from("zapier"), &mut cards), 0);
    }

    #[test]
    fn test_apply_to_tree() {
        let mut root = Element::new("main")
            .child(
                Element::new("button")
                    .class(FILTER_BUTTON_CLASS)
                    .class("active")
                    .attr(DATA_FILTER, "all"),
            )
            .child(
                Element::new("button")
                    .class(FILTER_BUTTON_CLASS)
                    .attr(DATA_FILTER, "n8n"),
            )
            .child(Element::new("article").class(CARD_CLASS).attr(DATA_ID, "a"))
            .child(Element::new("article").class(CARD_CLASS).attr(DATA_ID, "b"));

        let mut cards = cards();
        let mut controller = FilterController::new();
        controller.select(FilterId::from("n8n"), &mut cards);
        controller.apply_to(&mut root, &cards);

        let active = root.find_by_class("active");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].get_attr(DATA_FILTER), Some("n8n"));

        let hidden: Vec<_> = root
            .find_by_class(CARD_CLASS)
            .iter()
            .filter(|c| c.get_attr("hidden").is_some())
            .filter_map(|c| c.get_attr(DATA_ID))
            .collect();
        assert_eq!(hidden, ["a"]);
    }
}
