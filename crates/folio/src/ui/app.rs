//! Event-driven page state.
//!
//! [`App`] renders the catalog once and then reacts to input events by
//! updating one controller per concern. [`App::view`] re-derives the page tree
//! from the rendered base plus the current state; nothing is rebuilt from the
//! catalog after load.

use tracing::{debug, info};

use super::expand::ExpandController;
use super::filter::{CardState, FilterController, FilterId};
use super::lightbox::{LightboxController, LightboxState};
use crate::catalog::{Catalog, Screenshot};
use crate::config::SiteConfig;
use crate::node::Element;
use crate::render::{render_page, resolved_tags};

/// The complete input surface of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The page finished loading. Resets all UI state.
    Ready,
    /// A filter control was activated.
    FilterActivate(String),
    /// A card header was activated.
    CardHeaderActivate(String),
    /// A screenshot item was activated.
    ScreenshotActivate {
        /// Owning project id.
        project_id: String,
        /// Position in the project's gallery.
        index: usize,
    },
    /// A key was pressed anywhere on the page.
    KeyPress(String),
}

/// Page state: rendered base tree, card states and the three controllers.
#[derive(Debug, Clone)]
pub struct App {
    catalog: Catalog,
    config: SiteConfig,
    base: Element,
    cards: Vec<CardState>,
    filter: FilterController,
    expand: ExpandController,
    lightbox: LightboxController,
}

impl App {
    /// Render the catalog and start in the initial state.
    #[must_use]
    pub fn new(catalog: Catalog, config: SiteConfig) -> Self {
        let base = render_page(&catalog, &config);
        let cards = card_states(&catalog);
        let expand =
            ExpandController::new(&config.labels.view_details, &config.labels.hide_details);
        let lightbox = LightboxController::new(&config.lightbox.close_key);
        info!(cards = cards.len(), "Page ready");
        Self {
            catalog,
            config,
            base,
            cards,
            filter: FilterController::new(),
            expand,
            lightbox,
        }
    }

    /// Handle one input event. Returns true if any state changed.
    pub fn dispatch(&mut self, event: Event) -> bool {
        debug!(?event, "Dispatching event");
        match event {
            Event::Ready => self.reset(),
            Event::FilterActivate(id) => {
                let filter = FilterId::from(id.as_str());
                let changed = *self.filter.active() != filter;
                self.filter.select(filter, &mut self.cards);
                changed
            }
            Event::CardHeaderActivate(id) => {
                if self.cards.iter().any(|card| card.id == id) {
                    self.expand.toggle(&id);
                    true
                } else {
                    debug!(project = %id, "Ignoring toggle for unknown card");
                    false
                }
            }
            Event::ScreenshotActivate { project_id, index } => {
                let url = self
                    .catalog
                    .project(&project_id)
                    .and_then(|project| project.screenshots.get(index))
                    .and_then(Screenshot::image_url);
                self.lightbox.open(url)
            }
            Event::KeyPress(key) => self.lightbox.handle_key(&key),
        }
    }

    fn reset(&mut self) -> bool {
        let changed = *self.filter.active() != FilterId::All
            || self.expand.expanded_count() > 0
            || self.lightbox.state().is_open();
        self.filter.select(FilterId::All, &mut self.cards);
        self.expand.reset();
        self.lightbox.close();
        changed
    }

    /// The page tree for the current state.
    #[must_use]
    pub fn view(&self) -> Element {
        let mut page = self.base.clone();
        self.filter.apply_to(&mut page, &self.cards);
        self.expand.apply_to(&mut page);
        self.lightbox.apply_to(&mut page);
        page
    }

    /// Ids of currently visible cards, in catalog order.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|card| card.visible)
            .map(|card| card.id.as_str())
            .collect()
    }

    /// The active filter.
    #[must_use]
    pub fn active_filter(&self) -> &FilterId {
        self.filter.active()
    }

    /// Whether a card is expanded.
    #[must_use]
    pub fn is_expanded(&self, project_id: &str) -> bool {
        self.expand.is_expanded(project_id)
    }

    /// Current lightbox state.
    #[must_use]
    pub fn lightbox(&self) -> &LightboxState {
        self.lightbox.state()
    }

    /// The loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The configuration the page was rendered with.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

fn card_states(catalog: &Catalog) -> Vec<CardState> {
    catalog
        .projects
        .iter()
        .map(|project| CardState::new(&project.id, resolved_tags(project, &catalog.tags)))
        .collect()
}
