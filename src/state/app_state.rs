//! Central `AppState` container mutated by the event and UI layers.

use std::sync::Arc;

use crate::state::types::{FieldKind, FieldState, Focus};

/// Number of popular-search shortcuts taken from the head of the
/// specialty corpus.
pub const POPULAR_COUNT: usize = 4;

/// Global application state shared by the event, networking, and UI layers.
///
/// State is owned exclusively by the main event loop and mutated only by
/// the handlers in `events` and `app`; background workers communicate
/// over channels instead of sharing it.
#[derive(Debug)]
pub struct AppState {
    /// Typeahead state for the location field.
    pub location: FieldState,
    /// Typeahead state for the search field.
    pub search: FieldState,
    /// Specialty vocabulary snapshot (shared with filter requests).
    pub specialties: Arc<Vec<String>>,
    /// Location vocabulary snapshot (shared with filter requests).
    pub locations: Arc<Vec<String>>,
    /// Whether the suggestion bootstrap is still in flight.
    pub loading_suggestions: bool,
    /// Which input currently has keyboard focus.
    pub focus: Focus,
    /// Most recent destination handed to the navigation collaborator.
    pub last_route: Option<String>,

    // Clickable regions in terminal cells (x, y, w, h), recorded at render
    // time and consumed by the mouse handler.
    /// Rectangle of the location input (its owning region for dismissal).
    pub location_field_rect: Option<(u16, u16, u16, u16)>,
    /// Rectangle of the search input (its owning region for dismissal).
    pub search_field_rect: Option<(u16, u16, u16, u16)>,
    /// Rectangle of the open location dropdown rows, if visible.
    pub location_dropdown_rect: Option<(u16, u16, u16, u16)>,
    /// Rectangle of the open search dropdown rows, if visible.
    pub search_dropdown_rect: Option<(u16, u16, u16, u16)>,
    /// Rectangle of the Search submit button.
    pub search_button_rect: Option<(u16, u16, u16, u16)>,
    /// Rectangles and labels of the popular-search shortcuts.
    pub popular_rects: Vec<((u16, u16, u16, u16), String)>,
    /// Rectangle of the "Others" affordance in the popular row.
    pub others_rect: Option<(u16, u16, u16, u16)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            location: FieldState::new(FieldKind::Location),
            search: FieldState::new(FieldKind::Search),
            specialties: Arc::new(Vec::new()),
            locations: Arc::new(Vec::new()),
            loading_suggestions: false,
            focus: Focus::Search,
            last_route: None,
            location_field_rect: None,
            search_field_rect: None,
            location_dropdown_rect: None,
            search_dropdown_rect: None,
            search_button_rect: None,
            popular_rects: Vec::new(),
            others_rect: None,
        }
    }
}

impl AppState {
    /// Shared reference to the field state for `kind`.
    #[must_use]
    pub const fn field(&self, kind: FieldKind) -> &FieldState {
        match kind {
            FieldKind::Location => &self.location,
            FieldKind::Search => &self.search,
        }
    }

    /// Mutable reference to the field state for `kind`.
    pub const fn field_mut(&mut self, kind: FieldKind) -> &mut FieldState {
        match kind {
            FieldKind::Location => &mut self.location,
            FieldKind::Search => &mut self.search,
        }
    }

    /// Corpus snapshot backing the field `kind`.
    #[must_use]
    pub fn corpus(&self, kind: FieldKind) -> Arc<Vec<String>> {
        match kind {
            FieldKind::Location => Arc::clone(&self.locations),
            FieldKind::Search => Arc::clone(&self.specialties),
        }
    }

    /// First [`POPULAR_COUNT`] specialty names, the popular-search shortcuts.
    #[must_use]
    pub fn popular_searches(&self) -> Vec<String> {
        self.specialties.iter().take(POPULAR_COUNT).cloned().collect()
    }
}
