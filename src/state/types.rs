//! Core value types used by CareSeek state.

use std::sync::Arc;

/// Which typeahead field a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Left field: location vocabulary.
    Location,
    /// Right field: free text plus specialty vocabulary.
    Search,
}

/// Which input currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Location input.
    Location,
    /// Search input.
    Search,
}

impl Focus {
    /// Field kind corresponding to this focus.
    #[must_use]
    pub const fn field(self) -> FieldKind {
        match self {
            Self::Location => FieldKind::Location,
            Self::Search => FieldKind::Search,
        }
    }

    /// The other input, used by Tab cycling.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Location => Self::Search,
            Self::Search => Self::Location,
        }
    }
}

/// Session snapshot of the two suggestion vocabularies.
///
/// Fetched once at startup from the provider backend and never mutated
/// afterwards; the typeahead core only reads from it.
#[derive(Clone, Debug, Default)]
pub struct SuggestionSource {
    /// Known specialty names, backend order preserved.
    pub specialties: Vec<String>,
    /// Known location names, backend order preserved.
    pub locations: Vec<String>,
}

/// Debounced filter request sent to a field's background worker.
#[derive(Clone, Debug)]
pub struct FilterRequest {
    /// Monotonic identifier used to correlate responses and discard stale ones.
    pub id: u64,
    /// Raw input text at the time of the request.
    pub text: String,
    /// Corpus snapshot to filter against.
    pub corpus: Arc<Vec<String>>,
}

/// Filtered suggestions corresponding to a prior [`FilterRequest`].
#[derive(Clone, Debug)]
pub struct FilterResponse {
    /// Field the originating request belonged to.
    pub field: FieldKind,
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Filtered, capped suggestion list in corpus order.
    pub items: Vec<String>,
}

/// Canonical tuple handed to the navigation collaborator at commit time.
///
/// Built transiently per commit; it has no persisted identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchIntent {
    /// Trimmed free text from the search input.
    pub free_text: String,
    /// Committed specialty, empty when none is committed.
    pub specialty: String,
    /// Committed location, empty when none is committed.
    pub location: String,
}

/// Navigation handoff produced by a commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavRequest {
    /// Destination reference including the encoded query string.
    pub route: String,
}

/// Per-field typeahead state: input text, committed value, visible
/// suggestions, highlight, and dropdown visibility.
///
/// The dropdown state machine is `Closed` when `dropdown_open` is false,
/// `Open-NoHighlight` when open with `highlight == None`, and
/// `Open-Highlighted(i)` when open with `highlight == Some(i)`.
/// Invariant: `highlight` is `None` or a valid index into `suggestions`;
/// replacing `suggestions` resets it to `None`.
#[derive(Debug)]
pub struct FieldState {
    /// Which field this state belongs to.
    pub kind: FieldKind,
    /// What the user is typing.
    pub input: String,
    /// Canonical selected value; empty when nothing is committed.
    pub committed: String,
    /// Current filtered, capped candidate list.
    pub suggestions: Vec<String>,
    /// Highlighted index into `suggestions`, if any.
    pub highlight: Option<usize>,
    /// Dropdown visibility.
    pub dropdown_open: bool,
    /// Next request identifier to stamp onto a [`FilterRequest`].
    pub next_filter_id: u64,
    /// Identifier of the most recent request; older responses are discarded.
    pub latest_filter_id: u64,
}

impl FieldState {
    /// Fresh field state with empty defaults and a closed dropdown.
    #[must_use]
    pub const fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            input: String::new(),
            committed: String::new(),
            suggestions: Vec::new(),
            highlight: None,
            dropdown_open: false,
            next_filter_id: 0,
            latest_filter_id: 0,
        }
    }

    /// What: Replace the visible suggestions and reset the highlight.
    ///
    /// Inputs:
    /// - `items`: New filtered candidate list.
    ///
    /// Output: None (mutates in place).
    ///
    /// Details:
    /// - Resetting the highlight on every recompute is what keeps the
    ///   highlight-bounds invariant true by construction.
    pub fn set_suggestions(&mut self, items: Vec<String>) {
        self.suggestions = items;
        self.highlight = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Focus toggling and field mapping
    ///
    /// - Input: Both focus variants
    /// - Output: Toggle flips; field maps to the matching kind
    fn state_focus_toggle_and_field() {
        assert_eq!(Focus::Location.toggled(), Focus::Search);
        assert_eq!(Focus::Search.toggled(), Focus::Location);
        assert_eq!(Focus::Location.field(), FieldKind::Location);
        assert_eq!(Focus::Search.field(), FieldKind::Search);
    }

    #[test]
    /// What: Suggestion replacement resets highlight
    ///
    /// - Input: Field with a highlight set, then new suggestions
    /// - Output: Highlight cleared, suggestions swapped
    fn state_set_suggestions_resets_highlight() {
        let mut f = FieldState::new(FieldKind::Search);
        f.suggestions = vec!["a".into(), "b".into()];
        f.highlight = Some(1);
        f.set_suggestions(vec!["c".into()]);
        assert_eq!(f.suggestions, vec!["c".to_string()]);
        assert_eq!(f.highlight, None);
    }
}
