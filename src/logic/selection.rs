//! Selection commits: resolving a chosen suggestion into canonical state.
//!
//! Committing a location only fixes the value; committing a search
//! suggestion (or a popular shortcut) is an implicit "search now" and
//! submits in the same action.

use tokio::sync::mpsc;

use crate::logic::dropdown;
use crate::logic::query::{CommitOverrides, submit_search};
use crate::state::{AppState, FieldState, NavRequest};

/// What: Commit a location suggestion.
///
/// Inputs:
/// - `app`: Application state.
/// - `value`: Chosen location text.
///
/// Output: None (mutates in place).
///
/// Details:
/// - Sets both the committed value and the visible input so the field
///   displays the chosen text, then closes the dropdown. Never navigates.
pub fn commit_location(app: &mut AppState, value: &str) {
    app.location.committed = value.to_string();
    app.location.input = value.to_string();
    dropdown::close(&mut app.location);
}

/// What: Commit a specialty suggestion and submit immediately.
///
/// Inputs:
/// - `app`: Application state.
/// - `value`: Chosen specialty text.
/// - `nav_tx`: Channel to the navigation collaborator.
///
/// Output: None.
///
/// Details:
/// - The submit uses the just-committed specialty as an override together
///   with the current committed location, so the navigation reflects this
///   commit even though it happens in the same action.
pub fn commit_search_suggestion(
    app: &mut AppState,
    value: &str,
    nav_tx: &mpsc::UnboundedSender<NavRequest>,
) {
    app.search.committed = value.to_string();
    app.search.input = value.to_string();
    dropdown::close(&mut app.search);
    let overrides = CommitOverrides {
        specialty: Some(value.to_string()),
        location: None,
    };
    submit_search(app, &overrides, nav_tx);
}

/// Commit a popular-search shortcut; same effect as selecting the
/// suggestion from the dropdown.
pub fn commit_popular_search(
    app: &mut AppState,
    value: &str,
    nav_tx: &mpsc::UnboundedSender<NavRequest>,
) {
    commit_search_suggestion(app, value, nav_tx);
}

/// What: The "Others" affordance: clear the specialty commitment and open
/// the search dropdown without submitting.
pub fn clear_specialty_and_browse(app: &mut AppState) {
    app.search.committed.clear();
    dropdown::open(&mut app.search);
}

/// What: Note that a field's raw query was edited.
///
/// Inputs:
/// - `field`: Field whose input just changed.
///
/// Output: None.
///
/// Details:
/// - Typing invalidates a prior selection for that field only; the other
///   field's commitment is untouched by construction.
pub fn note_edited(field: &mut FieldState) {
    field.committed.clear();
}
