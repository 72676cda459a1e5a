//! Keyboard handling for a single typeahead field.
//!
//! This is the effectful shell over the pure transitions in
//! `logic::dropdown`: typing feeds the debounced filter pipeline, arrows
//! move the highlight, Enter resolves a commit, Escape closes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{self, dropdown};
use crate::state::{AppState, FieldKind, FilterRequest, NavRequest};

/// What: Route one key event to the field `kind`.
///
/// Inputs:
/// - `ke`: Key event received from the terminal.
/// - `app`: Mutable application state.
/// - `kind`: Field with keyboard focus.
/// - `query_tx`: Channel to that field's debounce worker.
/// - `nav_tx`: Channel to the navigation collaborator.
///
/// Output: None (mutates app state in place).
///
/// Details:
/// - Editing the input clears that field's commitment and reopens the
///   dropdown; suggestions are recomputed through the debounce worker.
/// - Enter on a closed dropdown is the plain form submit.
pub fn handle_field_key(
    ke: &KeyEvent,
    app: &mut AppState,
    kind: FieldKind,
    query_tx: &mpsc::UnboundedSender<FilterRequest>,
    nav_tx: &mpsc::UnboundedSender<NavRequest>,
) {
    match (ke.code, ke.modifiers) {
        (KeyCode::Char(ch), m) if m.is_empty() || m == KeyModifiers::SHIFT => {
            edit_input(app, kind, query_tx, |input| input.push(ch));
        }
        (KeyCode::Backspace, _) => {
            edit_input(app, kind, query_tx, |input| {
                input.pop();
            });
        }
        (KeyCode::Down, _) => {
            let field = app.field_mut(kind);
            if field.dropdown_open {
                field.highlight = dropdown::step_down(field.highlight, field.suggestions.len());
            }
        }
        (KeyCode::Up, _) => {
            let field = app.field_mut(kind);
            if field.dropdown_open {
                field.highlight = dropdown::step_up(field.highlight, field.suggestions.len());
            }
        }
        (KeyCode::Enter, _) => handle_enter(app, kind, nav_tx),
        (KeyCode::Esc, _) => dropdown::close(app.field_mut(kind)),
        _ => {}
    }
}

/// Apply an input edit, invalidate the field's commitment, reopen the
/// dropdown, and schedule a debounced recompute.
fn edit_input(
    app: &mut AppState,
    kind: FieldKind,
    query_tx: &mpsc::UnboundedSender<FilterRequest>,
    edit: impl FnOnce(&mut String),
) {
    let corpus = app.corpus(kind);
    let field = app.field_mut(kind);
    edit(&mut field.input);
    logic::note_edited(field);
    dropdown::open(field);
    logic::send_filter_query(field, corpus, query_tx);
}

/// What: Resolve Enter into a commit, a submit, or a no-op.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `kind`: Field with keyboard focus.
/// - `nav_tx`: Channel to the navigation collaborator.
///
/// Output: None.
///
/// Details:
/// - Open dropdown: the highlighted row wins; otherwise a sole visible
///   suggestion; otherwise the search field submits free text while the
///   location field deliberately does nothing (zero or many rows,
///   nothing highlighted).
/// - Closed dropdown: plain form submit for either field.
pub fn handle_enter(
    app: &mut AppState,
    kind: FieldKind,
    nav_tx: &mpsc::UnboundedSender<NavRequest>,
) {
    let field = app.field(kind);
    if !field.dropdown_open {
        logic::submit_search(app, &logic::CommitOverrides::default(), nav_tx);
        return;
    }
    let chosen = field
        .highlight
        .and_then(|i| field.suggestions.get(i))
        .or_else(|| {
            if field.suggestions.len() == 1 {
                field.suggestions.first()
            } else {
                None
            }
        })
        .cloned();
    match (chosen, kind) {
        (Some(value), FieldKind::Location) => logic::commit_location(app, &value),
        (Some(value), FieldKind::Search) => {
            logic::commit_search_suggestion(app, &value, nav_tx);
        }
        (None, FieldKind::Search) => {
            dropdown::close(&mut app.search);
            logic::submit_search(app, &logic::CommitOverrides::default(), nav_tx);
        }
        // Location with zero or many unhighlighted rows: no commit, state
        // unchanged.
        (None, FieldKind::Location) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::mpsc::unbounded_channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    /// What: Typing edits input, clears commitment, opens dropdown, queries
    ///
    /// - Input: Committed search field, type 'd'
    /// - Output: Input grows, commitment gone, request queued with new text
    fn field_typing_invalidates_commit_and_queries() {
        let (qtx, mut qrx) = unbounded_channel();
        let (ntx, _nrx) = unbounded_channel();
        let mut app = AppState::default();
        app.search.input = "Dentist".into();
        app.search.committed = "Dentist".into();
        handle_field_key(&key(KeyCode::Char('d')), &mut app, FieldKind::Search, &qtx, &ntx);
        assert_eq!(app.search.input, "Dentistd");
        assert_eq!(app.search.committed, "");
        assert!(app.search.dropdown_open);
        let req = qrx.try_recv().expect("filter request queued");
        assert_eq!(req.text, "Dentistd");
    }

    #[test]
    /// What: Arrows only move the highlight while the dropdown is open
    ///
    /// - Input: Closed dropdown then open one with three rows
    /// - Output: No highlight while closed; wrap-around while open
    fn field_arrows_respect_dropdown_state() {
        let (qtx, _qrx) = unbounded_channel();
        let (ntx, _nrx) = unbounded_channel();
        let mut app = AppState::default();
        app.location.suggestions = vec!["Pune".into(), "Mumbai".into(), "Delhi".into()];
        handle_field_key(&key(KeyCode::Down), &mut app, FieldKind::Location, &qtx, &ntx);
        assert_eq!(app.location.highlight, None);

        app.location.dropdown_open = true;
        handle_field_key(&key(KeyCode::Up), &mut app, FieldKind::Location, &qtx, &ntx);
        assert_eq!(app.location.highlight, Some(2));
        handle_field_key(&key(KeyCode::Down), &mut app, FieldKind::Location, &qtx, &ntx);
        assert_eq!(app.location.highlight, Some(0));
    }

    #[test]
    /// What: Enter commits a sole visible suggestion and navigates
    ///
    /// - Input: "der" typed, one suggestion visible, no highlight
    /// - Output: "Dermatologist" committed; navigation carries the specialty
    fn field_enter_commits_sole_suggestion() {
        let (qtx, _qrx) = unbounded_channel();
        let (ntx, mut nrx) = unbounded_channel();
        let mut app = AppState::default();
        app.specialties = Arc::new(vec!["Dermatologist".to_string()]);
        app.search.input = "der".into();
        app.search.dropdown_open = true;
        app.search.suggestions = vec!["Dermatologist".into()];
        handle_field_key(&key(KeyCode::Enter), &mut app, FieldKind::Search, &qtx, &ntx);
        assert_eq!(app.search.committed, "Dermatologist");
        assert!(!app.search.dropdown_open);
        let nav = nrx.try_recv().expect("navigation sent");
        assert!(nav.route.contains("specialty=Dermatologist"));
    }

    #[test]
    /// What: Location Enter with zero or many unhighlighted rows is a no-op
    ///
    /// - Input: Open location dropdown, empty then two rows, no highlight
    /// - Output: Nothing committed, dropdown still open, no navigation
    fn field_location_enter_ambiguous_is_noop() {
        let (qtx, _qrx) = unbounded_channel();
        let (ntx, mut nrx) = unbounded_channel();
        let mut app = AppState::default();
        app.location.dropdown_open = true;
        handle_field_key(&key(KeyCode::Enter), &mut app, FieldKind::Location, &qtx, &ntx);
        assert!(app.location.dropdown_open);
        assert_eq!(app.location.committed, "");

        app.location.suggestions = vec!["Pune".into(), "Mumbai".into()];
        handle_field_key(&key(KeyCode::Enter), &mut app, FieldKind::Location, &qtx, &ntx);
        assert!(app.location.dropdown_open);
        assert_eq!(app.location.committed, "");
        assert!(nrx.try_recv().is_err());
    }

    #[test]
    /// What: Search Enter with many rows and no highlight submits free text
    ///
    /// - Input: Open search dropdown with two rows, typed text "care"
    /// - Output: Dropdown closes; navigation carries only `search=care`
    fn field_search_enter_many_rows_submits_free_text() {
        let (qtx, _qrx) = unbounded_channel();
        let (ntx, mut nrx) = unbounded_channel();
        let mut app = AppState::default();
        app.search.input = "care".into();
        app.search.dropdown_open = true;
        app.search.suggestions = vec!["Cardiologist".into(), "Care Clinic".into()];
        handle_field_key(&key(KeyCode::Enter), &mut app, FieldKind::Search, &qtx, &ntx);
        assert!(!app.search.dropdown_open);
        let nav = nrx.try_recv().expect("navigation sent");
        assert_eq!(nav.route, "/doctors?search=care");
    }

    #[test]
    /// What: Escape closes the dropdown but keeps the raw query
    ///
    /// - Input: Open dropdown with text
    /// - Output: Closed, input untouched
    fn field_escape_closes_keeps_input() {
        let (qtx, _qrx) = unbounded_channel();
        let (ntx, _nrx) = unbounded_channel();
        let mut app = AppState::default();
        app.search.input = "der".into();
        app.search.dropdown_open = true;
        handle_field_key(&key(KeyCode::Esc), &mut app, FieldKind::Search, &qtx, &ntx);
        assert!(!app.search.dropdown_open);
        assert_eq!(app.search.input, "der");
    }
}
