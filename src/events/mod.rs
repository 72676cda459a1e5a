//! Event handling layer for CareSeek's TUI.
//!
//! Converts raw `crossterm` events into mutations on
//! [`AppState`](crate::state::AppState): typing and keyboard navigation go
//! to the focused field, Tab switches fields, mouse events feed the
//! hit-test dispatch in [`mouse`]. All functions here are synchronous;
//! debounced filtering happens in the background workers reached through
//! the provided channels.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{self, dropdown};
use crate::state::{AppState, FieldKind, FilterRequest, NavRequest};

pub mod field;
pub mod mouse;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event (key, mouse, resize).
/// - `app`: Mutable application state.
/// - `loc_query_tx` / `search_query_tx`: Per-field debounce channels.
/// - `nav_tx`: Channel to the navigation collaborator.
///
/// Output:
/// - `true` to request application exit; `false` to continue.
///
/// Details:
/// - Ctrl+C exits. Tab and Shift+Tab move focus between the two fields
///   and open the newly focused field's dropdown, recomputing suggestions
///   from its current raw query.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    loc_query_tx: &mpsc::UnboundedSender<FilterRequest>,
    search_query_tx: &mpsc::UnboundedSender<FilterRequest>,
    nav_tx: &mpsc::UnboundedSender<NavRequest>,
) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => {
            if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
                return true;
            }
            match ke.code {
                KeyCode::Tab | KeyCode::BackTab => {
                    app.focus = app.focus.toggled();
                    let kind = app.focus.field();
                    let corpus = app.corpus(kind);
                    let fs = app.field_mut(kind);
                    dropdown::open(fs);
                    let query_tx = match kind {
                        FieldKind::Location => loc_query_tx,
                        FieldKind::Search => search_query_tx,
                    };
                    logic::send_filter_query(fs, corpus, query_tx);
                }
                _ => {
                    let kind = app.focus.field();
                    let query_tx = match kind {
                        FieldKind::Location => loc_query_tx,
                        FieldKind::Search => search_query_tx,
                    };
                    field::handle_field_key(ke, app, kind, query_tx, nav_tx);
                }
            }
            false
        }
        CEvent::Mouse(m) => mouse::handle_mouse_event(m, app, loc_query_tx, search_query_tx, nav_tx),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    /// What: Ctrl+C requests exit; plain keys do not
    ///
    /// - Input: Ctrl+C and a plain character
    /// - Output: `true` then `false`
    fn events_ctrl_c_exits() {
        let (ltx, _lrx) = unbounded_channel();
        let (stx, _srx) = unbounded_channel();
        let (ntx, _nrx) = unbounded_channel();
        let mut app = AppState::default();
        let quit = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(handle_event(&quit, &mut app, &ltx, &stx, &ntx));
        let ch = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!handle_event(&ch, &mut app, &ltx, &stx, &ntx));
    }

    #[test]
    /// What: Tab moves focus and opens the newly focused dropdown
    ///
    /// - Input: Default focus (search), press Tab
    /// - Output: Location focused and open, filter request queued
    fn events_tab_switches_focus_and_opens() {
        let (ltx, mut lrx) = unbounded_channel();
        let (stx, _srx) = unbounded_channel();
        let (ntx, _nrx) = unbounded_channel();
        let mut app = AppState::default();
        let tab = CEvent::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert!(!handle_event(&tab, &mut app, &ltx, &stx, &ntx));
        assert_eq!(app.focus, crate::state::Focus::Location);
        assert!(app.location.dropdown_open);
        assert!(lrx.try_recv().is_ok());
    }
}
