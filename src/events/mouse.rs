//! Mouse handling: suggestion rows, field clicks, popular shortcuts, the
//! Search button, and outside-dismiss.
//!
//! Handler ordering is a correctness contract, not a style choice: open
//! dropdown rows are hit-tested before the outside-dismiss containment
//! check so a row click always commits before anything could close the
//! dropdown underneath it.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use crate::logic::{self, dropdown};
use crate::state::{AppState, FieldKind, FilterRequest, Focus, NavRequest};

/// Membership test for a recorded rectangle.
fn hit(rect: Option<(u16, u16, u16, u16)>, x: u16, y: u16) -> bool {
    rect.is_some_and(|(rx, ry, rw, rh)| x >= rx && x < rx + rw && y >= ry && y < ry + rh)
}

/// Row index under the cursor within a dropdown rect, if any.
fn row_at(rect: Option<(u16, u16, u16, u16)>, x: u16, y: u16, len: usize) -> Option<usize> {
    if !hit(rect, x, y) {
        return None;
    }
    let (_, ry, _, _) = rect?;
    let idx = usize::from(y - ry);
    (idx < len).then_some(idx)
}

/// What: Handle a single mouse event and update application state.
///
/// Inputs:
/// - `m`: Mouse event including position and button.
/// - `app`: Mutable application state (rects, fields, focus).
/// - `loc_query_tx` / `search_query_tx`: Per-field debounce channels.
/// - `nav_tx`: Channel to the navigation collaborator.
///
/// Output:
/// - `true` to request application exit (never used here); otherwise `false`.
///
/// Details:
/// - Hover over dropdown rows moves the highlight, like pointer-enter.
/// - Left-click order: dropdown rows, field regions, Search button,
///   popular shortcuts, "Others", then outside-dismiss per field.
pub fn handle_mouse_event(
    m: &MouseEvent,
    app: &mut AppState,
    loc_query_tx: &mpsc::UnboundedSender<FilterRequest>,
    search_query_tx: &mpsc::UnboundedSender<FilterRequest>,
    nav_tx: &mpsc::UnboundedSender<NavRequest>,
) -> bool {
    let (mx, my) = (m.column, m.row);
    match m.kind {
        MouseEventKind::Moved => {
            hover_highlight(app, mx, my);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            handle_left_down(app, mx, my, loc_query_tx, search_query_tx, nav_tx);
        }
        _ => {}
    }
    false
}

/// Pointer movement over an open dropdown highlights the hovered row.
fn hover_highlight(app: &mut AppState, mx: u16, my: u16) {
    if app.location.dropdown_open
        && let Some(idx) = row_at(app.location_dropdown_rect, mx, my, app.location.suggestions.len())
    {
        app.location.highlight = Some(idx);
    }
    if app.search.dropdown_open
        && let Some(idx) = row_at(app.search_dropdown_rect, mx, my, app.search.suggestions.len())
    {
        app.search.highlight = Some(idx);
    }
}

/// Ordered left-click dispatch; first hit wins.
fn handle_left_down(
    app: &mut AppState,
    mx: u16,
    my: u16,
    loc_query_tx: &mpsc::UnboundedSender<FilterRequest>,
    search_query_tx: &mpsc::UnboundedSender<FilterRequest>,
    nav_tx: &mpsc::UnboundedSender<NavRequest>,
) {
    // Suggestion rows first: the commit must win the race against
    // outside-dismiss. The non-owning field still gets its containment
    // check on every handled click.
    if app.location.dropdown_open
        && let Some(idx) = row_at(app.location_dropdown_rect, mx, my, app.location.suggestions.len())
    {
        if let Some(value) = app.location.suggestions.get(idx).cloned() {
            logic::commit_location(app, &value);
        }
        dismiss_if_outside(app, FieldKind::Search, mx, my);
        return;
    }
    if app.search.dropdown_open
        && let Some(idx) = row_at(app.search_dropdown_rect, mx, my, app.search.suggestions.len())
    {
        if let Some(value) = app.search.suggestions.get(idx).cloned() {
            logic::commit_search_suggestion(app, &value, nav_tx);
        }
        dismiss_if_outside(app, FieldKind::Location, mx, my);
        return;
    }

    // Field regions: focus, open, recompute from the current raw query.
    if hit(app.location_field_rect, mx, my) {
        focus_field(app, Focus::Location, loc_query_tx);
        dismiss_if_outside(app, FieldKind::Search, mx, my);
        return;
    }
    if hit(app.search_field_rect, mx, my) {
        focus_field(app, Focus::Search, search_query_tx);
        dismiss_if_outside(app, FieldKind::Location, mx, my);
        return;
    }

    if hit(app.search_button_rect, mx, my) {
        logic::submit_search(app, &logic::CommitOverrides::default(), nav_tx);
        dismiss_outside(app, mx, my);
        return;
    }

    for (rect, label) in app.popular_rects.clone() {
        if hit(Some(rect), mx, my) {
            logic::commit_popular_search(app, &label, nav_tx);
            dismiss_if_outside(app, FieldKind::Location, mx, my);
            return;
        }
    }
    if hit(app.others_rect, mx, my) {
        app.focus = Focus::Search;
        logic::clear_specialty_and_browse(app);
        dismiss_if_outside(app, FieldKind::Location, mx, my);
        return;
    }

    dismiss_outside(app, mx, my);
}

/// Give a field keyboard focus, open its dropdown, and schedule a
/// suggestion recompute.
fn focus_field(app: &mut AppState, focus: Focus, query_tx: &mpsc::UnboundedSender<FilterRequest>) {
    app.focus = focus;
    let kind = focus.field();
    let corpus = app.corpus(kind);
    let field = app.field_mut(kind);
    dropdown::open(field);
    logic::send_filter_query(field, corpus, query_tx);
}

/// Close one field's dropdown when the interaction point lies outside
/// its owning region (field plus its dropdown).
fn dismiss_if_outside(app: &mut AppState, kind: FieldKind, mx: u16, my: u16) {
    let (field_rect, dropdown_rect) = match kind {
        FieldKind::Location => (app.location_field_rect, app.location_dropdown_rect),
        FieldKind::Search => (app.search_field_rect, app.search_dropdown_rect),
    };
    if !hit(field_rect, mx, my) && !hit(dropdown_rect, mx, my) {
        dropdown::close(app.field_mut(kind));
    }
}

/// The global dismiss watcher: run the containment check for both fields.
fn dismiss_outside(app: &mut AppState, mx: u16, my: u16) {
    dismiss_if_outside(app, FieldKind::Location, mx, my);
    dismiss_if_outside(app, FieldKind::Search, mx, my);
}
