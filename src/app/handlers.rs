//! Channel message handlers for the main event loop.

use tokio::sync::mpsc;

use crate::logic::send_filter_query;
use crate::state::{AppState, FieldKind, FilterRequest, FilterResponse, NavRequest, SuggestionSource};

/// What: Install freshly fetched corpora and refresh both dropdowns.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `source`: Specialty and location vocabularies.
/// - `loc_query_tx` / `search_query_tx`: Per-field debounce channels.
///
/// Output: None.
///
/// Details:
/// - Re-queues a filter query for each field so suggestions computed
///   against the empty pre-fetch corpora are replaced.
pub fn handle_suggestions_loaded(
    app: &mut AppState,
    source: SuggestionSource,
    loc_query_tx: &mpsc::UnboundedSender<FilterRequest>,
    search_query_tx: &mpsc::UnboundedSender<FilterRequest>,
) {
    app.specialties = std::sync::Arc::new(source.specialties);
    app.locations = std::sync::Arc::new(source.locations);
    app.loading_suggestions = false;
    for kind in [FieldKind::Location, FieldKind::Search] {
        let corpus = app.corpus(kind);
        let tx = match kind {
            FieldKind::Location => loc_query_tx,
            FieldKind::Search => search_query_tx,
        };
        send_filter_query(app.field_mut(kind), corpus, tx);
    }
}

/// What: Apply a filter response, discarding stale ones.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `res`: Worker response tagged with the query id that produced it.
///
/// Output: None.
///
/// Details:
/// - A response older than the field's latest issued query is dropped
///   without touching the suggestion list or highlight.
pub fn handle_filter_response(app: &mut AppState, res: FilterResponse) {
    let field = app.field_mut(res.field);
    if res.id != field.latest_filter_id {
        tracing::debug!(
            field = ?res.field,
            id = res.id,
            latest = field.latest_filter_id,
            "discarding stale filter response"
        );
        return;
    }
    field.set_suggestions(res.items);
}

/// Record a navigation hand-off for the status line.
pub fn handle_nav(app: &mut AppState, nav: NavRequest) {
    tracing::info!(route = %nav.route, "navigating to results");
    app.last_route = Some(nav.route);
}
