//! Query commit: turning canonical field state into a navigation handoff.

use tokio::sync::mpsc;

use crate::state::{AppState, FieldState, FilterRequest, NavRequest, SearchIntent};
use crate::util::percent_encode;

/// Results route prefix on the provider site.
const RESULTS_PATH: &str = "/doctors";

/// Values that replace the committed field state for a single commit.
///
/// Selecting a suggestion submits in the same action as the commit, before
/// the state mutation would be observable; the override carries the
/// just-committed value.
#[derive(Clone, Debug, Default)]
pub struct CommitOverrides {
    /// Specialty to use instead of the committed one.
    pub specialty: Option<String>,
    /// Location to use instead of the committed one.
    pub location: Option<String>,
}

/// What: Build the canonical [`SearchIntent`] for a commit.
///
/// Inputs:
/// - `app`: Current application state.
/// - `overrides`: Per-commit replacements for specialty and location.
///
/// Output:
/// - Intent with trimmed free text and override-resolved committed values.
#[must_use]
pub fn build_intent(app: &AppState, overrides: &CommitOverrides) -> SearchIntent {
    SearchIntent {
        free_text: app.search.input.trim().to_string(),
        specialty: overrides
            .specialty
            .clone()
            .unwrap_or_else(|| app.search.committed.clone()),
        location: overrides
            .location
            .clone()
            .unwrap_or_else(|| app.location.committed.clone()),
    }
}

/// What: Serialize an intent into the results route.
///
/// Inputs:
/// - `intent`: Canonical search tuple.
///
/// Output:
/// - `/doctors?search=..&specialty=..&location=..` with each parameter
///   URL-encoded and empty parameters omitted entirely.
#[must_use]
pub fn route_for(intent: &SearchIntent) -> String {
    let mut params: Vec<String> = Vec::with_capacity(3);
    if !intent.free_text.is_empty() {
        params.push(format!("search={}", percent_encode(&intent.free_text)));
    }
    if !intent.specialty.is_empty() {
        params.push(format!("specialty={}", percent_encode(&intent.specialty)));
    }
    if !intent.location.is_empty() {
        params.push(format!("location={}", percent_encode(&intent.location)));
    }
    if params.is_empty() {
        RESULTS_PATH.to_string()
    } else {
        format!("{RESULTS_PATH}?{}", params.join("&"))
    }
}

/// What: Commit the current state and hand the destination to navigation.
///
/// Inputs:
/// - `app`: Current application state (read only here).
/// - `overrides`: Per-commit specialty/location replacements.
/// - `nav_tx`: Channel to the navigation collaborator.
///
/// Output: None; fire-and-forget from the core's perspective.
///
/// Details:
/// - Called exactly once per discrete user commit action (Enter, row
///   click, popular shortcut, Search button); callers never chain it.
pub fn submit_search(
    app: &AppState,
    overrides: &CommitOverrides,
    nav_tx: &mpsc::UnboundedSender<NavRequest>,
) {
    let intent = build_intent(app, overrides);
    let route = route_for(&intent);
    tracing::info!(route = %route, "search committed");
    let _ = nav_tx.send(NavRequest { route });
}

/// What: Send the field's current input over its filter channel with a fresh id.
///
/// Inputs:
/// - `field`: Field whose `next_filter_id`/`latest_filter_id` advance.
/// - `corpus`: Vocabulary snapshot to filter against.
/// - `query_tx`: Channel to that field's debounce worker.
///
/// Output:
/// - Sends a [`FilterRequest`] with an incremented id; updates ids in `field`.
///
/// Details:
/// - The id lets the response handler discard stale results so the most
///   recent keystroke always wins.
pub fn send_filter_query(
    field: &mut FieldState,
    corpus: std::sync::Arc<Vec<String>>,
    query_tx: &mpsc::UnboundedSender<FilterRequest>,
) {
    let id = field.next_filter_id;
    field.next_filter_id += 1;
    field.latest_filter_id = id;
    let _ = query_tx.send(FilterRequest {
        id,
        text: field.input.clone(),
        corpus,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldKind;
    use std::sync::Arc;

    #[test]
    /// What: Route serialization omits empty parameters
    ///
    /// - Input: Intent with only a specialty
    /// - Output: `specialty=Dentist` and nothing else
    fn query_route_omits_empty_params() {
        let intent = SearchIntent {
            free_text: String::new(),
            specialty: "Dentist".into(),
            location: String::new(),
        };
        assert_eq!(route_for(&intent), "/doctors?specialty=Dentist");
        assert_eq!(route_for(&SearchIntent::default()), "/doctors");
    }

    #[test]
    /// What: Route parameters are URL-encoded and ordered
    ///
    /// - Input: All three fields populated, with spaces
    /// - Output: `search`, `specialty`, `location` in order, `%20` escapes
    fn query_route_encodes_all_params() {
        let intent = SearchIntent {
            free_text: "eye care".into(),
            specialty: "ENT Specialist".into(),
            location: "Navi Mumbai".into(),
        };
        assert_eq!(
            route_for(&intent),
            "/doctors?search=eye%20care&specialty=ENT%20Specialist&location=Navi%20Mumbai"
        );
    }

    #[test]
    /// What: Overrides replace committed values; free text is trimmed
    ///
    /// - Input: App with committed location, override specialty, padded input
    /// - Output: Intent uses override and trimmed text
    fn query_build_intent_overrides_and_trim() {
        let mut app = AppState::default();
        app.search.input = "  skin doctor  ".into();
        app.location.committed = "Pune".into();
        let intent = build_intent(
            &app,
            &CommitOverrides {
                specialty: Some("Dermatologist".into()),
                location: None,
            },
        );
        assert_eq!(intent.free_text, "skin doctor");
        assert_eq!(intent.specialty, "Dermatologist");
        assert_eq!(intent.location, "Pune");
    }

    #[tokio::test]
    /// What: `send_filter_query` stamps fresh ids and forwards the input
    ///
    /// - Input: Field with text "der", called twice
    /// - Output: Ids advance; the channel carries the current text
    async fn query_send_filter_query_increments_ids() {
        let mut field = crate::state::FieldState::new(FieldKind::Search);
        field.input = "der".into();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let corpus = Arc::new(vec!["Dermatologist".to_string()]);
        send_filter_query(&mut field, Arc::clone(&corpus), &tx);
        send_filter_query(&mut field, corpus, &tx);
        assert_eq!(field.latest_filter_id, 1);
        let first = tokio::time::timeout(std::time::Duration::from_millis(50), rx.recv())
            .await
            .ok()
            .flatten()
            .expect("request sent");
        assert_eq!(first.id, 0);
        assert_eq!(first.text, "der");
    }
}
