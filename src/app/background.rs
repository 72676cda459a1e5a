//! Channel wiring and background workers.
//!
//! Each typeahead field owns one debounce worker: queries arriving inside
//! the debounce window collapse to the latest one, then the pure filter
//! runs and the response travels back tagged with the query id that
//! produced it. The main loop discards responses whose id is stale.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::{
    select,
    sync::mpsc,
    time::{Duration, sleep},
};

use crate::logic::{filter_search_suggestions, filter_suggestions, SUGGESTION_CAP};
use crate::sources;
use crate::state::{FieldKind, FilterRequest, FilterResponse, NavRequest, SuggestionSource};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Bundles every sender and receiver used between the main event loop
///   and the background workers, and spawns the per-field debounce
///   workers on construction.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub loc_query_tx: mpsc::UnboundedSender<FilterRequest>,
    pub search_query_tx: mpsc::UnboundedSender<FilterRequest>,
    pub filter_res_rx: mpsc::UnboundedReceiver<FilterResponse>,
    pub suggestions_tx: mpsc::UnboundedSender<SuggestionSource>,
    pub suggestions_rx: mpsc::UnboundedReceiver<SuggestionSource>,
    pub nav_tx: mpsc::UnboundedSender<NavRequest>,
    pub nav_rx: mpsc::UnboundedReceiver<NavRequest>,
}

impl Channels {
    /// What: Create all channels and spawn the two filter workers.
    ///
    /// Inputs:
    /// - `debounce_ms`: Debounce window shared by both fields.
    ///
    /// Output:
    /// - A `Channels` struct with every endpoint initialized.
    #[must_use]
    pub fn new(debounce_ms: u64) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (loc_query_tx, loc_query_rx) = mpsc::unbounded_channel::<FilterRequest>();
        let (search_query_tx, search_query_rx) = mpsc::unbounded_channel::<FilterRequest>();
        let (filter_res_tx, filter_res_rx) = mpsc::unbounded_channel::<FilterResponse>();
        let (suggestions_tx, suggestions_rx) = mpsc::unbounded_channel::<SuggestionSource>();
        let (nav_tx, nav_rx) = mpsc::unbounded_channel::<NavRequest>();

        spawn_filter_worker(
            FieldKind::Location,
            debounce_ms,
            loc_query_rx,
            filter_res_tx.clone(),
        );
        spawn_filter_worker(
            FieldKind::Search,
            debounce_ms,
            search_query_rx,
            filter_res_tx,
        );

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            loc_query_tx,
            search_query_tx,
            filter_res_rx,
            suggestions_tx,
            suggestions_rx,
            nav_tx,
            nav_rx,
        }
    }
}

/// What: Spawn the debounced filter worker for one field.
///
/// Inputs:
/// - `kind`: Which field this worker serves; picks the filter pipeline.
/// - `debounce_ms`: Debounce window.
/// - `query_rx`: Channel of raw queries from the event layer.
/// - `res_tx`: Channel of filtered responses back to the main loop.
///
/// Details:
/// - Queries landing within the window replace the pending one, so only
///   the latest text is ever filtered.
/// - The worker ends when its query channel is dropped.
pub fn spawn_filter_worker(
    kind: FieldKind,
    debounce_ms: u64,
    mut query_rx: mpsc::UnboundedReceiver<FilterRequest>,
    res_tx: mpsc::UnboundedSender<FilterResponse>,
) {
    tokio::spawn(async move {
        loop {
            let Some(mut latest) = query_rx.recv().await else {
                break;
            };
            loop {
                select! {
                    Some(new_q) = query_rx.recv() => { latest = new_q; }
                    () = sleep(Duration::from_millis(debounce_ms)) => { break; }
                }
            }
            let items = match kind {
                FieldKind::Location => {
                    filter_suggestions(&latest.text, &latest.corpus, SUGGESTION_CAP)
                }
                FieldKind::Search => filter_search_suggestions(&latest.text, &latest.corpus),
            };
            let _ = res_tx.send(FilterResponse {
                field: kind,
                id: latest.id,
                items,
            });
        }
    });
}

/// Fetch both suggestion corpora once and deliver the snapshot.
pub fn spawn_suggestion_fetch(backend_url: String, tx: mpsc::UnboundedSender<SuggestionSource>) {
    tokio::spawn(async move {
        let source = sources::fetch_suggestions(&backend_url).await;
        let _ = tx.send(source);
    });
}

/// What: Spawn the blocking terminal-event reading thread.
///
/// Inputs:
/// - `headless`: When `true` no thread is spawned (tests, CI).
/// - `event_tx`: Channel of raw terminal events to the main loop.
/// - `event_thread_cancelled`: Flag flipped on exit so the thread stops.
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is observed
///   promptly instead of blocking in `read` forever.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if event_thread_cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_thread_cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // ignore transient read errors and continue
                    }
                },
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    /// What: Rapid queries collapse to a single response for the latest text
    ///
    /// - Input: "d" then "de" sent within one debounce window
    /// - Output: Exactly one response, computed from "de"
    async fn background_debounce_collapses_queries() {
        let (qtx, qrx) = mpsc::unbounded_channel();
        let (rtx, mut rrx) = mpsc::unbounded_channel();
        spawn_filter_worker(FieldKind::Search, 30, qrx, rtx);
        let corpus = Arc::new(vec!["Dentist".to_string(), "Dermatologist".to_string()]);
        qtx.send(FilterRequest {
            id: 1,
            text: "d".into(),
            corpus: corpus.clone(),
        })
        .expect("send");
        qtx.send(FilterRequest {
            id: 2,
            text: "de".into(),
            corpus,
        })
        .expect("send");
        let res = rrx.recv().await.expect("one response");
        assert_eq!(res.id, 2);
        assert_eq!(res.field, FieldKind::Search);
        assert_eq!(res.items, vec!["Dentist", "Dermatologist"]);
        sleep(Duration::from_millis(60)).await;
        assert!(rrx.try_recv().is_err(), "no response for the stale query");
    }

    #[tokio::test]
    /// What: The worker exits when its query channel is dropped
    ///
    /// - Input: Drop the sender after one query
    /// - Output: Response channel closes after the final response
    async fn background_worker_ends_on_channel_drop() {
        let (qtx, qrx) = mpsc::unbounded_channel();
        let (rtx, mut rrx) = mpsc::unbounded_channel();
        spawn_filter_worker(FieldKind::Location, 10, qrx, rtx);
        qtx.send(FilterRequest {
            id: 7,
            text: String::new(),
            corpus: Arc::new(vec!["Pune".to_string()]),
        })
        .expect("send");
        drop(qtx);
        let res = rrx.recv().await.expect("final response");
        assert_eq!(res.items, vec!["Pune"]);
        assert!(rrx.recv().await.is_none(), "worker shut down");
    }
}
