//! Application runtime: terminal lifecycle, background workers, and the
//! main event loop.

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::config::Settings;
use crate::logic::send_filter_query;
use crate::state::{AppState, FieldKind};
use crate::ui::ui;

mod background;
mod handlers;
mod terminal;

use background::{Channels, spawn_event_thread, spawn_suggestion_fetch};
use handlers::{handle_filter_response, handle_nav, handle_suggestions_loaded};
use terminal::{restore_terminal, setup_terminal};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the CareSeek TUI end-to-end: initialize the terminal and
/// state, spawn background workers, drive the event loop, and restore
/// the terminal on exit.
///
/// Inputs:
/// - `settings`: Resolved configuration (backend URL, debounce window).
/// - `headless_flag`: When `true`, skip terminal setup and drawing
///   (overrides the env toggle for the session).
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal
///   or runtime errors.
///
/// Details:
/// - Background tasks: one debounced filter worker per field, a one-shot
///   corpus fetch, and the blocking terminal-event thread.
/// - Event loop: renders a frame, then waits on terminal events, corpus
///   arrival, filter responses, and navigation hand-offs.
pub async fn run(settings: &Settings, headless_flag: bool) -> Result<()> {
    let headless =
        headless_flag || std::env::var("CARESEEK_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState {
        loading_suggestions: true,
        ..AppState::default()
    };

    let mut channels = Channels::new(settings.debounce_ms);
    spawn_suggestion_fetch(settings.backend_url.clone(), channels.suggestions_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    // Prime both dropdown lists so focusing a field before the corpora
    // arrive still shows the (empty) default suggestions.
    for kind in [FieldKind::Location, FieldKind::Search] {
        let corpus = app.corpus(kind);
        let tx = match kind {
            FieldKind::Location => &channels.loc_query_tx,
            FieldKind::Search => &channels.search_query_tx,
        };
        send_filter_query(app.field_mut(kind), corpus, tx);
    }

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(
                    &ev,
                    &mut app,
                    &channels.loc_query_tx,
                    &channels.search_query_tx,
                    &channels.nav_tx,
                ) {
                    break;
                }
            }
            Some(source) = channels.suggestions_rx.recv() => {
                handle_suggestions_loaded(
                    &mut app,
                    source,
                    &channels.loc_query_tx,
                    &channels.search_query_tx,
                );
            }
            Some(res) = channels.filter_res_rx.recv() => {
                handle_filter_response(&mut app, res);
            }
            Some(nav) = channels.nav_rx.recv() => {
                handle_nav(&mut app, nav);
            }
            else => { break; }
        }
    }

    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
