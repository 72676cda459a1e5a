//! Pure application logic: filtering, dropdown transitions, selection
//! commits, and query serialization.
//!
//! Nothing in this module touches the terminal; the `events` and `app`
//! layers are thin effectful shells over these functions.

pub mod dropdown;
pub mod filter;
pub mod query;
pub mod selection;

pub use dropdown::{DropdownPhase, phase, step_down, step_up};
pub use filter::{
    DEFAULT_SUGGESTION_COUNT, SEARCH_POOL_CAP, SUGGESTION_CAP, filter_search_suggestions,
    filter_suggestions,
};
pub use query::{CommitOverrides, build_intent, route_for, send_filter_query, submit_search};
pub use selection::{
    clear_specialty_and_browse, commit_location, commit_popular_search, commit_search_suggestion,
    note_edited,
};
