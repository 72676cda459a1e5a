//! Application state: value types plus the central [`AppState`] container.

pub mod app_state;
pub mod types;

pub use app_state::{AppState, POPULAR_COUNT};
pub use types::{
    FieldKind, FieldState, FilterRequest, FilterResponse, Focus, NavRequest, SearchIntent,
    SuggestionSource,
};
