//! Library entry for CareSeek exposing core logic for integration tests.

pub mod config;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod ui;
pub mod util;
