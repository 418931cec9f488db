//! Scripted offline runs of the home page.

/// JSON show configuration and its event script.
pub mod config;
/// Session that replays a show into frames and sinks.
pub mod show;
