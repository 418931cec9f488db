//! Encoding sinks.
//!
//! Sinks consume rendered frames in frame order and are driven by `ShowSession::render_range`.

/// `ffmpeg`-based MP4 output.
pub mod ffmpeg;
/// Numbered PNG files.
pub mod png;
/// Sink trait and the in-memory sink.
pub mod sink;
