//! Frame sinks.
//!
//! Sinks consume rendered frames in timeline order and are driven by
//! `RenderSession::render_range`.

/// `ffmpeg`-based sink (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Numbered PNG files in a directory.
pub mod png;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
