//! The terminal panel at the hub.

/// Active answer lookup and text rendering.
pub mod display;
