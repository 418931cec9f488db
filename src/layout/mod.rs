//! Viewport math, question placement and element position discovery.

/// Element registry and discovery passes.
pub mod discovery;
/// Ring and stack placement of question elements.
pub mod placement;
/// Viewport size and breakpoints.
pub mod viewport;
