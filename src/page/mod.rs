//! The home page model.

/// Question elements and the registry view over them.
pub mod elements;
/// Page state, layout modes and click handling.
pub mod model;
