//! Active-question state shared by the terminal display and the network visualizer.

/// Observable store and activation events.
pub mod store;
