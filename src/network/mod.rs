//! The connection network drawn between the questions and the hub.

/// Per-frame animation steps.
pub mod animate;
/// Graph construction from discovered positions.
pub mod builder;
/// Connection records and beam geometry.
pub mod connection;
/// Discovery, rebuild and animation wired to the activation store.
pub mod visualizer;
