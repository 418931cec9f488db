//! The mock example API document and its client-side fetch wrapper.

/// Response document, error fallback and sources.
pub mod example;
