//! Frame rendering: the drawing surface abstraction, the CPU rasterizer and the page painter.

/// Frame type, the `Surface` trait and the recording surface.
pub mod backend;
/// `vello_cpu` surface.
pub mod cpu;
/// Page painter.
pub mod painter;
/// Terminal text layout with `parley`.
pub mod text;
/// Colours.
pub mod theme;
