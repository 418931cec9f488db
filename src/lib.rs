//! Whisperwire is the animation core of a terminal-styled landing page: matrix rain behind a ring
//! of question labels, and a network of connection lines and traveling beams that lights up when a
//! question is activated.
//!
//! The page is driven one frame at a time:
//!
//! - Mount a [`HomePage`] for a [`Viewport`] and tick it
//! - Route clicks into its [`ActivationStore`]; the terminal panel and the network visualizer react
//! - Paint frames with [`render::painter::paint_page`], or replay a scripted [`ShowConfig`] through
//!   a [`ShowSession`] into a [`FrameSink`]
#![forbid(unsafe_code)]

mod foundation;

/// Frame loop scheduling.
pub mod animation;
/// Mock example API document.
pub mod api;
/// Question book.
pub mod content;
/// Frame sinks: in-memory, PNG sequence and ffmpeg.
pub mod encode;
pub mod layout;
pub mod network;
/// Page model and click routing.
pub mod page;
pub mod rain;
/// Drawing surfaces and the page painter.
pub mod render;
/// Scripted offline rendering.
pub mod session;
pub mod signal;
pub mod terminal;

pub use crate::foundation::core::{Fps, FrameIndex, Line, Point, Rect, Rgba, Vec2};
pub use crate::foundation::error::{WhisperError, WhisperResult};
pub use crate::foundation::rng::{RandomSource, Rng64, ScriptedRandom};

pub use crate::content::questions::{QuestionBook, QuestionEntry};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::layout::viewport::Viewport;
pub use crate::page::model::{HomePage, LayoutMode, PageOptions, PageRandom};
pub use crate::render::backend::FrameRGBA;
pub use crate::session::config::{ScriptedEvent, ShowAction, ShowConfig};
pub use crate::session::show::{ShowSession, ShowStats};
pub use crate::signal::store::{ActivationEvent, ActivationStore};
pub use crate::terminal::display::TerminalDisplay;
