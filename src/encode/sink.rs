use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{WhisperError, WhisperResult};
use crate::render::backend::FrameRGBA;

/// Configuration handed to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
}

/// Consumer of rendered frames.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order between one
/// `begin` and one `end`.
pub trait FrameSink: Send {
    fn begin(&mut self, cfg: SinkConfig) -> WhisperResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> WhisperResult<()>;
    fn end(&mut self) -> WhisperResult<()>;
}

/// Rejects frames whose index does not increase. Shared by the file sinks.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FrameOrder {
    last: Option<FrameIndex>,
}

impl FrameOrder {
    pub(crate) fn reset(&mut self) {
        self.last = None;
    }

    pub(crate) fn accept(&mut self, idx: FrameIndex) -> WhisperResult<()> {
        if let Some(last) = self.last
            && idx.0 <= last.0
        {
            return Err(WhisperError::encode(format!(
                "out-of-order frame index {} after {}",
                idx.0, last.0
            )));
        }
        self.last = Some(idx);
        Ok(())
    }
}

pub(crate) fn check_frame_size(cfg: &SinkConfig, frame: &FrameRGBA) -> WhisperResult<()> {
    if frame.width != cfg.width || frame.height != cfg.height {
        return Err(WhisperError::validation(format!(
            "frame size mismatch: got {}x{}, expected {}x{}",
            frame.width, frame.height, cfg.width, cfg.height
        )));
    }
    let expected = (frame.width as usize) * (frame.height as usize) * 4;
    if frame.data.len() != expected {
        return Err(WhisperError::validation(
            "frame.data size mismatch with width*height*4",
        ));
    }
    Ok(())
}

/// In-memory sink for tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Frames in the order they were pushed.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> WhisperResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> WhisperResult<()> {
        if self.cfg.is_none() {
            return Err(WhisperError::encode("in-memory sink not started"));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> WhisperResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
