use std::path::{Path, PathBuf};

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::encode::sink::{FrameOrder, FrameSink, SinkConfig, check_frame_size};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{WhisperError, WhisperResult};
use crate::render::backend::FrameRGBA;

/// Write one frame as a PNG file, un-premultiplying alpha first.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> WhisperResult<()> {
    ensure_parent_dir(path)?;
    let data = frame.to_straight_rgba8();
    image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| WhisperError::encode(format!("write png '{}': {e}", path.display())))
}

/// Writes every frame to `<dir>/<prefix>_<index:05>.png`.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    cfg: Option<SinkConfig>,
    order: FrameOrder,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: "frame".to_owned(),
            cfg: None,
            order: FrameOrder::default(),
            written: Vec::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn path_for(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("{}_{:05}.png", self.prefix, idx.0))
    }

    /// Files written since the last `begin`.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> WhisperResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(WhisperError::validation(
                "png sink width/height must be non-zero",
            ));
        }
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            WhisperError::encode(format!(
                "create output directory '{}': {e}",
                self.dir.display()
            ))
        })?;
        self.cfg = Some(cfg);
        self.order.reset();
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> WhisperResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| WhisperError::encode("png sink not started"))?;
        check_frame_size(cfg, frame)?;
        self.order.accept(idx)?;
        let path = self.path_for(idx);
        write_png(&path, frame)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> WhisperResult<()> {
        if self.cfg.take().is_none() {
            return Err(WhisperError::encode("png sink not started"));
        }
        tracing::info!(
            frames = self.written.len(),
            dir = %self.dir.display(),
            "png sequence written"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
