use std::path::{Path, PathBuf};

use crate::foundation::core::{Fps, Point};
use crate::foundation::error::{WhisperError, WhisperResult};
use crate::layout::discovery::DEFAULT_SETTLE_FRAMES;
use crate::layout::viewport::Viewport;

/// Largest frame side the CPU surface accepts.
pub const MAX_SIDE_PX: f64 = u16::MAX as f64;

/// One scripted interaction, applied just before frame `frame` is ticked.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptedEvent {
    pub frame: u64,
    #[serde(flatten)]
    pub action: ShowAction,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ShowAction {
    /// Click the question with this id.
    Click { question_id: String },
    /// Click at a point of the viewport; routed by hit-test.
    ClickAt { x: f64, y: f64 },
    ClickBackground,
    Resize { width: f64, height: f64 },
}

impl ShowAction {
    pub fn click_at_point(&self) -> Option<Point> {
        match *self {
            Self::ClickAt { x, y } => Some(Point::new(x, y)),
            _ => None,
        }
    }
}

/// A scripted, deterministic run of the home page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShowConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub fps: Fps,
    /// Number of frames to render.
    #[serde(default = "default_frames")]
    pub frames: u64,
    #[serde(default)]
    pub seed: u64,
    /// TrueType/OpenType font for terminal text. Without it only shapes are drawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
    /// JSON question book; the built-in book is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<PathBuf>,
    #[serde(default = "default_settle")]
    pub settle_frames: u32,
    #[serde(default)]
    pub events: Vec<ScriptedEvent>,
}

fn default_frames() -> u64 {
    120
}

fn default_settle() -> u32 {
    DEFAULT_SETTLE_FRAMES
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            fps: Fps::default(),
            frames: default_frames(),
            seed: 0,
            font_path: None,
            questions: None,
            settle_frames: default_settle(),
            events: Vec::new(),
        }
    }
}

fn check_side(name: &str, v: f64) -> WhisperResult<()> {
    if !v.is_finite() || v < 1.0 || v > MAX_SIDE_PX || v.fract() != 0.0 {
        return Err(WhisperError::layout(format!(
            "{name} must be a whole number of pixels in 1..={MAX_SIDE_PX}, got {v}"
        )));
    }
    Ok(())
}

impl ShowConfig {
    pub fn from_json_str(s: &str) -> WhisperResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a config file. Relative asset paths resolve against its directory.
    pub fn from_json_file(path: &Path) -> WhisperResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            WhisperError::validation(format!("read show config '{}': {e}", path.display()))
        })?;
        let mut cfg = Self::from_json_str(&s)?;
        if let Some(base) = path.parent() {
            cfg.resolve_paths(base);
        }
        Ok(cfg)
    }

    pub fn resolve_paths(&mut self, base: &Path) {
        for p in [&mut self.font_path, &mut self.questions].into_iter().flatten() {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
    }

    pub fn validate(&self) -> WhisperResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        check_side("viewport width", self.viewport.width)?;
        check_side("viewport height", self.viewport.height)?;
        if self.frames == 0 {
            return Err(WhisperError::validation("frames must be > 0"));
        }
        for ev in &self.events {
            if let ShowAction::Resize { width, height } = ev.action {
                check_side("resize width", width)?;
                check_side("resize height", height)?;
            }
            if ev.frame >= self.frames {
                tracing::warn!(frame = ev.frame, frames = self.frames, "event after last frame");
            }
        }
        Ok(())
    }

    /// Output frame size in pixels.
    pub fn frame_size(&self) -> (u32, u32) {
        (self.viewport.width as u32, self.viewport.height as u32)
    }

    /// Events sorted by frame, keeping file order within a frame.
    pub fn sorted_events(&self) -> Vec<ScriptedEvent> {
        let mut events = self.events.clone();
        events.sort_by_key(|e| e.frame);
        events
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
