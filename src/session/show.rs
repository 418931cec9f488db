use std::ops::Range;

use crate::content::questions::QuestionBook;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{WhisperError, WhisperResult};
use crate::foundation::rng::Rng64;
use crate::layout::viewport::Viewport;
use crate::page::model::{HomePage, PageOptions, PageRandom};
use crate::render::backend::FrameRGBA;
use crate::render::cpu::CpuSurface;
use crate::render::painter::paint_page;
use crate::render::text::load_font;
use crate::session::config::{ScriptedEvent, ShowAction, ShowConfig};

const PAINT_STREAM: u64 = 0x5EED_0F_C0FF_EE00;

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShowStats {
    /// Frames pushed into the sink.
    pub frames_rendered: u64,
    /// Frames simulated without painting to reach the start of the range.
    pub frames_skipped: u64,
    /// Scripted events applied while rendering.
    pub events_applied: u64,
}

/// Deterministic offline run of the home page.
///
/// The session owns a live [`HomePage`] and replays the config's event script against it. Frame
/// `n` is always the state after `n + 1` ticks with every event scheduled at or before `n`
/// applied, so a single frame and the same frame inside a range render are identical.
pub struct ShowSession {
    config: ShowConfig,
    book: QuestionBook,
    page: HomePage,
    surface: CpuSurface,
    events: Vec<ScriptedEvent>,
    next_event: usize,
    next_frame: FrameIndex,
    events_applied: u64,
}

impl std::fmt::Debug for ShowSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShowSession")
            .field("frames", &self.config.frames)
            .field("next_frame", &self.next_frame)
            .field("page", &self.page)
            .field("surface", &self.surface)
            .finish()
    }
}

fn mount(book: &QuestionBook, config: &ShowConfig) -> HomePage {
    HomePage::new(
        book.clone(),
        config.viewport,
        PageOptions {
            fps: config.fps,
            settle_frames: config.settle_frames,
        },
        PageRandom::seeded(config.seed),
    )
}

impl ShowSession {
    /// Validate `config`, load its assets and mount the page.
    #[tracing::instrument(level = "debug", skip_all, fields(frames = config.frames, seed = config.seed))]
    pub fn new(config: ShowConfig) -> WhisperResult<Self> {
        config.validate()?;
        let book = match &config.questions {
            Some(path) => QuestionBook::from_json_file(path)?,
            None => QuestionBook::default(),
        };
        let (width, height) = config.frame_size();
        let mut surface = CpuSurface::new(width, height)?;
        if let Some(path) = &config.font_path {
            surface = surface.with_font(load_font(path)?)?;
        } else {
            tracing::debug!("no font configured; terminal text is skipped");
        }

        let page = mount(&book, &config);
        let events = config.sorted_events();
        Ok(Self {
            config,
            book,
            page,
            surface,
            events,
            next_event: 0,
            next_frame: FrameIndex(0),
            events_applied: 0,
        })
    }

    pub fn config(&self) -> &ShowConfig {
        &self.config
    }

    pub fn page(&self) -> &HomePage {
        &self.page
    }

    /// Index of the frame the next tick produces.
    pub fn next_frame(&self) -> FrameIndex {
        self.next_frame
    }

    pub fn sink_config(&self) -> SinkConfig {
        let (width, height) = self.config.frame_size();
        SinkConfig {
            width,
            height,
            fps: self.config.fps,
        }
    }

    /// Render frame `frame`, rewinding to the start when it lies behind the session.
    pub fn render_frame(&mut self, frame: FrameIndex) -> WhisperResult<FrameRGBA> {
        if frame.0 >= self.config.frames {
            return Err(WhisperError::validation(format!(
                "frame {} is outside the show ({} frames)",
                frame.0, self.config.frames
            )));
        }
        if frame.0 < self.next_frame.0 {
            self.rewind();
        }
        while self.next_frame.0 < frame.0 {
            self.step();
        }
        self.step();
        self.paint(frame)
    }

    /// Render `range` and stream it into `sink` in strictly increasing frame order.
    #[tracing::instrument(level = "info", skip(self, sink), fields(start = range.start, end = range.end))]
    pub fn render_range(
        &mut self,
        range: Range<u64>,
        sink: &mut dyn FrameSink,
    ) -> WhisperResult<ShowStats> {
        if range.is_empty() {
            return Err(WhisperError::validation(
                "render_range range must be non-empty",
            ));
        }
        if range.end > self.config.frames {
            return Err(WhisperError::validation(format!(
                "render_range end {} exceeds show length {}",
                range.end, self.config.frames
            )));
        }

        if range.start < self.next_frame.0 {
            self.rewind();
        }
        let mut stats = ShowStats::default();
        let applied_before = self.events_applied;
        while self.next_frame.0 < range.start {
            self.step();
            stats.frames_skipped += 1;
        }

        sink.begin(self.sink_config())?;
        for n in range {
            let idx = FrameIndex(n);
            self.step();
            let frame = self.paint(idx)?;
            sink.push_frame(idx, &frame)?;
            stats.frames_rendered += 1;
        }
        sink.end()?;

        stats.events_applied = self.events_applied - applied_before;
        tracing::info!(
            rendered = stats.frames_rendered,
            skipped = stats.frames_skipped,
            events = stats.events_applied,
            secs = self.config.fps.frames_to_secs(stats.frames_rendered),
            "show rendered"
        );
        Ok(stats)
    }

    /// Render the whole show.
    pub fn render_all(&mut self, sink: &mut dyn FrameSink) -> WhisperResult<ShowStats> {
        self.render_range(0..self.config.frames, sink)
    }

    /// Remount the page and replay from frame 0.
    fn rewind(&mut self) {
        tracing::debug!(from = self.next_frame.0, "rewinding show");
        self.page.teardown();
        self.page = mount(&self.book, &self.config);
        self.next_event = 0;
        self.next_frame = FrameIndex(0);
        self.events_applied = 0;
    }

    /// Apply the events due at the next frame, then tick the page once.
    fn step(&mut self) {
        let idx = self.next_frame;
        while let Some(ev) = self
            .events
            .get(self.next_event)
            .filter(|ev| ev.frame <= idx.0)
            .cloned()
        {
            self.next_event += 1;
            self.apply(&ev);
        }
        self.page.tick();
        self.next_frame = idx.next();
    }

    fn apply(&mut self, ev: &ScriptedEvent) {
        tracing::debug!(frame = ev.frame, action = ?ev.action, "scripted event");
        self.events_applied += 1;
        match &ev.action {
            ShowAction::Click { question_id } => {
                self.page.click_question(question_id);
            }
            ShowAction::ClickAt { .. } => {
                if let Some(p) = ev.action.click_at_point() {
                    self.page.click_at(p);
                }
            }
            ShowAction::ClickBackground => {
                self.page.click_background();
            }
            ShowAction::Resize { width, height } => {
                self.page.resize(Viewport::new(*width, *height));
            }
        }
    }

    fn paint(&mut self, idx: FrameIndex) -> WhisperResult<FrameRGBA> {
        let mut rng = paint_rng(self.config.seed, idx);
        paint_page(&self.page, &mut self.surface, &mut rng)?;
        self.surface.finish()
    }
}

/// Per-frame scatter stream, independent of how the frame was reached.
fn paint_rng(seed: u64, idx: FrameIndex) -> Rng64 {
    Rng64::new(seed ^ PAINT_STREAM ^ idx.0.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

#[cfg(test)]
#[path = "../../tests/unit/session/show.rs"]
mod tests;
