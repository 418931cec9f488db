use std::rc::Rc;

use crate::animation::scheduler::{FrameClient, FrameScheduler, SchedulerState};
use crate::content::questions::QuestionBook;
use crate::foundation::core::{Fps, FrameIndex, Point, Rect};
use crate::foundation::rng::{RandomSource, Rng64};
use crate::layout::placement::{QuestionPlacement, place_ring, place_stack};
use crate::layout::viewport::Viewport;
use crate::network::visualizer::NetworkVisualizer;
use crate::page::elements::{ELEMENT_HEIGHT, ElementTree, QuestionElement};
use crate::rain::field::RainField;
use crate::signal::store::{ActivationEvent, ActivationStore};
use crate::terminal::display::TerminalDisplay;

/// Top of the stacked question list in the mobile layout.
pub const MOBILE_LIST_TOP: f64 = 150.0;
/// Vertical gap between stacked questions.
pub const MOBILE_LIST_GAP: f64 = 8.0;
/// Terminal width on desktop.
pub const DESKTOP_TERMINAL_WIDTH: f64 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Questions stacked above the terminal; no network.
    Mobile,
    /// Questions on a ring around the terminal with the network overlay.
    Desktop,
}

impl LayoutMode {
    pub fn for_viewport(viewport: Viewport) -> Self {
        if viewport.is_mobile() {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Random sources the page draws from, one per concern.
pub struct PageRandom {
    pub placement: Box<dyn RandomSource>,
    pub rain: Box<dyn RandomSource>,
    pub mesh: Box<dyn RandomSource>,
}

impl PageRandom {
    /// Independent SplitMix64 streams derived from one seed.
    pub fn seeded(seed: u64) -> Self {
        let mut root = Rng64::new(seed);
        Self {
            placement: Box::new(Rng64::new(root.next_u64())),
            rain: Box::new(Rng64::new(root.next_u64())),
            mesh: Box::new(Rng64::new(root.next_u64())),
        }
    }
}

/// Page construction knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageOptions {
    pub fps: Fps,
    /// Frames between a layout change and the discovery pass that reads it.
    pub settle_frames: u32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            settle_frames: crate::layout::discovery::DEFAULT_SETTLE_FRAMES,
        }
    }
}

/// Everything one frame touches. Split from [`HomePage`] so the scheduler can drive it.
struct PageState {
    book: Rc<QuestionBook>,
    store: ActivationStore,
    viewport: Viewport,
    mode: LayoutMode,
    placements: Vec<QuestionPlacement>,
    elements: ElementTree,
    rain: RainField,
    visualizer: Option<NetworkVisualizer>,
    terminal: TerminalDisplay,
    placement_rng: Box<dyn RandomSource>,
    rain_rng: Box<dyn RandomSource>,
}

impl FrameClient for PageState {
    fn on_frame(&mut self, _frame: FrameIndex, dt_secs: f64) {
        self.rain.advance(dt_secs);
        if self.mode == LayoutMode::Desktop
            && let Some(vis) = self.visualizer.as_mut()
        {
            vis.tick(&self.elements);
        }
        self.terminal.tick();
        let active = self.store.current();
        self.elements.select(active.as_deref());
    }
}

impl PageState {
    fn container(&self) -> Rect {
        container_rect(self.viewport)
    }

    /// Recompute placements and remount the elements. `fresh` re-rolls jitter and tilt.
    fn relayout(&mut self, fresh: bool) {
        let ids = self.book.ids();
        match self.mode {
            LayoutMode::Desktop => {
                self.placements = if fresh {
                    let rng: &mut dyn RandomSource = self.placement_rng.as_mut();
                    place_ring(&ids, self.viewport, &[], Some(rng))
                } else {
                    place_ring(&ids, self.viewport, &self.placements, None)
                };
                let center = self.container().center();
                let elements = self
                    .placements
                    .iter()
                    .filter_map(|p| {
                        let entry = self.book.get(&p.id)?;
                        Some(QuestionElement::new(
                            &p.id,
                            &entry.question,
                            p.center_in(center),
                            p.tilt_deg,
                        ))
                    })
                    .collect();
                self.elements = ElementTree::new(elements);
                let container = self.container();
                if let Some(vis) = self.visualizer.as_mut() {
                    vis.observe(&ids, container);
                }
            }
            LayoutMode::Mobile => {
                self.placements.clear();
                let x = self.viewport.width / 2.0;
                let rows = place_stack(&ids, ELEMENT_HEIGHT, MOBILE_LIST_GAP);
                let elements = self
                    .book
                    .entries()
                    .iter()
                    .zip(rows)
                    .map(|(e, row)| {
                        QuestionElement::new(
                            &e.id,
                            &e.question,
                            Point::new(x, MOBILE_LIST_TOP + row.y),
                            0.0,
                        )
                    })
                    .collect();
                self.elements = ElementTree::new(elements);
            }
        }
        let active = self.store.current();
        self.elements.select(active.as_deref());
    }
}

/// Bounds of the visualizer container for `viewport`, vertically centred.
pub fn container_rect(viewport: Viewport) -> Rect {
    let h = viewport.container_height();
    let top = ((viewport.height - h) / 2.0).max(0.0);
    Rect::new(0.0, top, viewport.width, top + h)
}

/// The home page: question book, activation store, layout and every animated part.
pub struct HomePage {
    scheduler: FrameScheduler,
    state: PageState,
}

impl std::fmt::Debug for HomePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomePage")
            .field("viewport", &self.state.viewport)
            .field("mode", &self.state.mode)
            .field("active", &self.state.store.current())
            .field("scheduler", &self.scheduler.state())
            .finish()
    }
}

impl HomePage {
    /// Mount the page and start its frame loop.
    pub fn new(
        book: QuestionBook,
        viewport: Viewport,
        options: PageOptions,
        random: PageRandom,
    ) -> Self {
        let book = Rc::new(book);
        let store = ActivationStore::new();
        let mode = LayoutMode::for_viewport(viewport);
        let terminal = TerminalDisplay::new(store.clone(), Rc::clone(&book));
        let visualizer = NetworkVisualizer::new(store.clone(), random.mesh)
            .with_settle_frames(options.settle_frames);

        let mut state = PageState {
            book,
            store,
            viewport,
            mode,
            placements: Vec::new(),
            elements: ElementTree::default(),
            rain: RainField::new(),
            visualizer: Some(visualizer),
            terminal,
            placement_rng: random.placement,
            rain_rng: random.rain,
        };
        state.rain.resize(viewport, state.rain_rng.as_mut());
        state.relayout(true);

        let mut scheduler = FrameScheduler::new(options.fps);
        scheduler.start();
        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            mode = ?mode,
            questions = state.book.len(),
            "home page mounted"
        );
        Self { scheduler, state }
    }

    pub fn store(&self) -> &ActivationStore {
        &self.state.store
    }

    pub fn book(&self) -> &QuestionBook {
        &self.state.book
    }

    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    pub fn mode(&self) -> LayoutMode {
        self.state.mode
    }

    pub fn active_id(&self) -> Option<String> {
        self.state.store.current()
    }

    pub fn placements(&self) -> &[QuestionPlacement] {
        &self.state.placements
    }

    pub fn elements(&self) -> &ElementTree {
        &self.state.elements
    }

    pub fn rain(&self) -> &RainField {
        &self.state.rain
    }

    /// The network overlay, only on desktop and only while mounted.
    pub fn visualizer(&self) -> Option<&NetworkVisualizer> {
        match self.state.mode {
            LayoutMode::Desktop => self.state.visualizer.as_ref(),
            LayoutMode::Mobile => None,
        }
    }

    pub fn terminal(&self) -> &TerminalDisplay {
        &self.state.terminal
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn container(&self) -> Rect {
        self.state.container()
    }

    /// Centre of the terminal panel on desktop, top-centre below the list on mobile.
    pub fn terminal_anchor(&self) -> Point {
        match self.state.mode {
            LayoutMode::Desktop => self.container().center(),
            LayoutMode::Mobile => {
                let rows = self.state.book.len() as f64;
                Point::new(
                    self.state.viewport.width / 2.0,
                    MOBILE_LIST_TOP + rows * (ELEMENT_HEIGHT + MOBILE_LIST_GAP) + 24.0,
                )
            }
        }
    }

    pub fn terminal_width(&self) -> f64 {
        match self.state.mode {
            LayoutMode::Desktop => DESKTOP_TERMINAL_WIDTH.min(self.state.viewport.width * 0.85),
            LayoutMode::Mobile => (self.state.viewport.width - 32.0).max(0.0),
        }
    }

    /// Click on a question label: toggles it in the store. Unknown ids are ignored.
    pub fn click_question(&mut self, id: &str) -> Option<String> {
        if !self.state.book.contains(id) {
            tracing::debug!(id, "click on unknown question ignored");
            return self.state.store.current();
        }
        let active = self.state.store.dispatch(ActivationEvent::new(id));
        self.state.elements.select(active.as_deref());
        active
    }

    /// Click anywhere that is not a question. Never changes the active question.
    pub fn click_background(&mut self) -> Option<String> {
        tracing::debug!("background click");
        self.state.store.current()
    }

    /// Click at a viewport point, routed to the question under it or to the background.
    pub fn click_at(&mut self, p: Point) -> Option<String> {
        match self.state.elements.hit(p).map(|e| e.id.clone()) {
            Some(id) => self.click_question(&id),
            None => self.click_background(),
        }
    }

    /// Apply a new viewport size: regenerate the rain and re-place the questions.
    ///
    /// Within a layout mode the jitter is dropped and the tilt kept; switching mode places the
    /// questions from scratch.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resize(&mut self, viewport: Viewport) {
        let s = &mut self.state;
        let mode = LayoutMode::for_viewport(viewport);
        let fresh = mode != s.mode;
        s.viewport = viewport;
        s.mode = mode;
        s.rain.resize(viewport, s.rain_rng.as_mut());
        if fresh && let Some(vis) = s.visualizer.as_mut() {
            vis.invalidate();
        }
        s.relayout(fresh);
    }

    /// Run one frame if the loop is running. Returns the frame index that ran.
    pub fn tick(&mut self) -> Option<FrameIndex> {
        self.scheduler.tick(&mut self.state)
    }

    /// Unmount: stop the frame loop and drop the network overlay.
    pub fn teardown(&mut self) {
        self.scheduler.stop();
        self.state.visualizer = None;
        tracing::info!(frames = self.scheduler.frames_run(), "home page torn down");
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.state() == SchedulerState::Running
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/model.rs"]
mod tests;
