use crate::foundation::core::{Point, Rect};

/// Default mount-settle delay before the first discovery pass (about 500 ms at 60 fps).
pub const DEFAULT_SETTLE_FRAMES: u32 = 30;

/// Fractional positions of the decorative silhouette anchors inside the container.
pub const SILHOUETTE_ANCHORS: [(f64, f64); 2] = [(0.2, 0.65), (0.8, 0.7)];

/// Read-only view of the host's layout tree.
///
/// Implementations answer from whatever snapshot the host currently has; a `None` means the
/// element is not mounted yet.
pub trait ElementRegistry {
    /// Bounds of the question element tagged `id`, in viewport coordinates.
    fn question_bounds(&self, id: &str) -> Option<Rect>;
}

/// One discovered question node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodePosition {
    pub id: String,
    /// Container-relative centre of the element.
    pub point: Point,
}

/// Result of one discovery pass, in container-relative coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeLayout {
    pub width: f64,
    pub height: f64,
    pub hub: Point,
    /// Nodes in question order; unmounted ids are absent.
    pub nodes: Vec<NodePosition>,
    pub silhouettes: Vec<Point>,
}

impl NodeLayout {
    pub fn position_of(&self, id: &str) -> Option<Point> {
        self.nodes.iter().find(|n| n.id == id).map(|n| n.point)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Snapshot-read the positions of `ids` relative to `container`.
///
/// The hub is the container centre and the silhouettes sit at [`SILHOUETTE_ANCHORS`].
pub fn discover(ids: &[String], container: Rect, registry: &dyn ElementRegistry) -> NodeLayout {
    let width = container.width().max(0.0);
    let height = container.height().max(0.0);
    let origin = container.origin();

    let nodes = ids
        .iter()
        .filter_map(|id| {
            let r = registry.question_bounds(id)?;
            let c = r.center();
            Some(NodePosition {
                id: id.clone(),
                point: Point::new(c.x - origin.x, c.y - origin.y),
            })
        })
        .collect::<Vec<_>>();

    NodeLayout {
        width,
        height,
        hub: Point::new(width / 2.0, height / 2.0),
        silhouettes: silhouette_points(width, height),
        nodes,
    }
}

pub fn silhouette_points(width: f64, height: f64) -> Vec<Point> {
    SILHOUETTE_ANCHORS
        .iter()
        .map(|&(fx, fy)| Point::new(width * fx, height * fy))
        .collect()
}

/// Decides when a discovery pass runs.
///
/// A pass is armed on mount, on resize and when the id set changes, and fires after
/// `settle_frames` ticks. Between passes the last layout is reused as is.
#[derive(Clone, Debug)]
pub struct LayoutDiscovery {
    settle_frames: u32,
    countdown: Option<u32>,
    ids: Vec<String>,
    container: Rect,
    passes: u64,
}

impl LayoutDiscovery {
    pub fn new(settle_frames: u32) -> Self {
        Self {
            settle_frames,
            countdown: Some(settle_frames),
            ids: Vec::new(),
            container: Rect::ZERO,
            passes: 0,
        }
    }

    /// Number of discovery passes run so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn is_pending(&self) -> bool {
        self.countdown.is_some()
    }

    /// Re-arm the settle delay.
    pub fn invalidate(&mut self) {
        self.countdown = Some(self.settle_frames);
    }

    /// Record the current inputs, re-arming when the container or the id set changed.
    pub fn observe(&mut self, ids: &[String], container: Rect) {
        if self.ids.as_slice() != ids {
            self.ids = ids.to_vec();
            self.invalidate();
        }
        if self.container != container {
            self.container = container;
            self.invalidate();
        }
    }

    /// Advance one frame. Returns a fresh layout when a pass fires on this frame.
    pub fn poll(&mut self, registry: &dyn ElementRegistry) -> Option<NodeLayout> {
        let remaining = self.countdown?;
        if remaining > 0 {
            self.countdown = Some(remaining - 1);
            return None;
        }
        self.countdown = None;
        self.passes = self.passes.saturating_add(1);
        let layout = discover(&self.ids, self.container, registry);
        tracing::debug!(
            pass = self.passes,
            found = layout.nodes.len(),
            wanted = self.ids.len(),
            "layout discovery pass"
        );
        Some(layout)
    }
}

impl Default for LayoutDiscovery {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_FRAMES)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/discovery.rs"]
mod tests;
