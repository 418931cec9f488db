use crate::foundation::core::{Line, Point};

/// Hub connection thickness for the active question.
pub const ACTIVE_HUB_THICKNESS: f64 = 2.0;
/// Hub connection thickness for every other question.
pub const IDLE_HUB_THICKNESS: f64 = 0.5;
pub const BEAM_THICKNESS: f64 = 1.5;
pub const SILHOUETTE_THICKNESS: f64 = 1.0;
pub const MESH_THICKNESS: f64 = 0.3;

/// What a connection links and how it animates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConnectionKind {
    /// Question node to hub.
    Hub { question_id: String },
    /// Pulse from the active question to another question.
    Beam {
        /// Travel of the pulse along the line, in `[0, 1]`.
        progress: f64,
        origin_id: String,
        target_id: String,
    },
    /// Decorative anchor to hub.
    Silhouette,
    /// Faint cosmetic link between two questions.
    Mesh,
}

/// One line of the network graph.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Connection {
    pub start: Point,
    pub end: Point,
    pub active: bool,
    /// Drawn fraction of the line, in `[0, 1]`.
    pub progress: f64,
    pub thickness: f64,
    pub kind: ConnectionKind,
}

impl Connection {
    pub fn hub(question_id: impl Into<String>, start: Point, hub: Point, active: bool) -> Self {
        Self {
            start,
            end: hub,
            active,
            progress: 0.0,
            thickness: if active {
                ACTIVE_HUB_THICKNESS
            } else {
                IDLE_HUB_THICKNESS
            },
            kind: ConnectionKind::Hub {
                question_id: question_id.into(),
            },
        }
    }

    pub fn beam(
        origin_id: impl Into<String>,
        target_id: impl Into<String>,
        start: Point,
        end: Point,
    ) -> Self {
        Self {
            start,
            end,
            active: true,
            progress: 1.0,
            thickness: BEAM_THICKNESS,
            kind: ConnectionKind::Beam {
                progress: 0.0,
                origin_id: origin_id.into(),
                target_id: target_id.into(),
            },
        }
    }

    pub fn silhouette(anchor: Point, hub: Point) -> Self {
        Self {
            start: anchor,
            end: hub,
            active: true,
            progress: 1.0,
            thickness: SILHOUETTE_THICKNESS,
            kind: ConnectionKind::Silhouette,
        }
    }

    pub fn mesh(a: Point, b: Point) -> Self {
        Self {
            start: a,
            end: b,
            active: false,
            progress: 1.0,
            thickness: MESH_THICKNESS,
            kind: ConnectionKind::Mesh,
        }
    }

    pub fn is_beam(&self) -> bool {
        matches!(self.kind, ConnectionKind::Beam { .. })
    }

    /// Beam travel, `None` for non-beam connections.
    pub fn beam_progress(&self) -> Option<f64> {
        match self.kind {
            ConnectionKind::Beam { progress, .. } => Some(progress),
            _ => None,
        }
    }

    pub fn beam_origin(&self) -> Option<&str> {
        match &self.kind {
            ConnectionKind::Beam { origin_id, .. } => Some(origin_id),
            _ => None,
        }
    }

    pub fn question_id(&self) -> Option<&str> {
        match &self.kind {
            ConnectionKind::Hub { question_id } => Some(question_id),
            _ => None,
        }
    }

    /// Where `progress` is heading. Cosmetic connections are born at their target.
    pub fn target_progress(&self) -> f64 {
        match self.kind {
            ConnectionKind::Hub { .. } => {
                if self.active {
                    1.0
                } else {
                    0.0
                }
            }
            ConnectionKind::Beam { .. } | ConnectionKind::Silhouette | ConnectionKind::Mesh => {
                self.progress
            }
        }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).hypot()
    }

    pub fn line(&self) -> Line {
        Line::new(self.start, self.end)
    }

    /// Sub-segment drawn for the current `progress`.
    pub fn drawn_segment(&self) -> Line {
        Line::new(self.start, self.start.lerp(self.end, self.progress))
    }
}

/// Moving highlight of a beam along its connection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamSegment {
    pub segment: Line,
    /// The pulse is still leaving the origin node.
    pub pulse_origin: bool,
    /// The pulse is arriving at the target node.
    pub pulse_target: bool,
}

/// Fraction of the connection length covered by the moving highlight.
pub const BEAM_LENGTH_FRACTION: f64 = 0.15;

/// Visible highlight for a beam at `beam_progress`, or `None` once it has left the line.
///
/// The head of the highlight travels from `-L` to `d` (with `L = 0.15 d`), so the highlight
/// enters at the origin and fully exits at the target.
pub fn beam_segment(start: Point, end: Point, beam_progress: f64) -> Option<BeamSegment> {
    let distance = (end - start).hypot();
    if distance <= f64::EPSILON {
        return None;
    }
    let beam_len = distance * BEAM_LENGTH_FRACTION;
    let pos = beam_progress * (distance + beam_len) - beam_len;
    if pos <= -beam_len || pos >= distance {
        return None;
    }

    let from = pos.max(0.0) / distance;
    let to = (pos + beam_len).min(distance) / distance;
    Some(BeamSegment {
        segment: Line::new(start.lerp(end, from), start.lerp(end, to)),
        pulse_origin: pos <= 0.0,
        pulse_target: pos >= distance - beam_len,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/network/connection.rs"]
mod tests;
