use crate::foundation::core::{Point, Vec2};
use crate::foundation::rng::RandomSource;
use crate::layout::viewport::Viewport;

/// Half-extent of the random nudge applied on first placement, in pixels.
const JITTER_PX: f64 = 15.0;
/// Half-extent of the random tilt, in degrees.
const TILT_DEG: f64 = 2.0;

/// Where one question sits relative to the centre of the visualizer container.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct QuestionPlacement {
    pub id: String,
    /// Offset of the element centre from the container centre.
    pub offset: Vec2,
    /// Cosmetic rotation in degrees, rounded to one decimal.
    pub tilt_deg: f64,
}

impl QuestionPlacement {
    pub fn center_in(&self, container_center: Point) -> Point {
        container_center + self.offset
    }
}

/// Angle in radians of slot `i` out of `n`.
///
/// The first half of the slots fans from -45° to -135°, the rest from 45° to 135°.
pub fn ring_angle(i: usize, n: usize) -> f64 {
    let n_f = n as f64;
    let half = n_f / 2.0;
    let deg = if (i as f64) < half {
        -45.0 - (i as f64 / half) * 90.0
    } else {
        let floor_half = n / 2;
        let bottom_index = (i - floor_half) as f64;
        let bottom_count = (n - floor_half) as f64;
        45.0 + (bottom_index / bottom_count) * 90.0
    };
    deg.to_radians()
}

/// Unjittered ring offset of slot `i` out of `n` at `radius`.
pub fn ring_offset(i: usize, n: usize, radius: f64) -> Vec2 {
    let angle = ring_angle(i, n);
    Vec2::new(angle.sin() * radius, angle.cos() * radius)
}

/// Place `ids` on the ring for `viewport`.
///
/// With `rng`, each slot gets a ±15 px nudge and a fresh ±2° tilt. Without it, offsets sit exactly
/// on the ring and tilts are taken from `previous` (matched by id), defaulting to 0. Initial
/// placement passes a source; resize relayout passes `None` and the prior placements.
pub fn place_ring(
    ids: &[String],
    viewport: Viewport,
    previous: &[QuestionPlacement],
    rng: Option<&mut dyn RandomSource>,
) -> Vec<QuestionPlacement> {
    let n = ids.len();
    let radius = viewport.ring_radius();
    let mut rng = rng;

    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            let base = ring_offset(i, n, radius);
            let (offset, tilt_deg) = match rng.as_deref_mut() {
                Some(r) => {
                    let dx = (r.next_f64() - 0.5) * 2.0 * JITTER_PX;
                    let dy = (r.next_f64() - 0.5) * 2.0 * JITTER_PX;
                    let tilt = ((r.next_f64() * 2.0 - 1.0) * TILT_DEG * 10.0).round() / 10.0;
                    (base + Vec2::new(dx, dy), tilt)
                }
                None => {
                    let tilt = previous
                        .iter()
                        .find(|p| &p.id == id)
                        .map(|p| p.tilt_deg)
                        .unwrap_or(0.0);
                    (base, tilt)
                }
            };
            QuestionPlacement {
                id: id.clone(),
                offset,
                tilt_deg,
            }
        })
        .collect()
}

/// Vertical list slots for the mobile layout, relative to the list's top-left corner.
pub fn place_stack(ids: &[String], row_height: f64, gap: f64) -> Vec<Point> {
    ids.iter()
        .enumerate()
        .map(|(i, _)| Point::new(0.0, i as f64 * (row_height + gap) + row_height / 2.0))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
