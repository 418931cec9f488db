use crate::foundation::math::{approach, clamp01};
use crate::network::connection::{Connection, ConnectionKind};

/// Per-frame `progress` gain of an active line.
pub const DRAW_IN_STEP: f64 = 0.05;
/// Per-frame `progress` loss of an inactive line. Slower than draw-in on purpose.
pub const FADE_OUT_STEP: f64 = 0.03;
/// Per-frame travel of a beam pulse.
pub const BEAM_STEP: f64 = 0.03;

/// Step sizes for [`advance`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRates {
    pub draw_in: f64,
    pub fade_out: f64,
    pub beam: f64,
}

impl Default for StepRates {
    fn default() -> Self {
        Self {
            draw_in: DRAW_IN_STEP,
            fade_out: FADE_OUT_STEP,
            beam: BEAM_STEP,
        }
    }
}

/// Advance every animated scalar by one frame. Returns `true` while anything is still moving.
pub fn advance(connections: &mut [Connection], rates: StepRates) -> bool {
    let mut moving = false;
    for c in connections.iter_mut() {
        match &mut c.kind {
            ConnectionKind::Beam { progress, .. } => {
                if *progress < 1.0 {
                    *progress = clamp01(*progress + rates.beam);
                    moving = true;
                }
            }
            ConnectionKind::Hub { .. } | ConnectionKind::Silhouette | ConnectionKind::Mesh => {
                let before = c.progress;
                c.progress = if c.active && c.progress < 1.0 {
                    approach(c.progress, 1.0, rates.draw_in)
                } else if !c.active && c.progress > 0.0 {
                    approach(c.progress, 0.0, rates.fade_out)
                } else {
                    c.progress
                };
                c.progress = clamp01(c.progress);
                moving |= c.progress != before;
            }
        }
    }
    moving
}

#[cfg(test)]
#[path = "../../tests/unit/network/animate.rs"]
mod tests;
