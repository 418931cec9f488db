use crate::foundation::rng::RandomSource;
use crate::layout::viewport::Viewport;
use crate::rain::glyphs::{RAIN_CHARSET, pick};

/// Horizontal distance between column slots, in pixels.
pub const COLUMN_SPACING: f64 = 20.0;
/// Line height of one glyph in a column, in pixels.
pub const GLYPH_PX: f64 = 16.0;
/// Column cap, enough to cover the widest surface a frame can have.
pub const MAX_COLUMNS: usize = u16::MAX as usize / COLUMN_SPACING as usize;

/// One falling column of glyphs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MatrixColumn {
    pub x: f64,
    pub glyphs: Vec<char>,
    /// Seconds for one full pass from above the top edge to below the bottom edge.
    pub speed: f64,
    pub opacity: f64,
    /// Position within the current pass, in `[0, 1)`.
    pub phase: f64,
}

impl MatrixColumn {
    pub fn len_px(&self) -> f64 {
        self.glyphs.len() as f64 * GLYPH_PX
    }

    /// Top edge of the column for a viewport of `height`.
    ///
    /// Phase 0 puts the column just above the viewport, phase 1 just below it.
    pub fn top(&self, height: f64) -> f64 {
        -self.len_px() + self.phase * (height + self.len_px())
    }

    fn advance(&mut self, dt_secs: f64) {
        if self.speed <= 0.0 || !dt_secs.is_finite() || dt_secs <= 0.0 {
            return;
        }
        self.phase = (self.phase + dt_secs / self.speed).rem_euclid(1.0);
    }
}

/// Build the columns for `viewport`. Narrow (mobile) viewports get none; very wide ones are
/// capped at [`MAX_COLUMNS`].
pub fn generate_columns(viewport: Viewport, rng: &mut dyn RandomSource) -> Vec<MatrixColumn> {
    if viewport.is_mobile() {
        return Vec::new();
    }
    let count = ((viewport.width / COLUMN_SPACING).floor() as usize).min(MAX_COLUMNS);
    (0..count)
        .map(|i| {
            let glyph_count = 5 + (rng.next_f64() * 15.0).floor() as usize;
            MatrixColumn {
                x: i as f64 * COLUMN_SPACING + rng.next_f64() * 10.0,
                glyphs: (0..glyph_count).map(|_| pick(RAIN_CHARSET, rng)).collect(),
                speed: 25.0 + rng.next_f64() * 50.0,
                opacity: 0.05 + rng.next_f64() * 0.2,
                phase: rng.next_f64(),
            }
        })
        .collect()
}

/// Ambient background rain. Columns are regenerated wholesale on every resize.
#[derive(Clone, Debug, Default)]
pub struct RainField {
    columns: Vec<MatrixColumn>,
    viewport: Option<Viewport>,
    generation: u64,
}

impl RainField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[MatrixColumn] {
        &self.columns
    }

    /// Number of times the column set was (re)built.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn resize(&mut self, viewport: Viewport, rng: &mut dyn RandomSource) {
        self.columns = generate_columns(viewport, rng);
        self.viewport = Some(viewport);
        self.generation = self.generation.saturating_add(1);
        tracing::debug!(
            width = viewport.width,
            columns = self.columns.len(),
            generation = self.generation,
            "rain columns regenerated"
        );
    }

    pub fn advance(&mut self, dt_secs: f64) {
        for c in &mut self.columns {
            c.advance(dt_secs);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rain/field.rs"]
mod tests;
