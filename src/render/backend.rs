use crate::foundation::core::{Line, Point, Rect, Rgba};
use crate::foundation::error::WhisperResult;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are premultiplied alpha. The `premultiplied` flag keeps that explicit at sink
/// boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 of the pixel at `(x, y)`, `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let p = self.data.get(i..i + 4)?;
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Copy of the bytes with alpha un-premultiplied, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                px[0] = 0;
                px[1] = 0;
                px[2] = 0;
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Text run handed to a surface.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun<'a> {
    pub text: &'a str,
    /// Top-left corner of the text box.
    pub origin: Point,
    pub size_px: f32,
    pub color: Rgba,
    /// Wrap width; `None` lays out a single unbroken line per paragraph.
    pub max_width: Option<f64>,
}

/// Drawing target the painter talks to.
///
/// Coordinates are viewport pixels. Surfaces never fail on geometry; only text may fail, when the
/// configured font cannot be shaped.
pub trait Surface {
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Rgba);

    fn stroke_line(&mut self, line: Line, width: f64, color: Rgba);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Rgba);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    fn stroke_rect(&mut self, rect: Rect, width: f64, color: Rgba);

    /// Closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[Point], color: Rgba);

    fn stroke_polygon(&mut self, points: &[Point], width: f64, color: Rgba);

    /// Whether [`Surface::text`] actually draws glyphs.
    fn has_text(&self) -> bool;

    /// Draw a text run. Returns the laid-out height, or 0 when the surface has no font.
    fn text(&mut self, run: &TextRun<'_>) -> WhisperResult<f64>;
}

/// One recorded call on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    Line {
        line: Line,
        width: f64,
        color: Rgba,
    },
    Circle {
        center: Point,
        radius: f64,
        /// `None` for a fill.
        stroke_width: Option<f64>,
        color: Rgba,
    },
    Rect {
        rect: Rect,
        stroke_width: Option<f64>,
        color: Rgba,
    },
    Polygon {
        points: Vec<Point>,
        stroke_width: Option<f64>,
        color: Rgba,
    },
    Text {
        text: String,
        origin: Point,
        size_px: f32,
        color: Rgba,
    },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    /// Record text runs as if a font were configured.
    text_enabled: bool,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            text_enabled: true,
            commands: Vec::new(),
        }
    }

    pub fn without_text(mut self) -> Self {
        self.text_enabled = false;
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Lines drawn with exactly `color`.
    pub fn lines_with(&self, color: Rgba) -> impl Iterator<Item = &Line> {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Line { line, color: c, .. } if *c == color => Some(line),
            _ => None,
        })
    }

    /// Concatenated text of every recorded text run.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for c in &self.commands {
            if let DrawCommand::Text { text, .. } = c {
                out.push_str(text);
                out.push('\n');
            }
        }
        out
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn stroke_line(&mut self, line: Line, width: f64, color: Rgba) {
        self.commands.push(DrawCommand::Line { line, width, color });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            stroke_width: None,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            stroke_width: Some(width),
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::Rect {
            rect,
            stroke_width: None,
            color,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, width: f64, color: Rgba) {
        self.commands.push(DrawCommand::Rect {
            rect,
            stroke_width: Some(width),
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            stroke_width: None,
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Point], width: f64, color: Rgba) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            stroke_width: Some(width),
            color,
        });
    }

    fn has_text(&self) -> bool {
        self.text_enabled
    }

    fn text(&mut self, run: &TextRun<'_>) -> WhisperResult<f64> {
        if !self.text_enabled {
            return Ok(0.0);
        }
        self.commands.push(DrawCommand::Text {
            text: run.text.to_owned(),
            origin: run.origin,
            size_px: run.size_px,
            color: run.color,
        });
        Ok(estimate_text_height(run))
    }
}

/// Rough height of `run` assuming a monospace advance of 0.6 em and 1.4 em line height.
pub fn estimate_text_height(run: &TextRun<'_>) -> f64 {
    let size = f64::from(run.size_px);
    let per_line = run
        .max_width
        .map(|w| ((w / (size * 0.6)).floor() as usize).max(1))
        .unwrap_or(usize::MAX);
    let lines: usize = run
        .text
        .split('\n')
        .map(|p| p.chars().count().div_ceil(per_line).max(1))
        .sum();
    lines as f64 * size * 1.4
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
