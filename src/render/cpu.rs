use crate::foundation::core::{Line, Point, Rect, Rgba};
use crate::foundation::error::{WhisperError, WhisperResult};
use crate::render::backend::{FrameRGBA, Surface, TextRun};
use crate::render::text::{TextBrush, TextLayoutEngine};

struct TerminalFont {
    engine: TextLayoutEngine,
    data: vello_cpu::peniko::FontData,
}

/// [`Surface`] rasterized on the CPU with `vello_cpu`.
///
/// Draw calls accumulate in the render context; [`CpuSurface::finish`] flushes them into a
/// premultiplied RGBA8 frame and resets the context for the next frame.
pub struct CpuSurface {
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    width: u16,
    height: u16,
    font: Option<TerminalFont>,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("font", &self.font.as_ref().map(|t| t.engine.family()))
            .finish()
    }
}

impl CpuSurface {
    pub fn new(width: u32, height: u32) -> WhisperResult<Self> {
        if width == 0 || height == 0 {
            return Err(WhisperError::render("surface width/height must be > 0"));
        }
        let w = u16::try_from(width)
            .map_err(|_| WhisperError::render(format!("surface width {width} exceeds u16")))?;
        let h = u16::try_from(height)
            .map_err(|_| WhisperError::render(format!("surface height {height} exceeds u16")))?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
            width: w,
            height: h,
            font: None,
        })
    }

    /// Enable text drawing with the given font file contents.
    pub fn with_font(mut self, font_bytes: Vec<u8>) -> WhisperResult<Self> {
        let engine = TextLayoutEngine::new(&font_bytes)?;
        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        tracing::debug!(family = engine.family(), "terminal font loaded");
        self.font = Some(TerminalFont { engine, data });
        Ok(self)
    }

    /// Rasterize everything drawn since the last call.
    pub fn finish(&mut self) -> WhisperResult<FrameRGBA> {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        self.ctx.reset();

        let data = self.pixmap.data_as_u8_slice().to_vec();
        let expected = usize::from(self.width) * usize::from(self.height) * 4;
        if data.len() != expected {
            return Err(WhisperError::render(format!(
                "pixmap holds {} bytes, expected {expected}",
                data.len()
            )));
        }
        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
            premultiplied: true,
        })
    }

    fn set_color(&mut self, c: Rgba) {
        let [r, g, b, a] = c.to_rgba8();
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    }

    fn stroke(&mut self, path: &vello_cpu::kurbo::BezPath, width: f64, color: Rgba) {
        if width <= 0.0 || color.a <= 0.0 {
            return;
        }
        self.set_color(color);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(path);
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn polygon_to_cpu(points: &[Point]) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    let mut it = points.iter();
    if let Some(&first) = it.next() {
        out.move_to(point_to_cpu(first));
        for &p in it {
            out.line_to(point_to_cpu(p));
        }
        out.close_path();
    }
    out
}

fn circle_to_cpu(center: Point, radius: f64) -> vello_cpu::kurbo::BezPath {
    use vello_cpu::kurbo::Shape;
    vello_cpu::kurbo::Circle::new(point_to_cpu(center), radius).to_path(0.1)
}

impl Surface for CpuSurface {
    fn size(&self) -> (u32, u32) {
        (u32::from(self.width), u32::from(self.height))
    }

    fn clear(&mut self, color: Rgba) {
        self.ctx.reset();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.set_color(color);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    fn stroke_line(&mut self, line: Line, width: f64, color: Rgba) {
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(line.p0));
        path.line_to(point_to_cpu(line.p1));
        self.stroke(&path, width, color);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        if radius <= 0.0 || color.a <= 0.0 {
            return;
        }
        self.set_color(color);
        self.ctx.fill_path(&circle_to_cpu(center, radius));
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Rgba) {
        self.stroke(&circle_to_cpu(center, radius), width, color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if color.a <= 0.0 {
            return;
        }
        self.set_color(color);
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    fn stroke_rect(&mut self, rect: Rect, width: f64, color: Rgba) {
        use vello_cpu::kurbo::Shape;
        self.stroke(&rect_to_cpu(rect).to_path(0.1), width, color);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        if points.len() < 3 || color.a <= 0.0 {
            return;
        }
        self.set_color(color);
        self.ctx.fill_path(&polygon_to_cpu(points));
    }

    fn stroke_polygon(&mut self, points: &[Point], width: f64, color: Rgba) {
        if points.len() < 2 {
            return;
        }
        self.stroke(&polygon_to_cpu(points), width, color);
    }

    fn has_text(&self) -> bool {
        self.font.is_some()
    }

    fn text(&mut self, run: &TextRun<'_>) -> WhisperResult<f64> {
        let Some(font) = self.font.as_mut() else {
            return Ok(0.0);
        };
        let layout = font.engine.layout_plain(
            run.text,
            run.size_px,
            TextBrush::from(run.color),
            run.max_width.map(|w| w as f32),
        )?;

        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((run.origin.x, run.origin.y)));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let brush = glyph_run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = glyph_run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font.data)
                    .font_size(glyph_run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(f64::from(layout.height()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
