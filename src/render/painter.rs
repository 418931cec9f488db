use crate::foundation::core::{Line, Point, Rect, Rgba, Vec2};
use crate::foundation::error::WhisperResult;
use crate::foundation::rng::RandomSource;
use crate::network::connection::{Connection, beam_segment};
use crate::page::elements::{PADDING_X, QuestionElement};
use crate::page::model::{HomePage, LayoutMode};
use crate::rain::field::{GLYPH_PX, MatrixColumn};
use crate::rain::glyphs::{BINARY_CHARSET, glyph_strokes, pick};
use crate::render::backend::{Surface, TextRun, estimate_text_height};
use crate::render::theme;
use crate::terminal::display::{TerminalDisplay, WINDOW_TITLE};

pub const TITLE: &str = "AI WHISPERERS";
pub const TAGLINE: &str = "Helping humans talk to machines — and each other";

const QUESTION_FONT_PX: f32 = 14.0;
const TERMINAL_FONT_PX: f32 = 14.0;
const TERMINAL_PADDING: f64 = 16.0;
const TITLE_BAR_PX: f64 = 24.0;
const PROMPT_LINE_PX: f64 = 28.0;
const AMBIENT_GLYPHS: usize = 10;
const SILHOUETTE_GLYPHS: usize = 10;

/// Paint one frame of `page`.
///
/// `rng` feeds the per-frame scatter (ambient glyphs, silhouette glyphs, pulse radii), so two
/// frames painted from the same page state still flicker like the live page does.
#[tracing::instrument(level = "trace", skip_all)]
pub fn paint_page(
    page: &HomePage,
    surface: &mut dyn Surface,
    rng: &mut dyn RandomSource,
) -> WhisperResult<()> {
    surface.clear(theme::BACKGROUND);
    let viewport = page.viewport();

    for col in page.rain().columns() {
        paint_column(surface, col, viewport.height);
    }

    if let Some(vis) = page.visualizer() {
        let container = page.container();
        let origin = container.origin().to_vec2();
        paint_connections(surface, vis.connections(), origin, rng);
        if let Some(layout) = vis.layout() {
            for &anchor in &layout.silhouettes {
                paint_silhouette(surface, anchor + origin, rng);
            }
        }
        paint_ambient_rain(surface, container, rng);
    }

    paint_header(surface, page)?;
    for el in page.elements().elements() {
        paint_question(surface, el)?;
    }
    paint_terminal(surface, page)?;
    Ok(())
}

/// Background column: its glyphs stacked from the scrolled top edge.
pub fn paint_column(surface: &mut dyn Surface, col: &MatrixColumn, height: f64) {
    let color = theme::TERMINAL_GREEN.with_alpha(col.opacity as f32);
    let top = col.top(height);
    for (i, &ch) in col.glyphs.iter().enumerate() {
        let y = top + i as f64 * GLYPH_PX;
        if y + GLYPH_PX < 0.0 || y > height {
            continue;
        }
        paint_glyph(surface, ch, Point::new(col.x, y + 2.0), 12.0, color);
    }
}

/// Stroke a glyph into a box of height `size` (width 0.6 size) with top-left `at`.
pub fn paint_glyph(surface: &mut dyn Surface, ch: char, at: Point, size: f64, color: Rgba) {
    let w = size * 0.6;
    let width = (size / 10.0).max(0.8);
    let map = |p: Point| Point::new(at.x + p.x * w, at.y + p.y * size);
    for l in glyph_strokes(ch) {
        surface.stroke_line(Line::new(map(l.p0), map(l.p1)), width, color);
    }
}

fn glow_line(surface: &mut dyn Surface, line: Line, width: f64, color: Rgba, glow: Rgba, blur: f64) {
    surface.stroke_line(line, width + blur * 0.5, glow.with_alpha(glow.a * 0.35));
    surface.stroke_line(line, width, color);
}

/// Every connection, in graph order, offset by `origin` into viewport space.
///
/// Connections at zero progress are skipped entirely, node dot included.
pub fn paint_connections(
    surface: &mut dyn Surface,
    connections: &[Connection],
    origin: Vec2,
    rng: &mut dyn RandomSource,
) {
    for c in connections {
        if c.progress <= 0.0 {
            continue;
        }
        let start = c.start + origin;
        let end = c.end + origin;
        match c.beam_progress() {
            Some(beam) => {
                if let Some(seg) = beam_segment(start, end, beam) {
                    glow_line(
                        surface,
                        seg.segment,
                        c.thickness * 1.5,
                        theme::BEAM,
                        theme::BEAM_GLOW,
                        15.0,
                    );
                    if seg.pulse_origin {
                        surface.fill_circle(start, 3.0 + rng.next_f64() * 2.0, theme::PULSE);
                    }
                    if seg.pulse_target {
                        surface.fill_circle(end, 3.0 + rng.next_f64() * 2.0, theme::PULSE);
                    }
                }
                surface.stroke_line(
                    Line::new(start, end),
                    c.thickness * 0.5,
                    theme::BEAM_BASELINE,
                );
            }
            None => {
                let line = Line::new(start, start.lerp(end, c.progress));
                let color = theme::CONNECTION.with_alpha((c.progress * 0.6) as f32);
                glow_line(
                    surface,
                    line,
                    c.thickness,
                    color,
                    theme::CONNECTION_GLOW,
                    10.0,
                );
            }
        }
        let dot = if c.active {
            theme::NODE_ACTIVE
        } else {
            theme::NODE_IDLE
        };
        surface.fill_circle(start, 1.0, dot);
    }
}

/// Abstract figure around `anchor`: head, body, arms and a few binary glyphs.
pub fn paint_silhouette(surface: &mut dyn Surface, anchor: Point, rng: &mut dyn RandomSource) {
    let stroke = theme::SILHOUETTE;
    surface.stroke_circle(anchor - Vec2::new(0.0, 30.0), 15.0, 1.0, stroke);
    surface.stroke_line(
        Line::new(anchor - Vec2::new(0.0, 15.0), anchor + Vec2::new(0.0, 20.0)),
        1.0,
        stroke,
    );
    surface.stroke_line(
        Line::new(anchor - Vec2::new(20.0, 0.0), anchor + Vec2::new(20.0, 0.0)),
        1.0,
        stroke,
    );
    for _ in 0..SILHOUETTE_GLYPHS {
        let x = anchor.x - 10.0 + rng.next_f64() * 20.0;
        let y = anchor.y - 30.0 + rng.next_f64() * 60.0;
        let ch = pick(BINARY_CHARSET, rng);
        paint_glyph(surface, ch, Point::new(x, y - 6.4), 8.0, theme::SILHOUETTE_GLYPH);
    }
}

/// Ten faint binary glyphs at random spots inside `area`.
pub fn paint_ambient_rain(surface: &mut dyn Surface, area: Rect, rng: &mut dyn RandomSource) {
    for _ in 0..AMBIENT_GLYPHS {
        let x = area.x0 + rng.next_f64() * area.width();
        let y = area.y0 + rng.next_f64() * area.height();
        let ch = pick(BINARY_CHARSET, rng);
        paint_glyph(surface, ch, Point::new(x, y - 8.0), 10.0, theme::AMBIENT_GLYPH);
    }
}

fn paint_header(surface: &mut dyn Surface, page: &HomePage) -> WhisperResult<()> {
    if !surface.has_text() {
        return Ok(());
    }
    let w = page.viewport().width;
    let (title_px, tag_px) = match page.mode() {
        LayoutMode::Desktop => (40.0, 18.0),
        LayoutMode::Mobile => (28.0, 16.0),
    };
    let title_w = TITLE.chars().count() as f64 * f64::from(title_px) * 0.6;
    let tag_w = TAGLINE.chars().count() as f64 * f64::from(tag_px) * 0.6;
    surface.text(&TextRun {
        text: TITLE,
        origin: Point::new((w - title_w) / 2.0, 24.0),
        size_px: title_px,
        color: theme::TERMINAL_WHITE,
        max_width: None,
    })?;
    surface.text(&TextRun {
        text: TAGLINE,
        origin: Point::new(((w - tag_w) / 2.0).max(8.0), 24.0 + f64::from(title_px) * 1.5),
        size_px: tag_px,
        color: theme::TERMINAL_GRAY,
        max_width: Some((w - 16.0).max(1.0)),
    })?;
    Ok(())
}

/// Corners of `rect` rotated by `deg` around its centre.
fn rotated_corners(rect: Rect, deg: f64) -> [Point; 4] {
    let c = rect.center();
    let (sin, cos) = deg.to_radians().sin_cos();
    let rot = |p: Point| {
        let v = p - c;
        c + Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
    };
    [
        rot(Point::new(rect.x0, rect.y0)),
        rot(Point::new(rect.x1, rect.y0)),
        rot(Point::new(rect.x1, rect.y1)),
        rot(Point::new(rect.x0, rect.y1)),
    ]
}

/// A question label box, tilted, highlighted when selected.
pub fn paint_question(surface: &mut dyn Surface, el: &QuestionElement) -> WhisperResult<()> {
    let bounds = el.bounds();
    let corners = rotated_corners(bounds, el.tilt_deg);
    let fill = if el.selected {
        theme::QUESTION_FILL_SELECTED
    } else {
        theme::QUESTION_FILL
    };
    surface.fill_polygon(&corners, fill);
    surface.stroke_polygon(&corners, 1.0, theme::QUESTION_BORDER);
    if surface.has_text() {
        let color = if el.selected {
            theme::TERMINAL_WHITE
        } else {
            theme::TERMINAL_GREEN
        };
        surface.text(&TextRun {
            text: &el.label,
            origin: Point::new(
                bounds.x0 + PADDING_X,
                bounds.center().y - f64::from(QUESTION_FONT_PX) * 0.7,
            ),
            size_px: QUESTION_FONT_PX,
            color,
            max_width: None,
        })?;
    }
    Ok(())
}

/// Height the terminal panel needs at `width`.
pub fn terminal_height(term: &TerminalDisplay, width: f64) -> f64 {
    let inner = (width - 2.0 * TERMINAL_PADDING).max(1.0);
    let mut h = TERMINAL_PADDING * 2.0 + TITLE_BAR_PX + PROMPT_LINE_PX;
    if let Some(block) = term.answer() {
        let body = TextRun {
            text: &block.entry.answer,
            origin: Point::ZERO,
            size_px: TERMINAL_FONT_PX,
            color: theme::TERMINAL_GREEN,
            max_width: Some(inner - 2.0 * TERMINAL_PADDING),
        };
        h += TERMINAL_PADDING * 3.0 + 24.0 + estimate_text_height(&body);
    }
    h
}

/// Bounds of the terminal panel for the page's current layout.
pub fn terminal_rect(page: &HomePage) -> Rect {
    let width = page.terminal_width();
    let height = terminal_height(page.terminal(), width);
    let anchor = page.terminal_anchor();
    match page.mode() {
        LayoutMode::Desktop => Rect::from_center_size(anchor, (width, height)),
        LayoutMode::Mobile => Rect::new(
            anchor.x - width / 2.0,
            anchor.y,
            anchor.x + width / 2.0,
            anchor.y + height,
        ),
    }
}

/// The terminal panel: chrome, prompt and, when a question is active, the answer block.
pub fn paint_terminal(surface: &mut dyn Surface, page: &HomePage) -> WhisperResult<()> {
    let term = page.terminal();
    let panel = terminal_rect(page);
    surface.fill_rect(panel, theme::PANEL_FILL);
    surface.stroke_rect(panel, 1.0, theme::PANEL_BORDER);

    let x = panel.x0 + TERMINAL_PADDING;
    let mut y = panel.y0 + TERMINAL_PADDING;
    for (i, alpha) in [1.0_f32, 0.6, 0.3].into_iter().enumerate() {
        surface.fill_circle(
            Point::new(x + 5.0 + i as f64 * 16.0, y + 8.0),
            5.0,
            theme::TERMINAL_DIM_GREEN.with_alpha(alpha),
        );
    }
    if surface.has_text() {
        let title_w = WINDOW_TITLE.chars().count() as f64 * 12.0 * 0.6;
        surface.text(&TextRun {
            text: WINDOW_TITLE,
            origin: Point::new(panel.center().x - title_w / 2.0, y),
            size_px: 12.0,
            color: theme::TERMINAL_GRAY,
            max_width: None,
        })?;
    }
    y += TITLE_BAR_PX;

    let prompt_w = term.prompt().chars().count() as f64 * f64::from(TERMINAL_FONT_PX) * 0.6;
    if surface.has_text() {
        surface.text(&TextRun {
            text: term.prompt(),
            origin: Point::new(x, y),
            size_px: TERMINAL_FONT_PX,
            color: theme::TERMINAL_GREEN,
            max_width: None,
        })?;
    }
    surface.fill_rect(
        Rect::new(x + prompt_w + 2.0, y + 2.0, x + prompt_w + 10.0, y + 18.0),
        theme::TERMINAL_GREEN,
    );
    y += PROMPT_LINE_PX;

    if let Some(block) = term.answer() {
        let reveal = term.reveal() as f32;
        let inner = Rect::new(
            x,
            y + TERMINAL_PADDING,
            panel.x1 - TERMINAL_PADDING,
            panel.y1 - TERMINAL_PADDING,
        );
        surface.fill_rect(inner, theme::ANSWER_FILL.with_alpha(theme::ANSWER_FILL.a * reveal));
        surface.stroke_line(
            Line::new(Point::new(inner.x0, inner.y0), Point::new(inner.x0, inner.y1)),
            2.0,
            theme::TERMINAL_GREEN.with_alpha(reveal),
        );
        if surface.has_text() {
            let tx = inner.x0 + TERMINAL_PADDING;
            let ty = inner.y0 + TERMINAL_PADDING;
            surface.text(&TextRun {
                text: &block.command,
                origin: Point::new(tx, ty),
                size_px: TERMINAL_FONT_PX - 1.0,
                color: theme::TERMINAL_GREEN.with_alpha(0.8 * reveal),
                max_width: None,
            })?;
            surface.text(&TextRun {
                text: &block.entry.answer,
                origin: Point::new(tx, ty + 24.0),
                size_px: TERMINAL_FONT_PX,
                color: theme::TERMINAL_GREEN.with_alpha(0.9 * reveal),
                max_width: Some((inner.width() - 2.0 * TERMINAL_PADDING).max(1.0)),
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/painter.rs"]
mod tests;
