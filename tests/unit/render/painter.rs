use super::*;
use crate::content::questions::QuestionBook;
use crate::foundation::rng::{Rng64, ScriptedRandom};
use crate::layout::viewport::Viewport;
use crate::page::model::{PageOptions, PageRandom};
use crate::render::backend::{DrawCommand, RecordingSurface};

fn page(width: f64) -> HomePage {
    HomePage::new(
        QuestionBook::default(),
        Viewport::new(width, 900.0),
        PageOptions {
            settle_frames: 0,
            ..PageOptions::default()
        },
        PageRandom::seeded(21),
    )
}

#[test]
fn hub_line_is_drawn_to_its_progress() {
    let mut c = Connection::hub("a", Point::new(0.0, 0.0), Point::new(100.0, 0.0), true);
    c.progress = 0.5;
    let mut s = RecordingSurface::new(200, 200);
    paint_connections(&mut s, &[c], Vec2::new(10.0, 20.0), &mut Rng64::new(1));

    let color = theme::CONNECTION.with_alpha((0.5 * 0.6) as f32);
    let lines: Vec<_> = s.lines_with(color).collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].p0, Point::new(10.0, 20.0));
    assert_eq!(lines[0].p1, Point::new(60.0, 20.0));
    assert!(s.commands().iter().any(|cmd| matches!(
        cmd,
        DrawCommand::Circle { radius, color, .. } if *radius == 1.0 && *color == theme::NODE_ACTIVE
    )));
}

#[test]
fn undrawn_line_paints_nothing() {
    let idle = Connection::hub("a", Point::new(0.0, 0.0), Point::new(100.0, 0.0), false);
    let mut faded = Connection::mesh(Point::new(5.0, 5.0), Point::new(50.0, 50.0));
    faded.progress = 0.0;
    let mut s = RecordingSurface::new(200, 200);
    paint_connections(&mut s, &[idle, faded], Vec2::ZERO, &mut Rng64::new(1));
    assert!(s.commands().is_empty(), "{:?}", s.commands());
}

#[test]
fn fading_idle_line_keeps_its_node_dot() {
    let mut c = Connection::hub("a", Point::new(0.0, 0.0), Point::new(100.0, 0.0), false);
    c.progress = 0.25;
    let mut s = RecordingSurface::new(200, 200);
    paint_connections(&mut s, &[c], Vec2::ZERO, &mut Rng64::new(1));
    assert!(s.commands().iter().any(|cmd| matches!(
        cmd,
        DrawCommand::Circle { radius, color, .. } if *radius == 1.0 && *color == theme::NODE_IDLE
    )));
}

#[test]
fn beam_draws_baseline_and_moving_segment() {
    let mut c = Connection::beam("a", "b", Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    let mut s = RecordingSurface::new(200, 200);

    paint_connections(&mut s, std::slice::from_ref(&c), Vec2::ZERO, &mut Rng64::new(1));
    assert_eq!(s.lines_with(theme::BEAM).count(), 0);
    assert_eq!(s.lines_with(theme::BEAM_BASELINE).count(), 1);

    if let crate::network::connection::ConnectionKind::Beam { progress, .. } = &mut c.kind {
        *progress = 0.5;
    }
    s.take();
    paint_connections(&mut s, &[c], Vec2::ZERO, &mut Rng64::new(1));
    let seg: Vec<_> = s.lines_with(theme::BEAM).collect();
    assert_eq!(seg.len(), 1);
    assert!((seg[0].p0.x - 42.5).abs() < 1e-9);
    assert!((seg[0].p1.x - 57.5).abs() < 1e-9);
    assert!(
        !s.commands()
            .iter()
            .any(|cmd| matches!(cmd, DrawCommand::Circle { color, .. } if *color == theme::PULSE))
    );
}

#[test]
fn beam_pulses_origin_while_leaving() {
    let mut c = Connection::beam("a", "b", Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    if let crate::network::connection::ConnectionKind::Beam { progress, .. } = &mut c.kind {
        *progress = 0.05;
    }
    let mut s = RecordingSurface::new(200, 200);
    paint_connections(&mut s, &[c], Vec2::ZERO, &mut ScriptedRandom::new(vec![0.5]));
    let pulse = s.commands().iter().find_map(|cmd| match cmd {
        DrawCommand::Circle { center, radius, color, .. } if *color == theme::PULSE => {
            Some((*center, *radius))
        }
        _ => None,
    });
    assert_eq!(pulse, Some((Point::new(0.0, 0.0), 4.0)));
}

#[test]
fn silhouette_has_head_body_arms_and_glyphs() {
    let mut s = RecordingSurface::new(400, 400);
    paint_silhouette(&mut s, Point::new(100.0, 100.0), &mut Rng64::new(5));
    assert!(s.commands().iter().any(|cmd| matches!(
        cmd,
        DrawCommand::Circle { center, radius, stroke_width: Some(_), .. }
            if *center == Point::new(100.0, 70.0) && *radius == 15.0
    )));
    assert_eq!(s.lines_with(theme::SILHOUETTE).count(), 2);
    assert!(s.lines_with(theme::SILHOUETTE_GLYPH).count() >= 10 * 3);
}

#[test]
fn desktop_frame_shows_active_answer() {
    let mut p = page(1280.0);
    p.click_question("what-is-this");
    for _ in 0..3 {
        p.tick();
    }
    let mut s = RecordingSurface::new(1280, 900);
    paint_page(&p, &mut s, &mut Rng64::new(2)).unwrap();

    assert!(matches!(s.commands()[0], DrawCommand::Clear(c) if c == theme::BACKGROUND));
    let text = s.text_content();
    assert!(text.contains("$ cat what_is_this?.txt"));
    assert!(text.contains(&p.book().get("what-is-this").unwrap().answer));
    assert!(!text.contains(&p.book().get("how-to-join").unwrap().answer));
    assert!(text.contains(WINDOW_TITLE));
    assert!(s.lines_with(theme::BEAM_BASELINE).count() >= 7);
}

#[test]
fn frame_without_font_draws_chrome_only() {
    let mut p = page(1280.0);
    p.click_question("how-to-join");
    p.tick();
    let mut s = RecordingSurface::new(1280, 900).without_text();
    paint_page(&p, &mut s, &mut Rng64::new(2)).unwrap();
    assert!(s.text_content().is_empty());
    let panel = terminal_rect(&p);
    assert!(s.commands().iter().any(|cmd| matches!(
        cmd,
        DrawCommand::Rect { rect, stroke_width: None, .. } if *rect == panel
    )));
}

#[test]
fn mobile_frame_has_no_network() {
    let mut p = page(500.0);
    p.tick();
    let mut s = RecordingSurface::new(500, 900);
    paint_page(&p, &mut s, &mut Rng64::new(2)).unwrap();
    assert_eq!(s.lines_with(theme::BEAM_BASELINE).count(), 0);
    assert!(!s.commands().iter().any(|cmd| matches!(
        cmd,
        DrawCommand::Circle { color, .. } if *color == theme::NODE_IDLE
    )));
    assert!(s.text_content().contains(TITLE));
}

#[test]
fn terminal_grows_with_an_answer() {
    let mut p = page(1280.0);
    let closed = terminal_rect(&p).height();
    p.click_question("what-do-you-do");
    assert!(terminal_rect(&p).height() > closed);
}
