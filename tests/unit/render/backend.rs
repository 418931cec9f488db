use super::*;

#[test]
fn recording_surface_keeps_call_order() {
    let mut s = RecordingSurface::new(100, 50);
    let green = Rgba::opaque(0, 255, 0);
    s.clear(Rgba::opaque(0, 0, 0));
    s.stroke_line(Line::new((0.0, 0.0), (10.0, 0.0)), 2.0, green);
    s.fill_circle(Point::new(5.0, 5.0), 1.0, green);
    assert_eq!(s.size(), (100, 50));
    assert_eq!(s.commands().len(), 3);
    assert!(matches!(s.commands()[0], DrawCommand::Clear(_)));
    assert_eq!(s.lines_with(green).count(), 1);
    assert_eq!(s.take().len(), 3);
    assert!(s.commands().is_empty());
}

#[test]
fn text_is_recorded_unless_disabled() {
    let run = TextRun {
        text: "$ cat what_is_this?.txt",
        origin: Point::new(1.0, 2.0),
        size_px: 10.0,
        color: Rgba::opaque(0, 255, 0),
        max_width: None,
    };
    let mut s = RecordingSurface::new(10, 10);
    assert!(s.text(&run).unwrap() > 0.0);
    assert!(s.text_content().contains("what_is_this?"));

    let mut s = RecordingSurface::new(10, 10).without_text();
    assert!(!s.has_text());
    assert_eq!(s.text(&run).unwrap(), 0.0);
    assert!(s.commands().is_empty());
}

#[test]
fn text_height_estimate_wraps() {
    let run = TextRun {
        text: "aaaaaaaaaa\nbb",
        origin: Point::ZERO,
        size_px: 10.0,
        color: Rgba::opaque(0, 0, 0),
        max_width: Some(30.0),
    };
    // 5 chars per line: 2 lines + 1 line.
    assert!((estimate_text_height(&run) - 3.0 * 14.0).abs() < 1e-9);
}

#[test]
fn straight_alpha_conversion() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 0, 0, 128, 9, 9, 9, 0],
        premultiplied: true,
    };
    let out = frame.to_straight_rgba8();
    assert_eq!(&out[..4], &[128, 0, 0, 128]);
    assert_eq!(&out[4..], &[0, 0, 0, 0]);
    assert_eq!(frame.pixel(1, 0), Some([9, 9, 9, 0]));
    assert_eq!(frame.pixel(2, 0), None);
}
