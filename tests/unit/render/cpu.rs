use super::*;
use crate::render::theme;

#[test]
fn rejects_empty_and_oversized_surfaces() {
    assert!(CpuSurface::new(0, 10).is_err());
    assert!(CpuSurface::new(10, 0).is_err());
    assert!(CpuSurface::new(70_000, 10).is_err());
}

#[test]
fn clear_fills_every_pixel() {
    let mut s = CpuSurface::new(16, 8).unwrap();
    s.clear(theme::BACKGROUND);
    let frame = s.finish().unwrap();
    assert_eq!((frame.width, frame.height), (16, 8));
    assert_eq!(frame.data.len(), 16 * 8 * 4);
    assert!(frame.premultiplied);
    for y in [0, 7] {
        for x in [0, 15] {
            assert_eq!(frame.pixel(x, y), Some([0x12, 0x12, 0x12, 255]));
        }
    }
}

#[test]
fn shapes_land_where_drawn() {
    let mut s = CpuSurface::new(32, 32).unwrap();
    s.clear(theme::BACKGROUND);
    s.fill_rect(Rect::new(0.0, 0.0, 16.0, 32.0), theme::TERMINAL_GREEN);
    s.fill_circle(Point::new(24.0, 24.0), 6.0, theme::TERMINAL_WHITE);
    let frame = s.finish().unwrap();
    assert_eq!(frame.pixel(4, 4), Some([0, 255, 0, 255]));
    assert_eq!(frame.pixel(24, 24), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(28, 4), Some([0x12, 0x12, 0x12, 255]));
}

#[test]
fn finish_resets_for_the_next_frame() {
    let mut s = CpuSurface::new(8, 8).unwrap();
    s.clear(theme::TERMINAL_GREEN);
    s.finish().unwrap();
    s.clear(theme::BACKGROUND);
    let frame = s.finish().unwrap();
    assert_eq!(frame.pixel(3, 3), Some([0x12, 0x12, 0x12, 255]));
}

#[test]
fn text_without_font_is_a_no_op() {
    let mut s = CpuSurface::new(8, 8).unwrap();
    assert!(!s.has_text());
    let h = s
        .text(&TextRun {
            text: "hello",
            origin: Point::ZERO,
            size_px: 12.0,
            color: theme::TERMINAL_GREEN,
            max_width: None,
        })
        .unwrap();
    assert_eq!(h, 0.0);
}

#[test]
fn bad_font_bytes_are_rejected() {
    let s = CpuSurface::new(8, 8).unwrap();
    assert!(s.with_font(vec![0, 1, 2, 3]).is_err());
}
