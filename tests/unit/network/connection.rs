use super::*;

#[test]
fn hub_thickness_follows_activity() {
    let on = Connection::hub("a", Point::ORIGIN, Point::new(10.0, 0.0), true);
    let off = Connection::hub("b", Point::ORIGIN, Point::new(10.0, 0.0), false);
    assert_eq!(on.thickness, 2.0);
    assert_eq!(off.thickness, 0.5);
    assert_eq!(on.target_progress(), 1.0);
    assert_eq!(off.target_progress(), 0.0);
    assert_eq!(on.question_id(), Some("a"));
}

#[test]
fn beam_fields() {
    let b = Connection::beam("a", "b", Point::ORIGIN, Point::new(3.0, 4.0));
    assert!(b.is_beam());
    assert!(b.active);
    assert_eq!(b.progress, 1.0);
    assert_eq!(b.beam_progress(), Some(0.0));
    assert_eq!(b.beam_origin(), Some("a"));
    assert_eq!(b.length(), 5.0);
}

#[test]
fn drawn_segment_interpolates() {
    let mut c = Connection::hub("a", Point::ORIGIN, Point::new(10.0, 20.0), true);
    c.progress = 0.5;
    assert_eq!(c.drawn_segment().p1, Point::new(5.0, 10.0));
}

#[test]
fn beam_segment_enters_and_exits() {
    let start = Point::ORIGIN;
    let end = Point::new(100.0, 0.0);

    // At 0 the head sits at -L: nothing visible yet.
    assert!(beam_segment(start, end, 0.0).is_none());
    // At 1 the head sits at d: gone.
    assert!(beam_segment(start, end, 1.0).is_none());

    let early = beam_segment(start, end, 0.05).unwrap();
    assert_eq!(early.segment.p0, start);
    assert!(early.pulse_origin);
    assert!(!early.pulse_target);

    let mid = beam_segment(start, end, 0.5).unwrap();
    let len = (mid.segment.p1 - mid.segment.p0).hypot();
    assert!((len - 15.0).abs() < 1e-9);
    assert!(!mid.pulse_origin && !mid.pulse_target);

    let late = beam_segment(start, end, 0.95).unwrap();
    assert_eq!(late.segment.p1, end);
    assert!(late.pulse_target);
}

#[test]
fn degenerate_beam_is_invisible() {
    assert!(beam_segment(Point::new(1.0, 1.0), Point::new(1.0, 1.0), 0.5).is_none());
}
