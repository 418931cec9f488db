use super::*;
use crate::foundation::rng::{Rng64, ScriptedRandom};

#[test]
fn boundary_widths_regenerate_without_panicking() {
    let mut field = RainField::new();
    let mut rng = Rng64::new(11);
    for (w, expected) in [
        (0.0, 0),
        (767.0, 0),
        (768.0, 38),
        (1920.0, 96),
        (60_000.0, 3000),
        (100_000.0, MAX_COLUMNS),
        (f64::MAX, MAX_COLUMNS),
    ] {
        field.resize(Viewport::new(w, 900.0), &mut rng);
        assert_eq!(field.columns().len(), expected, "width {w}");
    }
    assert_eq!(field.generation(), 7);
}

#[test]
fn column_attributes_stay_in_range() {
    let mut rng = Rng64::new(4);
    let cols = generate_columns(Viewport::new(1600.0, 900.0), &mut rng);
    for (i, c) in cols.iter().enumerate() {
        let slot = i as f64 * COLUMN_SPACING;
        assert!(c.x >= slot && c.x < slot + 10.0);
        assert!((5..20).contains(&c.glyphs.len()));
        assert!((25.0..75.0).contains(&c.speed));
        assert!((0.05..0.25).contains(&c.opacity));
        assert!((0.0..1.0).contains(&c.phase));
    }
}

#[test]
fn scripted_extremes() {
    let mut lo = ScriptedRandom::new(vec![0.0]);
    let c = &generate_columns(Viewport::new(800.0, 600.0), &mut lo)[0];
    assert_eq!(c.glyphs.len(), 5);
    assert_eq!(c.speed, 25.0);
    assert_eq!(c.opacity, 0.05);
    assert!(c.glyphs.iter().all(|&g| g == '0'));

    let mut hi = ScriptedRandom::new(vec![1.0]);
    let c = &generate_columns(Viewport::new(800.0, 600.0), &mut hi)[0];
    assert_eq!(c.glyphs.len(), 19);
}

#[test]
fn resize_replaces_columns_wholesale() {
    let mut field = RainField::new();
    field.resize(Viewport::new(1000.0, 800.0), &mut Rng64::new(1));
    let before = field.columns().to_vec();
    field.resize(Viewport::new(1000.0, 800.0), &mut Rng64::new(2));
    assert_eq!(before.len(), field.columns().len());
    assert_ne!(before, field.columns());
}

#[test]
fn phase_wraps_and_column_scrolls_through_viewport() {
    let mut c = MatrixColumn {
        x: 0.0,
        glyphs: vec!['0'; 10],
        speed: 10.0,
        opacity: 0.1,
        phase: 0.0,
    };
    assert_eq!(c.top(600.0), -160.0);
    c.advance(5.0);
    assert!((c.phase - 0.5).abs() < 1e-12);
    assert!((c.top(600.0) - 220.0).abs() < 1e-9);
    c.advance(6.0);
    assert!((c.phase - 0.1).abs() < 1e-9);
    c.advance(f64::NAN);
    assert!((c.phase - 0.1).abs() < 1e-9);
}
