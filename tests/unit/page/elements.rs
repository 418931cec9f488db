use super::*;

#[test]
fn label_width_is_capped() {
    let short = QuestionElement::new("a", "Hi?", Point::new(100.0, 100.0), 0.0);
    let (w, h) = short.size();
    assert!((w - (5.0 * CHAR_WIDTH_PX + 2.0 * PADDING_X)).abs() < 1e-9);
    assert_eq!(h, ELEMENT_HEIGHT);

    let long = QuestionElement::new("b", "What kind of stuff do you do?", Point::ZERO, 0.0);
    assert_eq!(long.size().0, MAX_ELEMENT_WIDTH);
}

#[test]
fn bounds_are_centred() {
    let e = QuestionElement::new("a", "What is this?", Point::new(300.0, 200.0), 1.5);
    let b = e.bounds();
    assert!((b.center().x - 300.0).abs() < 1e-9);
    assert!((b.center().y - 200.0).abs() < 1e-9);
    assert!(e.contains(Point::new(300.0, 200.0)));
    assert!(!e.contains(Point::new(300.0, 260.0)));
}

#[test]
fn registry_answers_mounted_ids_only() {
    let tree = ElementTree::new(vec![QuestionElement::new(
        "a",
        "A?",
        Point::new(10.0, 10.0),
        0.0,
    )]);
    assert!(tree.question_bounds("a").is_some());
    assert!(tree.question_bounds("b").is_none());

    let mut tree = tree;
    tree.unmount();
    assert!(tree.is_empty());
    assert!(tree.question_bounds("a").is_none());
}

#[test]
fn select_marks_exactly_one() {
    let mut tree = ElementTree::new(vec![
        QuestionElement::new("a", "A?", Point::new(10.0, 10.0), 0.0),
        QuestionElement::new("b", "B?", Point::new(100.0, 10.0), 0.0),
    ]);
    tree.select(Some("b"));
    assert!(!tree.get("a").unwrap().selected);
    assert!(tree.get("b").unwrap().selected);
    tree.select(None);
    assert!(tree.elements().iter().all(|e| !e.selected));
}

#[test]
fn hit_test_finds_element() {
    let tree = ElementTree::new(vec![QuestionElement::new(
        "a",
        "A?",
        Point::new(50.0, 50.0),
        0.0,
    )]);
    assert_eq!(tree.hit(Point::new(52.0, 48.0)).map(|e| e.id.as_str()), Some("a"));
    assert!(tree.hit(Point::new(500.0, 500.0)).is_none());
}
