use super::*;

#[test]
fn default_book_has_eight_unique_entries() {
    let book = QuestionBook::default();
    assert_eq!(book.len(), 8);
    let ids = book.ids();
    assert_eq!(ids[0], "what-is-this");
    assert_eq!(ids[3], "how-to-join");
    assert!(QuestionBook::new(book.entries().to_vec()).is_ok());
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = QuestionBook::new(vec![
        QuestionEntry::new("a", "A?", "a"),
        QuestionEntry::new("a", "A again?", "b"),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("duplicate question id 'a'"));
}

#[test]
fn empty_id_is_rejected() {
    assert!(QuestionBook::new(vec![QuestionEntry::new("  ", "?", "!")]).is_err());
}

#[test]
fn lookup_by_id() {
    let book = QuestionBook::default();
    assert_eq!(
        book.get("how-to-join").unwrap().answer,
        "ask the person who sent you this website how to get involved"
    );
    assert_eq!(book.position("whats-the-goal"), Some(7));
    assert!(book.get("nope").is_none());
    assert!(!book.contains("nope"));
}

#[test]
fn json_round_trip_keeps_order_and_validates() {
    let json = r#"[
        {"id": "one", "question": "One?", "answer": "1"},
        {"id": "two", "question": "Two?", "answer": "2"}
    ]"#;
    let book = QuestionBook::from_json_str(json).unwrap();
    assert_eq!(book.ids(), vec!["one".to_owned(), "two".to_owned()]);

    let dup = r#"[{"id": "x", "question": "", "answer": ""}, {"id": "x", "question": "", "answer": ""}]"#;
    assert!(QuestionBook::from_json_str(dup).is_err());
    assert!(serde_json::from_str::<QuestionBook>(dup).is_err());
}
