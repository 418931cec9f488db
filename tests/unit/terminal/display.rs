use super::*;
use crate::signal::store::ActivationEvent;

fn display() -> (ActivationStore, TerminalDisplay) {
    let store = ActivationStore::new();
    let term = TerminalDisplay::new(store.clone(), Rc::new(QuestionBook::default()));
    (store, term)
}

#[test]
fn no_active_question_renders_no_answer() {
    let (_store, term) = display();
    assert!(term.answer().is_none());
    assert_eq!(term.lines().len(), 3);
}

#[test]
fn active_question_renders_exactly_its_answer() {
    let (store, term) = display();
    store.dispatch(ActivationEvent::new("what-is-this"));
    let block = term.answer().unwrap();
    assert_eq!(block.entry.id, "what-is-this");
    assert!(block.entry.answer.starts_with("AI Whisperers is a community"));

    let text = term.lines().join("\n");
    assert!(text.contains(&block.entry.answer));
    let book = QuestionBook::default();
    for other in book.entries().iter().filter(|e| e.id != "what-is-this") {
        assert!(!text.contains(&other.answer), "leaked answer of {}", other.id);
    }
}

#[test]
fn reselecting_clears_the_answer() {
    let (store, term) = display();
    store.dispatch(ActivationEvent::new("how-to-join"));
    assert!(term.answer().is_some());
    store.dispatch(ActivationEvent::new("how-to-join"));
    assert!(term.answer().is_none());
}

#[test]
fn unknown_id_renders_nothing() {
    let (store, term) = display();
    store.set("not-a-question");
    assert!(term.answer().is_none());
}

#[test]
fn slug_matches_cat_command() {
    assert_eq!(answer_slug("What is this?"), "what_is_this?");
    assert_eq!(answer_slug("What kind of stuff do you do?"), "what_kind_of_st");
    assert_eq!(answer_slug("a   b"), "a_b");
    let (store, term) = display();
    store.set("whos-behind");
    assert_eq!(term.answer().unwrap().command, "$ cat who's_behind_th.txt");
}

#[test]
fn reveal_restarts_on_change() {
    let (store, mut term) = display();
    assert_eq!(term.reveal(), 1.0);
    store.set("what-is-this");
    term.tick();
    assert!(term.reveal() < 0.2);
    for _ in 0..20 {
        term.tick();
    }
    assert_eq!(term.reveal(), 1.0);
}

#[test]
fn custom_prompt_is_shown() {
    let (_store, term) = display();
    let term = term.with_prompt("$ whoami");
    assert_eq!(term.prompt(), "$ whoami");
    assert_eq!(term.lines()[2], "$ whoami█");
}
