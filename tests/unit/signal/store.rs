use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn dispatch_toggles_same_id() {
    let store = ActivationStore::new();
    assert_eq!(store.dispatch(ActivationEvent::new("what-is-this")), Some("what-is-this".into()));
    assert_eq!(store.dispatch(ActivationEvent::new("what-is-this")), None);
    assert_eq!(store.current(), None);
    assert_eq!(store.revision(), 2);
}

#[test]
fn dispatch_other_id_switches() {
    let store = ActivationStore::new();
    store.dispatch(ActivationEvent::new("a"));
    store.dispatch(ActivationEvent::new("b"));
    assert!(store.is_active("b"));
    assert!(!store.is_active("a"));
}

#[test]
fn set_does_not_toggle() {
    let store = ActivationStore::new();
    store.set("a");
    store.set("a");
    assert!(store.is_active("a"));
    assert_eq!(store.revision(), 1);
}

#[test]
fn every_subscriber_sees_each_write() {
    let store = ActivationStore::new();
    let seen_a = Rc::new(RefCell::new(Vec::new()));
    let seen_b = Rc::new(Cell::new(0));

    let sa = Rc::clone(&seen_a);
    let _sub_a = store.subscribe(move |c| sa.borrow_mut().push(c.current.clone()));
    let sb = Rc::clone(&seen_b);
    let _sub_b = store.subscribe(move |_| sb.set(sb.get() + 1));

    store.dispatch(ActivationEvent::new("x"));
    store.dispatch(ActivationEvent::new("x"));

    assert_eq!(*seen_a.borrow(), vec![Some("x".to_owned()), None]);
    assert_eq!(seen_b.get(), 2);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let store = ActivationStore::new();
    let hits = Rc::new(Cell::new(0));
    let h = Rc::clone(&hits);
    let sub = store.subscribe(move |_| h.set(h.get() + 1));
    assert_eq!(store.subscriber_count(), 1);
    store.set("a");
    drop(sub);
    assert_eq!(store.subscriber_count(), 0);
    store.set("b");
    assert_eq!(hits.get(), 1);
}

#[test]
fn callbacks_may_read_the_store() {
    let store = ActivationStore::new();
    let observed = Rc::new(RefCell::new(None));
    let reader = store.clone();
    let o = Rc::clone(&observed);
    let _sub = store.subscribe(move |_| *o.borrow_mut() = reader.current());
    store.set("q");
    assert_eq!(observed.borrow().as_deref(), Some("q"));
}

#[test]
fn change_reports_event_and_previous() {
    let store = ActivationStore::new();
    let last = Rc::new(RefCell::new(None));
    let l = Rc::clone(&last);
    let _sub = store.subscribe(move |c: &ActivationChange| *l.borrow_mut() = Some(c.clone()));

    store.set("a");
    store.clear();
    let change = last.borrow().clone().unwrap();
    assert_eq!(change.previous.as_deref(), Some("a"));
    assert_eq!(change.current, None);
    assert!(change.event.is_none());
    assert!(change.changed());
}
