use crate::sim::{Event, EventContext, EventStatus, SimTime};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn new_event_is_active_with_empty_context() {
    let ev = Event::new(SimTime(5));
    assert_eq!(ev.time(), SimTime(5));
    assert_eq!(ev.status(), EventStatus::Active);
    assert!(ev.is_active());
    assert!(ev.context().is_empty());
}

#[test]
fn inactive_builder_starts_event_deactivated() {
    let ev = Event::new(SimTime(5)).inactive();
    assert_eq!(ev.status(), EventStatus::Inactive);
    assert!(!ev.is_active());
}

#[test]
fn activate_and_deactivate_are_idempotent() {
    let ev = Event::new(SimTime(1));

    ev.activate();
    ev.activate();
    assert_eq!(ev.status(), EventStatus::Active);

    ev.deactivate();
    ev.deactivate();
    assert_eq!(ev.status(), EventStatus::Inactive);

    ev.activate();
    assert_eq!(ev.status(), EventStatus::Active);
}

#[test]
fn with_context_attaches_caller_context() {
    let ctx: EventContext = [("type", "A")].into_iter().collect();
    let ev = Event::new(SimTime(1)).with_context(ctx);
    assert_eq!(
        ev.context().get("type").and_then(|v| v.as_str()),
        Some("A")
    );
}

#[test]
fn construction_does_not_invoke_action() {
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    let _ev = Event::new(SimTime(1)).with_action(move || flag.set(true));
    assert!(!fired.get());
}

#[test]
fn events_with_identical_fields_are_distinct_by_identity() {
    let a = Rc::new(Event::new(SimTime(1)));
    let b = Rc::new(Event::new(SimTime(1)));
    assert!(!Rc::ptr_eq(&a, &b));
    assert!(Rc::ptr_eq(&a, &Rc::clone(&a)));
}
