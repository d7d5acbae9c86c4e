//! Tests for the notification support library
//!
//! The generated setters raise through [`PropertyNotifier`]; these tests pin
//! the broadcast ordering and the change-tracking contract.

use std::cell::RefCell;
use std::rc::Rc;

use scrivener_support::PropertyNotifier;

#[test]
fn changing_fires_before_changed_per_property() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut notifier = PropertyNotifier::new();

    let log = Rc::clone(&events);
    notifier.subscribe_changing(move |p| log.borrow_mut().push(format!("changing:{p}")));
    let log = Rc::clone(&events);
    notifier.subscribe_changed(move |p| log.borrow_mut().push(format!("changed:{p}")));

    notifier.raise_changing("title");
    notifier.raise_changed("title");

    assert_eq!(
        *events.borrow(),
        vec!["changing:title".to_string(), "changed:title".to_string()]
    );
}

#[test]
fn five_fields_set_once_give_five_plus_five() {
    let changing = Rc::new(RefCell::new(0usize));
    let changed = Rc::new(RefCell::new(0usize));
    let mut notifier = PropertyNotifier::new();

    let count = Rc::clone(&changing);
    notifier.subscribe_changing(move |_| *count.borrow_mut() += 1);
    let count = Rc::clone(&changed);
    notifier.subscribe_changed(move |_| *count.borrow_mut() += 1);

    for field in ["alpha", "beta", "gamma", "delta", "epsilon"] {
        notifier.raise_changing(field);
        notifier.raise_changed(field);
    }

    assert_eq!(*changing.borrow(), 5);
    assert_eq!(*changed.borrow(), 5);
}

#[test]
fn every_subscribed_observer_hears_every_raise() {
    let count = Rc::new(RefCell::new(0usize));
    let mut notifier = PropertyNotifier::new();

    for _ in 0..3 {
        let tally = Rc::clone(&count);
        notifier.subscribe_changed(move |_| *tally.borrow_mut() += 1);
    }
    assert_eq!(notifier.changed_observer_count(), 3);

    notifier.raise_changed("title");
    assert_eq!(*count.borrow(), 3);
}

#[test]
fn is_changed_tracks_raises_until_reset() {
    let mut notifier = PropertyNotifier::new();
    assert!(!notifier.is_changed());

    // Changing alone does not flip the flag.
    notifier.raise_changing("title");
    assert!(!notifier.is_changed());

    notifier.raise_changed("title");
    assert!(notifier.is_changed());

    notifier.reset_changed();
    assert!(!notifier.is_changed());
}

#[test]
fn raising_with_no_observers_is_harmless() {
    let mut notifier = PropertyNotifier::new();
    notifier.raise_changing("title");
    notifier.raise_changed("title");
    assert!(notifier.is_changed());
    assert_eq!(notifier.changing_observer_count(), 0);
}
