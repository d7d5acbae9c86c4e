//! Two-phase property change notification.
//!
//! Generated setters call [`PropertyNotifier::raise_changing`] before the
//! field assignment and [`PropertyNotifier::raise_changed`] after it, and skip
//! both when the new value equals the old. Observer registration is
//! append-only; there is no deregistration surface.

use std::fmt;

type Observer = Box<dyn FnMut(&str)>;

/// Ordered observer lists for "changing" and "changed" broadcasts.
///
/// Observers fire in subscription order. Every raised "changed" also sets the
/// `is_changed` flag, which only [`PropertyNotifier::reset_changed`] clears.
#[derive(Default)]
pub struct PropertyNotifier {
    changing: Vec<Observer>,
    changed: Vec<Observer>,
    is_changed: bool,
}

impl PropertyNotifier {
    /// Creates a notifier with no observers and the flag clear.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes an observer to "changing" broadcasts.
    pub fn subscribe_changing(&mut self, observer: impl FnMut(&str) + 'static) {
        self.changing.push(Box::new(observer));
    }

    /// Subscribes an observer to "changed" broadcasts.
    pub fn subscribe_changed(&mut self, observer: impl FnMut(&str) + 'static) {
        self.changed.push(Box::new(observer));
    }

    /// Broadcasts that `property` is about to change.
    pub fn raise_changing(&mut self, property: &str) {
        for observer in &mut self.changing {
            observer(property);
        }
    }

    /// Broadcasts that `property` has changed and sets the flag.
    pub fn raise_changed(&mut self, property: &str) {
        for observer in &mut self.changed {
            observer(property);
        }
        self.is_changed = true;
    }

    /// Returns true if any "changed" broadcast has fired since the last reset.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.is_changed
    }

    /// Clears the `is_changed` flag.
    pub fn reset_changed(&mut self) {
        self.is_changed = false;
    }

    /// Returns the number of registered "changing" observers.
    #[must_use]
    pub fn changing_observer_count(&self) -> usize {
        self.changing.len()
    }

    /// Returns the number of registered "changed" observers.
    #[must_use]
    pub fn changed_observer_count(&self) -> usize {
        self.changed.len()
    }
}

impl fmt::Debug for PropertyNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyNotifier")
            .field("changing_observers", &self.changing.len())
            .field("changed_observers", &self.changed.len())
            .field("is_changed", &self.is_changed)
            .finish()
    }
}
