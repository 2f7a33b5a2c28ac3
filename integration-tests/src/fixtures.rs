//! Components and handler targets used across the integration tests.

use std::cell::{Cell, RefCell};

use strand_core::InvokeError;
use strand_events::{Event, Subscribers};

/// A counter whose methods are bound into handlers.
#[derive(Debug, Default)]
pub struct Counter {
    value: Cell<i32>,
}

impl Counter {
    /// Creates a counter starting at `value`.
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self {
            value: Cell::new(value),
        }
    }

    /// Adds one.
    pub fn increment(&self, _: &()) {
        self.value.set(self.value.get() + 1);
    }

    /// Subtracts one.
    pub fn decrement(&self, _: &()) {
        self.value.set(self.value.get() - 1);
    }

    /// Adds `amount` and returns the new value.
    pub fn add(&self, amount: &i32) -> i32 {
        self.value.set(self.value.get() + amount);
        self.value.get()
    }

    /// Returns the current value.
    #[must_use]
    pub fn get(&self) -> i32 {
        self.value.get()
    }
}

/// Records labels in the order handlers push them.
#[derive(Debug, Default)]
pub struct Journal {
    entries: RefCell<Vec<String>>,
}

impl Journal {
    /// Appends `entry`.
    pub fn record(&self, entry: impl Into<String>) {
        self.entries.borrow_mut().push(entry.into());
    }

    /// Returns and clears the recorded entries.
    pub fn take(&self) -> Vec<String> {
        self.entries.take()
    }
}

/// A component that owns an event and publishes it itself.
///
/// Outside code may only subscribe through [`Door::on_open`].
#[derive(Debug, Default)]
pub struct Door {
    opened: Event<String>,
    open: bool,
}

impl Door {
    /// Returns the subscription view of the "opened" event.
    pub fn on_open(&mut self) -> Subscribers<'_, String> {
        self.opened.subscribers()
    }

    /// Opens the door and notifies subscribers with `who`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::NullInvocation`] if nobody is subscribed. The
    /// door is open either way.
    pub fn open(&mut self, who: &str) -> Result<(), InvokeError> {
        self.open = true;
        self.opened.publish(&who.to_owned())
    }

    /// Opens the door, notifying subscribers only if there are any.
    pub fn open_quietly(&mut self, who: &str) {
        self.open = true;
        self.opened.publish_if_present(&who.to_owned());
    }

    /// Returns `true` once the door has been opened.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }
}
