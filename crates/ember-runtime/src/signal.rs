//! One-shot event broadcast
//!
//! A [`Signal`] delivers the next emitted value to every waiter registered
//! before the emission, then forgets them. There is no buffering: a value
//! emitted with no one waiting is dropped, and a waiter registered after an
//! emission only sees the following one.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Slot<T> = Rc<RefCell<Option<T>>>;

/// Single-use receiving end of a [`Signal`] subscription.
///
/// Poll with [`try_take`](Waiter::try_take) from inside the frame loop.
/// Dropping a waiter cancels the subscription.
pub struct Waiter<T> {
    slot: Slot<T>,
}

impl<T> Waiter<T> {
    /// Has a value been delivered and not yet taken?
    pub fn ready(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Take the delivered value, if any. Yields it at most once.
    pub fn try_take(&mut self) -> Option<T> {
        self.slot.borrow_mut().take()
    }
}

/// One-shot, multi-subscriber notification channel.
///
/// Waiter slots are weakly held: a dropped [`Waiter`] is an implicit cancel
/// and the next emission skips it.
pub struct Signal<T> {
    waiters: RefCell<Vec<Weak<RefCell<Option<T>>>>>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self {
            waiters: RefCell::new(Vec::new()),
        }
    }

    /// Register a new subscription, resolved by the next [`emit`](Signal::emit).
    pub fn wait(&self) -> Waiter<T> {
        let slot: Slot<T> = Rc::new(RefCell::new(None));
        self.waiters.borrow_mut().push(Rc::downgrade(&slot));
        Waiter { slot }
    }

    /// Number of live pending waiters.
    pub fn len(&self) -> usize {
        self.waiters
            .borrow()
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Signal<T> {
    /// Deliver `value` to every pending waiter, in subscription order.
    ///
    /// The pending list is taken and cleared before delivery, so `wait`
    /// calls made while an emission resolves land in the next round.
    pub fn emit(&self, value: T) {
        let waiters = self.waiters.take();
        for waiter in waiters {
            if let Some(slot) = waiter.upgrade() {
                *slot.borrow_mut() = Some(value.clone());
            }
        }
    }
}
