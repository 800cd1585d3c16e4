#![forbid(unsafe_code)]

//! A shared, version-tracked value with change notification.
//!
//! Cloning an [`Observable`] shares the underlying value; all clones see
//! the same state and the same subscriber list. Subscribers run on the
//! caller's stack during `set`, after the value borrow has been released,
//! so a callback may freely read (or even set) the observable it watches.
//!
//! # Failure Modes
//!
//! - Callback panic: propagates to the caller of `set`.
//! - A callback that sets its own source to a new value recurses through
//!   notification; the equal-value no-op rule is the only cycle brake, so
//!   divergent feedback loops are the subscriber's bug, not detected here.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct Subscriber<T> {
    id: u64,
    callback: Rc<dyn Fn(&T)>,
}

struct Inner<T> {
    value: T,
    version: u64,
    next_id: u64,
    subscribers: Vec<Subscriber<T>>,
}

/// A shared value wrapper that notifies subscribers on change.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Create an observable holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Read the current value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Number of times the value has changed since creation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Set a new value, notifying subscribers in registration order.
    ///
    /// Setting a value equal to the current one is a no-op: no version
    /// bump, no notifications.
    pub fn set(&self, value: T) {
        let callbacks: Vec<Rc<dyn Fn(&T)>> = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value.clone();
            inner.version += 1;
            inner
                .subscribers
                .iter()
                .map(|s| Rc::clone(&s.callback))
                .collect()
        };
        for callback in callbacks {
            callback(&value);
        }
    }

    /// Register a change callback. The callback fires on every effective
    /// `set` until the returned [`Subscription`] is dropped.
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push(Subscriber {
                id,
                callback: Rc::new(callback),
            });
            id
        };
        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|s| s.id != id);
                }
            })),
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// RAII guard for a registered callback; unsubscribes on drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unsubscribe immediately instead of waiting for drop.
    pub fn release(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn get_returns_current_value() {
        let obs = Observable::new(7);
        assert_eq!(obs.get(), 7);
        obs.set(9);
        assert_eq!(obs.get(), 9);
    }

    #[test]
    fn with_reads_without_cloning() {
        let obs = Observable::new(String::from("sheet"));
        let len = obs.with(|s| s.len());
        assert_eq!(len, 5);
    }

    #[test]
    fn equal_set_is_noop() {
        let obs = Observable::new(42);
        let fired = Rc::new(Cell::new(0));
        let f = Rc::clone(&fired);
        let _sub = obs.subscribe(move |_| f.set(f.get() + 1));

        obs.set(42);
        assert_eq!(obs.version(), 0);
        assert_eq!(fired.get(), 0);

        obs.set(43);
        assert_eq!(obs.version(), 1);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn subscribers_notified_in_registration_order() {
        let obs = Observable::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));

        let o1 = Rc::clone(&order);
        let _s1 = obs.subscribe(move |_| o1.borrow_mut().push(1));
        let o2 = Rc::clone(&order);
        let _s2 = obs.subscribe(move |_| o2.borrow_mut().push(2));
        let o3 = Rc::clone(&order);
        let _s3 = obs.subscribe(move |_| o3.borrow_mut().push(3));

        obs.set(1);
        assert_eq!(*order.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn drop_unsubscribes() {
        let obs = Observable::new(0);
        let fired = Rc::new(Cell::new(0));
        {
            let f = Rc::clone(&fired);
            let _sub = obs.subscribe(move |_| f.set(f.get() + 1));
            obs.set(1);
            assert_eq!(fired.get(), 1);
        }
        obs.set(2);
        assert_eq!(fired.get(), 1, "callback must not fire after drop");
        assert_eq!(obs.subscriber_count(), 0);
    }

    #[test]
    fn release_unsubscribes_early() {
        let obs = Observable::new(0);
        let fired = Rc::new(Cell::new(0));
        let f = Rc::clone(&fired);
        let sub = obs.subscribe(move |_| f.set(f.get() + 1));
        sub.release();
        obs.set(1);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn clone_shares_state() {
        let a = Observable::new(10);
        let b = a.clone();
        b.set(99);
        assert_eq!(a.get(), 99);
        assert_eq!(a.version(), b.version());
    }

    #[test]
    fn callback_may_read_source() {
        let obs = Observable::new(1);
        let seen = Rc::new(Cell::new(0));
        let s = Rc::clone(&seen);
        let reader = obs.clone();
        let _sub = obs.subscribe(move |_| s.set(reader.get()));
        obs.set(5);
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn callback_set_converges_via_noop_rule() {
        let obs = Observable::new(0);
        let writer = obs.clone();
        let _sub = obs.subscribe(move |v| writer.set(*v));
        obs.set(3);
        assert_eq!(obs.get(), 3);
    }

    #[test]
    fn subscription_survives_source_drop() {
        let sub;
        {
            let obs = Observable::new(0);
            sub = obs.subscribe(|_| {});
        }
        drop(sub);
    }
}
