//! Typed subscriber registry for fire-and-forget notifications.
//!
//! Replaces document-wide event broadcast with an explicit subscription
//! interface: `subscribe` returns an id that can later be passed to
//! `unsubscribe`. Delivery order follows registration order; callbacks get
//! the event by value and cannot report failure back to the publisher.

/// Handle returned by [`Subscribers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registry of callbacks interested in events of type `E`.
pub struct Subscribers<E> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn FnMut(E)>)>,
}

impl<E> std::fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Subscribers<E> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Registers a callback; the returned id unregisters it later.
    pub fn subscribe(&mut self, callback: impl FnMut(E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription. Returns false if the id was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: Copy> Subscribers<E> {
    /// Delivers `event` to every subscriber in registration order.
    pub fn notify(&mut self, event: E) {
        for (_, callback) in &mut self.entries {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_reaches_all_subscribers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::new();

        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            subscribers.subscribe(move |value: i32| {
                seen.borrow_mut().push((tag, value));
            });
        }

        subscribers.notify(7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut subscribers = Subscribers::new();

        let counter = Rc::clone(&count);
        let id = subscribers.subscribe(move |_: i32| {
            *counter.borrow_mut() += 1;
        });

        subscribers.notify(1);
        assert!(subscribers.unsubscribe(id));
        subscribers.notify(2);

        assert_eq!(*count.borrow(), 1);
        // Second unsubscribe of the same id is a no-op
        assert!(!subscribers.unsubscribe(id));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut subscribers = Subscribers::new();
        let first = subscribers.subscribe(|_: i32| {});
        let second = subscribers.subscribe(|_: i32| {});
        assert_ne!(first, second);
    }
}
