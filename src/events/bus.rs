//! Publish/subscribe event dispatch.
//!
//! The bus is an explicit object owned by the game context and handed to
//! whoever needs to listen - subscription lifetime is tied to explicit
//! registration and deregistration, never to implicit global wiring.
//! Any number of independent listeners may subscribe; the order they are
//! notified in is unspecified.

use super::event::GameEvent;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// Fire-and-forget notification dispatch.
///
/// ## Usage
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use pairup::events::{EventBus, GameEvent};
///
/// let mut bus = EventBus::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = seen.clone();
/// let id = bus.subscribe(move |event| sink.borrow_mut().push(*event));
///
/// bus.publish(&GameEvent::GameStart);
/// assert_eq!(*seen.borrow(), vec![GameEvent::GameStart]);
///
/// bus.unsubscribe(id);
/// bus.publish(&GameEvent::GameReset);
/// assert_eq!(seen.borrow().len(), 1);
/// ```
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(ListenerId, Box<dyn FnMut(&GameEvent)>)>,
    next_id: u32,
}

impl EventBus {
    /// Create a bus with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; keep the returned id to deregister it.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was still registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Notify every listener. No return value flows back.
    pub fn publish(&mut self, event: &GameEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Is anyone listening?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
