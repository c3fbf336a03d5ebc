//! Window-wide pointer-press listeners.
//!
//! The host turns every pointer press of a frame into a [`PointerPress`] and
//! hands it to [`PointerHub::dispatch`]. Interested parties hold a
//! [`Subscription`]; dropping it detaches the listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPress {
    pub pos: egui::Pos2,
}

/// Returned by a listener to stay attached or to detach itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerControl {
    Keep,
    Remove,
}

type Listener = Box<dyn FnMut(&PointerPress) -> ListenerControl>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    dispatching: bool,
    /// Subscriptions dropped while `listeners` was lent out to a dispatch.
    detached: Vec<u64>,
}

impl Registry {
    fn remove(&mut self, id: u64) {
        if self.dispatching {
            self.detached.push(id);
        } else {
            self.listeners.retain(|(listener_id, _)| *listener_id != id);
        }
    }
}

#[derive(Clone, Default)]
pub struct PointerHub {
    registry: Rc<RefCell<Registry>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&PointerPress) -> ListenerControl + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Box::new(listener)));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Runs every attached listener once, in subscription order.
    pub fn dispatch(&self, press: &PointerPress) {
        let mut listeners = {
            let mut registry = self.registry.borrow_mut();
            registry.dispatching = true;
            std::mem::take(&mut registry.listeners)
        };

        // Registry is not borrowed here, so listeners may subscribe or drop
        // subscriptions.
        listeners.retain_mut(|(_, listener)| listener(press) == ListenerControl::Keep);

        let mut registry = self.registry.borrow_mut();
        registry.dispatching = false;
        let detached = std::mem::take(&mut registry.detached);
        listeners.retain(|(id, _)| !detached.contains(id));
        // Subscribed during this dispatch, possibly already dropped again.
        registry.listeners.retain(|(id, _)| !detached.contains(id));
        listeners.append(&mut registry.listeners);
        registry.listeners = listeners;
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Keeps a listener attached to its [`PointerHub`] until dropped.
#[must_use = "dropping a Subscription detaches its listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// False once the listener removed itself or the hub is gone.
    pub fn is_attached(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            registry
                .borrow()
                .listeners
                .iter()
                .any(|(id, _)| *id == self.id)
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn press(x: f32, y: f32) -> PointerPress {
        PointerPress {
            pos: egui::pos2(x, y),
        }
    }

    fn counting(hub: &PointerHub, hits: &Rc<Cell<u32>>) -> Subscription {
        let hits = Rc::clone(hits);
        hub.subscribe(move |_| {
            hits.set(hits.get() + 1);
            ListenerControl::Keep
        })
    }

    #[test]
    fn dispatch_reaches_attached_listeners() {
        let hub = PointerHub::new();
        let hits = Rc::new(Cell::new(0));
        let _a = counting(&hub, &hits);
        let _b = counting(&hub, &hits);

        hub.dispatch(&press(1.0, 1.0));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn dropping_subscription_detaches_listener() {
        let hub = PointerHub::new();
        let hits = Rc::new(Cell::new(0));
        let sub = counting(&hub, &hits);
        assert_eq!(hub.listener_count(), 1);

        drop(sub);
        assert_eq!(hub.listener_count(), 0);
        hub.dispatch(&press(1.0, 1.0));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn listener_can_remove_itself() {
        let hub = PointerHub::new();
        let sub = hub.subscribe(|_| ListenerControl::Remove);
        assert!(sub.is_attached());

        hub.dispatch(&press(1.0, 1.0));
        assert!(!sub.is_attached());
        assert_eq!(hub.listener_count(), 0);
        // Dropping the spent guard is a no-op.
        drop(sub);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn subscription_dropped_during_dispatch_is_detached_afterwards() {
        let hub = PointerHub::new();
        let held: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(Cell::new(0));
        *held.borrow_mut() = Some(counting(&hub, &hits));

        let slot = Rc::clone(&held);
        let _dropper = hub.subscribe(move |_| {
            slot.borrow_mut().take();
            ListenerControl::Keep
        });

        hub.dispatch(&press(1.0, 1.0));
        assert_eq!(hub.listener_count(), 1);
        hub.dispatch(&press(1.0, 1.0));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn subscription_made_and_dropped_during_dispatch_leaves_nothing_behind() {
        let hub = PointerHub::new();
        let inner_hub = hub.clone();
        let _outer = hub.subscribe(move |_| {
            let short_lived = inner_hub.subscribe(|_| ListenerControl::Keep);
            drop(short_lived);
            ListenerControl::Remove
        });

        hub.dispatch(&press(1.0, 1.0));
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn subscription_made_during_dispatch_survives_it() {
        let hub = PointerHub::new();
        let inner_hub = hub.clone();
        let made: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));
        let slot = Rc::clone(&made);
        let _outer = hub.subscribe(move |_| {
            slot.borrow_mut().push(inner_hub.subscribe(|_| ListenerControl::Keep));
            ListenerControl::Remove
        });

        hub.dispatch(&press(1.0, 1.0));
        assert_eq!(hub.listener_count(), 1);
        assert!(made.borrow()[0].is_attached());
    }

    #[test]
    fn subscription_outliving_hub_is_harmless() {
        let hub = PointerHub::new();
        let sub = hub.subscribe(|_| ListenerControl::Keep);
        drop(hub);
        assert!(!sub.is_attached());
        drop(sub);
    }
}
