//! Single-threaded source of lifecycle-change events.
//!
//! `emit` delivers one event at a time; every listener finishes handling it
//! before the next event is dispatched, so handlers never interleave. An event
//! emitted from inside a listener is queued and delivered once the current one
//! has been handled by everyone.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::domain::phase::LifecyclePhase;

type Listener = Box<dyn FnMut(LifecyclePhase)>;

struct BusInner {
    current: LifecyclePhase,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    dispatching: bool,
    /// Listeners moved out for the event being dispatched.
    in_flight: usize,
    removed_while_dispatching: Vec<u64>,
    pending: VecDeque<LifecyclePhase>,
}

pub struct LifecycleBus {
    inner: Rc<RefCell<BusInner>>,
}

impl LifecycleBus {
    pub fn new(initial: LifecyclePhase) -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner {
                current: initial,
                next_id: 0,
                listeners: Vec::new(),
                dispatching: false,
                in_flight: 0,
                removed_while_dispatching: Vec::new(),
                pending: VecDeque::new(),
            })),
        }
    }

    /// Phase of the event most recently dispatched.
    pub fn current(&self) -> LifecyclePhase {
        self.inner.borrow().current
    }

    /// Live subscriptions, including those taking part in a dispatch.
    pub fn listener_count(&self) -> usize {
        let inner = self.inner.borrow();
        (inner.listeners.len() + inner.in_flight)
            .saturating_sub(inner.removed_while_dispatching.len())
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(LifecyclePhase) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Box::new(listener)));
        Subscription {
            bus: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    pub fn emit(&self, phase: LifecyclePhase) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.dispatching {
                inner.pending.push_back(phase);
                return;
            }
            inner.dispatching = true;
        }

        let mut next = Some(phase);
        while let Some(phase) = next {
            self.dispatch(phase);
            let mut inner = self.inner.borrow_mut();
            next = inner.pending.pop_front();
            if next.is_none() {
                inner.dispatching = false;
            }
        }
    }

    fn dispatch(&self, phase: LifecyclePhase) {
        // Listeners are moved out for the duration of the dispatch so they can
        // subscribe, unsubscribe or emit without re-borrowing the bus.
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.current = phase;
            let listeners = std::mem::take(&mut inner.listeners);
            inner.in_flight = listeners.len();
            listeners
        };

        for (id, listener) in listeners.iter_mut() {
            if self.inner.borrow().removed_while_dispatching.contains(id) {
                continue;
            }
            listener(phase);
        }

        let dropped: Vec<(u64, Listener)> = {
            let mut inner = self.inner.borrow_mut();
            let removed = std::mem::take(&mut inner.removed_while_dispatching);
            let (dropped, mut kept): (Vec<_>, Vec<_>) = listeners
                .into_iter()
                .partition(|(id, _)| removed.contains(id));
            kept.append(&mut inner.listeners);
            inner.listeners = kept;
            inner.in_flight = 0;
            dropped
        };
        // Closures may own subscriptions; drop them with the bus unborrowed.
        drop(dropped);
    }
}

/// Handle to one registered listener. Dropping it unsubscribes.
pub struct Subscription {
    bus: Weak<RefCell<BusInner>>,
    id: Option<u64>,
}

impl Subscription {
    /// Unsubscribes. Safe to call any number of times, even after the bus is gone.
    pub fn remove(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        let Some(bus) = self.bus.upgrade() else {
            return;
        };
        let removed = {
            let mut inner = bus.borrow_mut();
            match inner.listeners.iter().position(|(lid, _)| *lid == id) {
                Some(pos) => Some(inner.listeners.remove(pos)),
                None => {
                    if inner.dispatching {
                        inner.removed_while_dispatching.push(id);
                    }
                    None
                }
            }
        };
        drop(removed);
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some() && self.bus.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}
