//! Inactivity monitor: locks the app when it comes back from the background
//! after being idle for longer than the configured threshold.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    common::{clock::Clock, config::AppConfig},
    domain::{phase::LifecyclePhase, route::Route},
    services::{identity::IdentityProvider, navigation::Navigator, storage::KeyValueStore},
    worker::{
        handlers::lifecycle::{evaluate, LockAction},
        lifecycle_bus::{LifecycleBus, Subscription},
    },
};

/// Inactivity lock configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockConfig {
    /// Idle milliseconds that must be exceeded before locking
    pub threshold_ms: i64,
    /// Store key holding the backgrounded-at timestamp
    pub start_time_key: String,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            threshold_ms: 3000,
            start_time_key: "startTime".to_string(),
        }
    }
}

impl From<&AppConfig> for LockConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            threshold_ms: config.lock_threshold_ms,
            start_time_key: config.start_time_key.clone(),
        }
    }
}

pub struct InactivityMonitor {
    config: LockConfig,
    store: Box<dyn KeyValueStore>,
    identity: Rc<dyn IdentityProvider>,
    clock: Rc<dyn Clock>,
    navigator: Rc<RefCell<dyn Navigator>>,
    previous: LifecyclePhase,
}

impl InactivityMonitor {
    pub fn new(
        config: LockConfig,
        store: Box<dyn KeyValueStore>,
        identity: Rc<dyn IdentityProvider>,
        clock: Rc<dyn Clock>,
        navigator: Rc<RefCell<dyn Navigator>>,
    ) -> Self {
        Self {
            config,
            store,
            identity,
            clock,
            navigator,
            previous: LifecyclePhase::Active,
        }
    }

    pub fn with_initial_phase(mut self, phase: LifecyclePhase) -> Self {
        self.previous = phase;
        self
    }

    pub fn previous_phase(&self) -> LifecyclePhase {
        self.previous
    }

    /// Stored backgrounded-at timestamp, if any.
    pub fn background_started_at(&self) -> Option<i64> {
        self.store.get(&self.config.start_time_key)
    }

    /// Processes one lifecycle change to completion and reports what it did.
    pub fn handle_phase_change(&mut self, next: LifecyclePhase) -> LockAction {
        let previous = self.previous;
        let returning = previous == LifecyclePhase::Background && next == LifecyclePhase::Active;
        let now = self.clock.now_millis();
        let stored_start = if returning {
            self.store.get(&self.config.start_time_key)
        } else {
            None
        };

        let action = evaluate(
            previous,
            next,
            now,
            self.identity.is_signed_in(),
            stored_start,
            self.config.threshold_ms,
        );
        log::debug!("lifecycle {previous} -> {next} at {now}: {action:?}");

        match action {
            LockAction::Persist(at) => self.store.set(&self.config.start_time_key, at),
            LockAction::NavigateToLock => {
                log::info!(
                    "locking after {} ms in background",
                    now.saturating_sub(stored_start.unwrap_or(0))
                );
                self.navigator.borrow_mut().replace(Route::Lock);
            }
            LockAction::Noop => {}
        }

        if returning {
            self.store.remove(&self.config.start_time_key);
        }
        self.previous = next;
        action
    }

    /// Subscribes to `bus`, starting from the bus's current phase.
    pub fn attach(self, bus: &LifecycleBus) -> MonitorHandle {
        let monitor = Rc::new(RefCell::new(self.with_initial_phase(bus.current())));
        let listener = Rc::clone(&monitor);
        let subscription = bus.subscribe(move |phase| {
            listener.borrow_mut().handle_phase_change(phase);
        });
        MonitorHandle {
            monitor,
            subscription,
        }
    }
}

/// An attached monitor. Detaches on drop.
pub struct MonitorHandle {
    monitor: Rc<RefCell<InactivityMonitor>>,
    subscription: Subscription,
}

impl MonitorHandle {
    /// Tears down the lifecycle subscription. Idempotent.
    pub fn detach(&mut self) {
        self.subscription.remove();
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_active()
    }

    pub fn previous_phase(&self) -> LifecyclePhase {
        self.monitor.borrow().previous_phase()
    }

    pub fn background_started_at(&self) -> Option<i64> {
        self.monitor.borrow().background_started_at()
    }
}
