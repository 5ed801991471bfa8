use std::cell::RefCell;
use std::rc::Rc;

use wallet_core::{
    common::clock::ManualClock,
    domain::{phase::LifecyclePhase, route::Route},
    services::{
        identity::SessionState,
        navigation::StackNavigator,
        storage::{KeyValueStore, MemoryStore, SledStore},
    },
    worker::{
        lifecycle_bus::LifecycleBus,
        monitor::{InactivityMonitor, LockConfig, MonitorHandle},
    },
};

const T0: i64 = 1_714_550_400_000;

struct Harness {
    clock: Rc<ManualClock>,
    nav: Rc<RefCell<StackNavigator>>,
    bus: LifecycleBus,
    handle: MonitorHandle,
}

impl Harness {
    fn new(initial: LifecyclePhase, signed_in: bool, store: Box<dyn KeyValueStore>) -> Self {
        let clock = Rc::new(ManualClock::new(T0));
        let nav = Rc::new(RefCell::new(StackNavigator::new(Route::Home)));
        let bus = LifecycleBus::new(initial);
        let handle = InactivityMonitor::new(
            LockConfig::default(),
            store,
            Rc::new(SessionState::new(true, signed_in)),
            clock.clone(),
            nav.clone(),
        )
        .attach(&bus);
        Self {
            clock,
            nav,
            bus,
            handle,
        }
    }

    fn emit_at(&self, at: i64, phase: LifecyclePhase) {
        self.clock.set(at);
        self.bus.emit(phase);
    }

    fn lock_count(&self) -> usize {
        self.nav
            .borrow()
            .history()
            .iter()
            .filter(|r| **r == Route::Lock)
            .count()
    }
}

#[test]
fn lock_depends_on_elapsed_background_time() {
    for (t1, expected_locks) in [(T0 + 3001, 1), (T0 + 3000, 0), (T0 + 1, 0), (T0 + 60_000, 1)] {
        let h = Harness::new(LifecyclePhase::Active, true, Box::new(MemoryStore::new()));
        h.emit_at(T0, LifecyclePhase::Background);
        h.emit_at(t1, LifecyclePhase::Active);
        assert_eq!(h.lock_count(), expected_locks, "t1 - t0 = {}", t1 - T0);
    }
}

#[test]
fn signed_out_never_locks() {
    let h = Harness::new(LifecyclePhase::Active, false, Box::new(MemoryStore::new()));
    h.emit_at(T0, LifecyclePhase::Background);
    h.emit_at(T0 + 86_400_000, LifecyclePhase::Active);
    assert_eq!(h.lock_count(), 0);
}

#[test]
fn cold_start_from_background_with_empty_store_locks() {
    // No stored start time: elapsed is measured from the epoch.
    let h = Harness::new(LifecyclePhase::Background, true, Box::new(MemoryStore::new()));
    assert_eq!(h.handle.background_started_at(), None);

    h.emit_at(T0, LifecyclePhase::Active);
    assert_eq!(h.lock_count(), 1);
}

#[test]
fn start_time_survives_restart_in_sled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inactivity-storage");

    {
        let h = Harness::new(
            LifecyclePhase::Active,
            true,
            Box::new(SledStore::open(&path).unwrap()),
        );
        h.emit_at(T0, LifecyclePhase::Background);
        assert_eq!(h.handle.background_started_at(), Some(T0));
    }

    let h = Harness::new(
        LifecyclePhase::Background,
        true,
        Box::new(SledStore::open(&path).unwrap()),
    );
    h.emit_at(T0 + 2000, LifecyclePhase::Active);
    assert_eq!(h.lock_count(), 0);
    assert_eq!(h.handle.background_started_at(), None);
}
