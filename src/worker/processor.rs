use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    common::{
        clock::{Clock, ManualClock, SystemClock},
        event::AppEvent,
    },
    domain::{ledger::Ledger, route::NavigationRecord},
    services::{identity::SessionState, navigation::StackNavigator},
    worker::{
        handlers::{session, transaction},
        lifecycle_bus::LifecycleBus,
    },
};

/// Replays app events against the ledger and the shell collaborators.
///
/// Lifecycle events go through the bus, so whatever is subscribed to it
/// (normally the inactivity monitor) sees them exactly as it would see OS
/// callbacks.
pub struct Processor {
    clock: Rc<ManualClock>,
    wall_clock: SystemClock,
    session: Rc<SessionState>,
    navigator: Rc<RefCell<StackNavigator>>,
    bus: LifecycleBus,
    navigations: Vec<NavigationRecord>,
}

impl Processor {
    pub fn new(
        clock: Rc<ManualClock>,
        session: Rc<SessionState>,
        navigator: Rc<RefCell<StackNavigator>>,
        bus: LifecycleBus,
    ) -> Self {
        Self {
            clock,
            wall_clock: SystemClock,
            session,
            navigator,
            bus,
            navigations: Vec::new(),
        }
    }

    pub fn bus(&self) -> &LifecycleBus {
        &self.bus
    }

    pub fn navigations(&self) -> &[NavigationRecord] {
        &self.navigations
    }

    pub fn process(&mut self, ledger: &mut Ledger, event: AppEvent) {
        let seen = self.navigator.borrow().history().len();

        match event {
            AppEvent::Lifecycle { at, phase } => {
                self.stamp(at);
                self.bus.emit(phase);
            }
            AppEvent::SignIn { at } => {
                self.stamp(at);
                self.session.sign_in();
                session::handle(self.session.as_ref(), &mut *self.navigator.borrow_mut());
            }
            AppEvent::SignOut { at } => {
                self.stamp(at);
                self.session.sign_out();
                session::handle(self.session.as_ref(), &mut *self.navigator.borrow_mut());
            }
            AppEvent::Transaction(tx) => transaction::handle(ledger, tx),
            AppEvent::Clear => transaction::clear(ledger),
        }

        let at = self.clock.now_millis();
        let navigator = self.navigator.borrow();
        for route in &navigator.history()[seen..] {
            log::info!("navigated to {route} at {at}");
            self.navigations.push(NavigationRecord { at, route: *route });
        }
    }

    /// Moves the replay clock to the event's time, or to wall-clock time if it has none.
    fn stamp(&self, at: Option<i64>) {
        let at = at.unwrap_or_else(|| self.wall_clock.now_millis());
        self.clock.set(at);
    }
}
