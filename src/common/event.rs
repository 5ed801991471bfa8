use crate::domain::{phase::LifecyclePhase, transaction::Transaction};

/// An app event read from a replay script and dispatched by the processor.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The host OS reported a new lifecycle phase at `at` (epoch ms).
    /// Without a time the event happens "now" on the wall clock.
    Lifecycle {
        at: Option<i64>,
        phase: LifecyclePhase,
    },
    SignIn { at: Option<i64> },
    SignOut { at: Option<i64> },
    /// "Add money" on the home screen.
    Transaction(Transaction),
    /// "Exchange" on the home screen.
    Clear,
}
