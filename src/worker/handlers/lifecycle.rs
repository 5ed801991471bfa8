use crate::domain::phase::LifecyclePhase;

/// Side effect the inactivity monitor must perform for one lifecycle change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockAction {
    /// Store `now` as the moment the app went to the background.
    Persist(i64),
    NavigateToLock,
    Noop,
}

/// Decides what a single `previous -> next` lifecycle change means for the app lock.
///
/// A missing `stored_start` counts as `0`, so returning from the background
/// with nothing recorded measures idle time from the epoch and locks a
/// signed-in user.
///
/// # Examples
///
/// ```
/// use wallet_core::domain::phase::LifecyclePhase::{Active, Background};
/// use wallet_core::worker::handlers::lifecycle::{evaluate, LockAction};
///
/// assert_eq!(evaluate(Active, Background, 10_000, true, None, 3000), LockAction::Persist(10_000));
/// assert_eq!(evaluate(Background, Active, 14_000, true, Some(10_000), 3000), LockAction::NavigateToLock);
/// assert_eq!(evaluate(Background, Active, 12_000, true, Some(10_000), 3000), LockAction::Noop);
/// ```
pub fn evaluate(
    previous: LifecyclePhase,
    next: LifecyclePhase,
    now: i64,
    is_signed_in: bool,
    stored_start: Option<i64>,
    threshold_ms: i64,
) -> LockAction {
    match (previous, next) {
        (_, LifecyclePhase::Background) => LockAction::Persist(now),
        (LifecyclePhase::Background, LifecyclePhase::Active) => {
            let elapsed = now.saturating_sub(stored_start.unwrap_or(0));
            if elapsed > threshold_ms && is_signed_in {
                LockAction::NavigateToLock
            } else {
                LockAction::Noop
            }
        }
        _ => LockAction::Noop,
    }
}
