use crate::{
    domain::route::Route,
    services::{identity::IdentityProvider, navigation::Navigator},
};

/// Where the root layout should send the user, if anywhere.
pub fn route_guard(is_loaded: bool, is_signed_in: bool, current: Route) -> Option<Route> {
    if !is_loaded {
        return None;
    }

    let in_auth_group = current.is_authenticated();
    if is_signed_in && !in_auth_group {
        Some(Route::Home)
    } else if !is_signed_in && in_auth_group {
        Some(Route::Root)
    } else {
        None
    }
}

/// Applies the guard after the identity provider's session state changed.
pub fn handle(identity: &dyn IdentityProvider, navigator: &mut dyn Navigator) -> Option<Route> {
    let target = route_guard(
        identity.is_loaded(),
        identity.is_signed_in(),
        navigator.current(),
    )?;
    log::info!("session changed, redirecting to {target}");
    navigator.replace(target);
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{identity::SessionState, navigation::StackNavigator};

    #[test]
    fn guard_waits_for_identity_provider() {
        assert_eq!(route_guard(false, true, Route::Root), None);
        assert_eq!(route_guard(false, false, Route::Lock), None);
    }

    #[test]
    fn signed_in_outside_auth_group_goes_home() {
        assert_eq!(route_guard(true, true, Route::Root), Some(Route::Home));
        assert_eq!(route_guard(true, true, Route::Home), None);
        assert_eq!(route_guard(true, true, Route::Lock), None);
    }

    #[test]
    fn signed_out_inside_auth_group_goes_to_root() {
        assert_eq!(route_guard(true, false, Route::Home), Some(Route::Root));
        assert_eq!(route_guard(true, false, Route::Lock), Some(Route::Root));
        assert_eq!(route_guard(true, false, Route::Root), None);
    }

    #[test]
    fn handle_does_nothing_before_session_loads() {
        let session = SessionState::new(false, true);
        let mut nav = StackNavigator::default();

        assert_eq!(handle(&session, &mut nav), None);
        assert!(nav.history().is_empty());
    }

    #[test]
    fn handle_replaces_stack() {
        let session = SessionState::default();
        let mut nav = StackNavigator::default();

        session.sign_in();
        assert_eq!(handle(&session, &mut nav), Some(Route::Home));
        assert_eq!(handle(&session, &mut nav), None);

        session.sign_out();
        assert_eq!(handle(&session, &mut nav), Some(Route::Root));
        assert_eq!(nav.history(), &[Route::Home, Route::Root]);
    }
}
