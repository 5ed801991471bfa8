use std::cell::Cell;

/// Session state owned by the external identity provider.
pub trait IdentityProvider {
    fn is_signed_in(&self) -> bool;
    fn is_loaded(&self) -> bool;
}

/// In-process session flags, flipped by sign-in/sign-out events.
#[derive(Debug, Default)]
pub struct SessionState {
    signed_in: Cell<bool>,
    loaded: Cell<bool>,
}

impl SessionState {
    pub fn new(loaded: bool, signed_in: bool) -> Self {
        Self {
            signed_in: Cell::new(signed_in),
            loaded: Cell::new(loaded),
        }
    }

    pub fn sign_in(&self) {
        self.loaded.set(true);
        self.signed_in.set(true);
    }

    pub fn sign_out(&self) {
        self.loaded.set(true);
        self.signed_in.set(false);
    }
}

impl IdentityProvider for SessionState {
    fn is_signed_in(&self) -> bool {
        self.signed_in.get()
    }

    fn is_loaded(&self) -> bool {
        self.loaded.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_and_out_mark_session_loaded() {
        let session = SessionState::default();
        assert!(!session.is_loaded());

        session.sign_in();
        assert!(session.is_loaded());
        assert!(session.is_signed_in());

        session.sign_out();
        assert!(session.is_loaded());
        assert!(!session.is_signed_in());
    }
}
