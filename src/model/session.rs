//! The authenticated client handle for the current run

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

/// Holds the API client once a code has been exchanged. There is no logout:
/// the first client set stays for the rest of the process.
#[derive(Debug)]
pub struct Session<C> {
    client: Option<C>,
}

impl<C> Default for Session<C> {
    fn default() -> Self {
        Self { client: None }
    }
}

impl<C> Session<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authenticated(client: C) -> Self {
        Self { client: Some(client) }
    }

    /// Returns `false`, leaving the existing client in place, if already set.
    pub fn set(&mut self, client: C) -> bool {
        if self.client.is_some() {
            return false;
        }
        self.client = Some(client);
        true
    }

    pub fn get(&self) -> Option<&C> {
        self.client.as_ref()
    }

    pub fn state(&self) -> AuthState {
        if self.client.is_some() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state() == AuthState::Authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_only_once() {
        let mut session = Session::new();
        assert_eq!(session.state(), AuthState::Unauthenticated);
        assert!(session.set("first"));
        assert!(!session.set("second"));
        assert_eq!(session.get(), Some(&"first"));
        assert!(session.is_authenticated());
    }
}
