//! Wallet / auth session, threaded explicitly through the composer.

/// Whether the backend has accepted the connected account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Unauthenticated,
    Authenticated,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Disconnected,
    Connected { address: String, auth: AuthStatus },
}

impl Session {
    pub fn connected(address: impl Into<String>) -> Self {
        Session::Connected {
            address: address.into(),
            auth: AuthStatus::Unauthenticated,
        }
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            Session::Connected { address, .. } => Some(address),
            Session::Disconnected => None,
        }
    }

    pub fn auth_status(&self) -> Option<AuthStatus> {
        match self {
            Session::Connected { auth, .. } => Some(*auth),
            Session::Disconnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Session::Connected { .. })
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_status() == Some(AuthStatus::Authenticated)
    }

    /// Mark `address` authenticated. Ignored if another account is connected.
    pub(crate) fn authenticate(&mut self, for_address: &str) -> bool {
        match self {
            Session::Connected { address, auth } if address == for_address => {
                *auth = AuthStatus::Authenticated;
                true
            }
            _ => false,
        }
    }
}
