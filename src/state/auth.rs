//! Auth-session state for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell reads this to decide between the login page and the rest of
//! the UI; every API call takes its bearer token from here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::LoginResponse;

/// Identity and token returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub email: String,
    pub name: String,
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self { token: resp.token, user_id: resp.user_id, email: resp.email, name: resp.name }
    }
}

/// Authentication state tracking the current session and login progress.
///
/// The token lives in memory only; a reload signs the user out.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn sign_in(&mut self, resp: LoginResponse) {
        self.session = Some(resp.into());
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        self.loading = false;
    }

    /// Raw token for `Authorization: Bearer`, when signed in.
    pub fn bearer(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }
}
