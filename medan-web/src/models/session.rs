//! Process-wide authentication state.
//!
//! One yewdux store cell with exactly two transitions, [`Session::login`]
//! and [`Session::logout`]. The initial state is read from LocalStorage
//! once at startup and trusts a persisted token without re-validating it
//! against the backend; a stale or forged token is caught by the first
//! 401 a protected call produces.

use gloo_storage::{LocalStorage, Storage};
use yewdux::Store;

pub const TOKEN_KEY: &str = "token";
pub const EMAIL_KEY: &str = "userEmail";

/// The signed-in operator, as much of them as the console knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub email: String,
}

/// Authentication state cell.
///
/// Invariant: `is_authenticated() == token.is_some()`.
#[derive(Debug, Clone, PartialEq, Eq, Store)]
pub struct Session {
    pub user: Option<SessionUser>,
    pub token: Option<String>,
}

impl Default for Session {
    // The store is created once per process; seeding it from storage here
    // is the "read persisted credentials at startup" step.
    fn default() -> Self {
        Self::restore()
    }
}

impl Session {
    /// Rebuild the session from persisted storage.
    pub fn restore() -> Self {
        Self {
            user: stored_email().map(|email| SessionUser { email }),
            token: stored_token(),
        }
    }

    /// Whether a protected route may render.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Transition to logged-in, persisting both credential values.
    pub fn login(email: String, token: String) -> Self {
        let _ = LocalStorage::set(TOKEN_KEY, &token);
        let _ = LocalStorage::set(EMAIL_KEY, &email);
        Self {
            user: Some(SessionUser { email }),
            token: Some(token),
        }
    }

    /// Transition to logged-out, erasing the persisted values.
    pub fn logout() -> Self {
        clear_credentials();
        Self {
            user: None,
            token: None,
        }
    }
}

/// Persisted bearer token, when one exists.
pub fn stored_token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

/// Persisted operator email, when one exists.
pub fn stored_email() -> Option<String> {
    LocalStorage::get(EMAIL_KEY).ok()
}

/// Erase both persisted credential values.
///
/// Called by [`Session::logout`] and by the HTTP wrapper's 401 path.
pub fn clear_credentials() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(EMAIL_KEY);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Login followed by logout restores storage to the pre-login state
    #[wasm_bindgen_test]
    fn test_login_logout_round_trip() {
        clear_credentials();
        assert_eq!(stored_token(), None);
        assert_eq!(stored_email(), None);

        let session = Session::login("ops@medan.sy".to_string(), "t".repeat(32));
        assert!(session.is_authenticated());
        assert_eq!(stored_token(), Some("t".repeat(32)));
        assert_eq!(stored_email(), Some("ops@medan.sy".to_string()));

        let session = Session::logout();
        assert!(!session.is_authenticated());
        assert_eq!(stored_token(), None);
        assert_eq!(stored_email(), None);
    }

    /// Restore trusts whatever storage holds, without backend validation
    #[wasm_bindgen_test]
    fn test_restore_trusts_storage() {
        Session::login("ops@medan.sy".to_string(), "t".repeat(32));
        let restored = Session::restore();
        assert!(restored.is_authenticated());
        assert_eq!(
            restored.user,
            Some(SessionUser {
                email: "ops@medan.sy".to_string()
            })
        );
        clear_credentials();
        assert!(!Session::restore().is_authenticated());
    }
}
