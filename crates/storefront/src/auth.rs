//! Client-side authentication, insecure on purpose.
//!
//! Everything here runs on the player's side of the trust boundary. Login
//! compares SHA-256 digests of the supplied credentials against shipped
//! digests, then writes the resulting user record - role included - as plain
//! JSON under [`keys::USER`]. The gate later reads that record back and
//! believes whatever it says. Editing the stored record is the intended
//! solve, not a vulnerability report.

use gizmo_depot_core::Role;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::storage::{Storage, keys};

/// SHA-256 digest of the admin username, hex-encoded.
pub const ADMIN_USERNAME_HASH: &str =
    "8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918";

/// SHA-256 digest of the admin password, hex-encoded.
pub const ADMIN_PASSWORD_HASH: &str =
    "b0439fae31f3a93a0fea4e80e72d56e8a7108f4e8abadf698fc39097e8f009ae";

/// Hex-encoded SHA-256 digest of `input`.
#[must_use]
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// The credential digests a gate checks logins against.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username_hash: String,
    pub password_hash: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username_hash: ADMIN_USERNAME_HASH.to_string(),
            password_hash: ADMIN_PASSWORD_HASH.to_string(),
        }
    }
}

impl AdminCredentials {
    /// Build digests from plaintext credentials. Test seam.
    #[must_use]
    pub fn from_plaintext(username: &str, password: &str) -> Self {
        Self {
            username_hash: sha256_hex(username),
            password_hash: sha256_hex(password),
        }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        sha256_hex(username) == self.username_hash && sha256_hex(password) == self.password_hash
    }
}

/// The logged-in user record, persisted verbatim under [`keys::USER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    pub role: Role,
}

/// The fake admin gate.
///
/// Owns reads and writes of the persisted user record the same way the cart
/// store owns the cart blob. Reads soft-fail to "nobody logged in".
#[derive(Debug)]
pub struct AuthGate<S> {
    storage: S,
    credentials: AdminCredentials,
}

impl<S: Storage> AuthGate<S> {
    /// Create a gate with the shipped admin credential digests.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_credentials(storage, AdminCredentials::default())
    }

    /// Create a gate checking against specific credential digests.
    #[must_use]
    pub const fn with_credentials(storage: S, credentials: AdminCredentials) -> Self {
        Self {
            storage,
            credentials,
        }
    }

    /// Attempt a login. Never rejects.
    ///
    /// Matching admin credentials yield [`Role::Admin`]; anything else is a
    /// regular [`Role::User`]. Either way the record is persisted and the
    /// session is "established".
    pub fn login(&self, username: &str, password: &str) -> CurrentUser {
        let role = if self.credentials.matches(username, password) {
            Role::Admin
        } else {
            Role::User
        };

        let user = CurrentUser {
            username: username.to_string(),
            role,
        };
        self.persist(&user);
        user
    }

    fn persist(&self, user: &CurrentUser) {
        let raw = match serde_json::to_string(user) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "failed to serialize user record");
                return;
            }
        };
        if let Err(e) = self.storage.set(keys::USER, &raw) {
            warn!(error = %e, "failed to persist user record, login is in-memory only");
        }
    }

    /// The currently logged-in user, if the stored record parses.
    ///
    /// Missing or malformed state reads as "nobody logged in".
    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        let raw = match self.storage.get(keys::USER) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "failed to read user record");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "malformed user record, treating as logged out");
                None
            }
        }
    }

    /// Whether the stored record claims the admin role.
    ///
    /// This trusts client-writable state, which is the entire exercise.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current_user()
            .is_some_and(|user| user.role == Role::Admin)
    }

    /// Gate check for the admin-only pages: the original's redirect helper,
    /// minus the redirect. Callers bounce the user when this is false.
    #[must_use]
    pub fn require_admin(&self) -> bool {
        self.is_admin()
    }

    /// Log out by dropping the stored record.
    pub fn logout(&self) {
        if let Err(e) = self.storage.remove(keys::USER) {
            warn!(error = %e, "failed to remove user record on logout");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn gate() -> AuthGate<MemoryStorage> {
        AuthGate::with_credentials(
            MemoryStorage::new(),
            AdminCredentials::from_plaintext("admin", "hunter2"),
        )
    }

    #[test]
    fn test_sha256_hex_known_digest() {
        // The shipped username digest is sha256("admin").
        assert_eq!(sha256_hex("admin"), ADMIN_USERNAME_HASH);
    }

    #[test]
    fn test_admin_credentials_log_in_as_admin() {
        let gate = gate();
        let user = gate.login("admin", "hunter2");
        assert_eq!(user.role, Role::Admin);
        assert!(gate.is_admin());
        assert!(gate.require_admin());
    }

    #[test]
    fn test_other_credentials_log_in_as_user() {
        let gate = gate();
        let user = gate.login("mallory", "whatever");
        assert_eq!(user.role, Role::User);
        assert!(!gate.is_admin());

        // Right username, wrong password is still just a user.
        let user = gate.login("admin", "wrong");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_login_persists_and_logout_clears() {
        let storage = MemoryStorage::new();
        let gate = AuthGate::with_credentials(
            &storage,
            AdminCredentials::from_plaintext("admin", "hunter2"),
        );

        gate.login("alice", "pw");
        let user = gate.current_user().expect("logged in");
        assert_eq!(user.username, "alice");

        // A second gate over the same storage sees the session.
        let other = AuthGate::new(&storage);
        assert_eq!(other.current_user(), Some(user));

        gate.logout();
        assert!(gate.current_user().is_none());
        assert!(!gate.is_admin());
    }

    #[test]
    fn test_malformed_user_record_reads_as_logged_out() {
        let storage = MemoryStorage::new();
        storage.set(keys::USER, "not json").expect("seed");

        let gate = AuthGate::new(&storage);
        assert!(gate.current_user().is_none());
        assert!(!gate.is_admin());
    }

    #[test]
    fn test_forged_record_bypasses_the_gate() {
        // The intended solve: nobody logged in through login(), but the
        // storage is client-writable.
        let storage = MemoryStorage::new();
        storage
            .set(keys::USER, r#"{"username":"h4x0r","role":"admin"}"#)
            .expect("forge");

        let gate = AuthGate::new(&storage);
        assert!(gate.is_admin());
    }
}
