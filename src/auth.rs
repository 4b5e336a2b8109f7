//! Session types and credential checks.
//!
//! The async login/signup flows live on [`crate::app::App`]; this module
//! holds the state machine, the in-memory session record, and the pure
//! lookups they share.

use thiserror::Error;

use crate::types::User;

/// Where the auth state machine currently is.
///
/// `Authenticating` covers the simulated-latency suspension inside login
/// and signup; hosts should disable auth inputs while in it, since a
/// second action issued mid-suspension is not guarded against here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated,
}

/// In-memory record of who is logged in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub is_logged_in: bool,
    pub user_name: String,
}

/// Authentication failures, surfaced as transient notifications.
///
/// Deliberately generic: no field-level detail leaks which part of the
/// credentials was wrong.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailTaken,
}

/// Find the user matching both email and password exactly.
pub fn find_user<'a>(users: &'a [User], email: &str, password: &str) -> Option<&'a User> {
    users
        .iter()
        .find(|u| u.email == email && u.password == password)
}

/// Whether an email is already registered.
pub fn email_taken(users: &[User], email: &str) -> bool {
    users.iter().any(|u| u.email == email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, password: &str) -> User {
        User {
            id: 1700000000000,
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            created_at: "2026-08-23T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_find_user_requires_exact_match() {
        let users = vec![user("Ada", "a@b.com", "secret1")];

        assert!(find_user(&users, "a@b.com", "secret1").is_some());
        assert!(find_user(&users, "a@b.com", "wrong00").is_none());
        assert!(find_user(&users, "other@b.com", "secret1").is_none());
        assert!(find_user(&users, "A@B.COM", "secret1").is_none());
    }

    #[test]
    fn test_email_taken() {
        let users = vec![user("Ada", "a@b.com", "secret1")];
        assert!(email_taken(&users, "a@b.com"));
        assert!(!email_taken(&users, "b@c.com"));
    }

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(AuthError::EmailTaken.to_string(), "Email already registered");
    }
}
