//! Shared validation rules for the login, signup, and ticket forms.
//!
//! Validators are pure: they map a form to a field-keyed error map and
//! never mutate or throw. An empty map means the form is valid.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::types::{TicketPriority, TicketStatus};

/// Minimum password length for login and signup.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum ticket title length (in characters).
pub const MIN_TITLE_LENGTH: usize = 3;

/// Minimum ticket description length (in characters).
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

// Matches local@domain.tld with no whitespace and exactly one '@'.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Field name → error message, ordered by field name.
///
/// Returned by every validator; the rendering layer surfaces each message
/// inline next to the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Backing form for both the create and edit ticket modals.
///
/// `id` is `None` while creating and carries the edited ticket's id once
/// the edit modal has been opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketForm {
    pub id: Option<u64>,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
}

/// Check an email address against the shared pattern.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate the login form. Empty result iff valid.
pub fn validate_login(form: &LoginForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(&form.email) {
        errors.insert("email", "Please enter a valid email address");
    }

    if form.password.is_empty() {
        errors.insert("password", "Password is required");
    } else if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert("password", "Password must be at least 6 characters");
    }

    errors
}

/// Validate the signup form. Empty result iff valid.
pub fn validate_signup(form: &SignupForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.name.is_empty() {
        errors.insert("name", "Full name is required");
    }

    if form.email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(&form.email) {
        errors.insert("email", "Please enter a valid email address");
    }

    if form.password.is_empty() {
        errors.insert("password", "Password is required");
    } else if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert("password", "Password must be at least 6 characters");
    }

    if form.confirm_password.is_empty() {
        errors.insert("confirmPassword", "Please confirm your password");
    } else if form.confirm_password != form.password {
        errors.insert("confirmPassword", "Passwords do not match");
    }

    errors
}

/// Validate the ticket form. Empty result iff valid.
pub fn validate_ticket(form: &TicketForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.title.is_empty() {
        errors.insert("title", "Title is required");
    } else if form.title.chars().count() < MIN_TITLE_LENGTH {
        errors.insert("title", "Title must be at least 3 characters");
    }

    if form.description.is_empty() {
        errors.insert("description", "Description is required");
    } else if form.description.chars().count() < MIN_DESCRIPTION_LENGTH {
        errors.insert("description", "Description must be at least 10 characters");
    }

    errors
}
