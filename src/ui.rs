//! Navigation and notification state.
//!
//! Pure data: transitions that also touch forms or storage live on
//! [`crate::app::App`]. Rendering, styling, and the toast auto-dismiss
//! timer are the host's concern.

/// Top-level page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    Auth,
    App,
}

/// Which auth form is showing while on [`Page::Auth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPage {
    #[default]
    Login,
    Signup,
}

/// Which view is showing while on [`Page::App`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPage {
    #[default]
    Dashboard,
    Tickets,
}

/// Modal overlay over the app pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    Create,
    Edit,
}

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// A transient notification message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self { message, level }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }
}

/// Which page, sub-page, and modal are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub page: Page,
    pub auth_page: AuthPage,
    pub app_page: AppPage,
    pub modal: Modal,
    /// True while an auth flow is inside its simulated-latency suspension.
    pub loading: bool,
}
