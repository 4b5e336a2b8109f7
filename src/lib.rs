pub mod app;
pub mod auth;
pub mod error;
pub mod id;
pub mod storage;
pub mod tickets;
pub mod types;
pub mod ui;
pub mod utils;
pub mod validation;

pub use app::{App, DEFAULT_AUTH_LATENCY};
pub use auth::{AuthError, AuthState, Session};
pub use error::{Result, TicflowError};
pub use id::IdGenerator;
pub use storage::{
    KeyValueStore, MemoryStore, SESSION_KEY, StorageAdapter, USERS_KEY, tickets_key,
};
pub use tickets::{
    PriorityFilter, RECENT_TICKET_COUNT, StatusFilter, TicketStats, TicketStore,
};
pub use types::{
    SessionRecord, Ticket, TicketPriority, TicketStatus, User, VALID_PRIORITIES, VALID_STATUSES,
};
pub use ui::{AppPage, AuthPage, Modal, Page, Toast, ToastLevel, UiState};
pub use validation::{
    FieldErrors, LoginForm, SignupForm, TicketForm, validate_login, validate_signup,
    validate_ticket,
};
