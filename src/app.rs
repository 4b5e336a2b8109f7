//! The application state object.
//!
//! One [`App`] owns everything the rendering layer binds to: the session,
//! the current user's tickets, the three forms with their error maps, and
//! the navigation state. Every user action is a `&mut self` method, so
//! there is exactly one mutator of any piece of state. The only suspension
//! point is the simulated remote-call latency inside [`App::login`] and
//! [`App::signup`].

use std::time::Duration;

use crate::auth::{self, AuthError, AuthState, Session};
use crate::id::IdGenerator;
use crate::storage::{KeyValueStore, StorageAdapter};
use crate::tickets::{
    PriorityFilter, RECENT_TICKET_COUNT, StatusFilter, TicketStats, TicketStore,
};
use crate::types::{SessionRecord, Ticket, User};
use crate::ui::{AppPage, AuthPage, Modal, Page, Toast, UiState};
use crate::utils::now_iso;
use crate::validation::{
    FieldErrors, LoginForm, SignupForm, TicketForm, validate_login, validate_signup,
};

/// Latency of the simulated remote call in the auth flows.
pub const DEFAULT_AUTH_LATENCY: Duration = Duration::from_millis(1000);

pub struct App<S: KeyValueStore> {
    storage: StorageAdapter<S>,
    auth_state: AuthState,
    session: Session,
    tickets: TicketStore,
    ui: UiState,
    toast: Option<Toast>,
    ids: IdGenerator,
    latency: Duration,

    // Form state, bound directly by the rendering layer.
    pub login_form: LoginForm,
    pub login_errors: FieldErrors,
    pub signup_form: SignupForm,
    pub signup_errors: FieldErrors,
    pub ticket_form: TicketForm,
    pub ticket_errors: FieldErrors,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(store: S) -> Self {
        Self::with_latency(store, DEFAULT_AUTH_LATENCY)
    }

    /// Build an app with an explicit auth latency. Tests pass
    /// `Duration::ZERO` to run the flows without suspending.
    pub fn with_latency(store: S, latency: Duration) -> Self {
        Self {
            storage: StorageAdapter::new(store),
            auth_state: AuthState::default(),
            session: Session::default(),
            tickets: TicketStore::new(),
            ui: UiState::default(),
            toast: None,
            ids: IdGenerator::new(),
            latency,
            login_form: LoginForm::default(),
            login_errors: FieldErrors::new(),
            signup_form: SignupForm::default(),
            signup_errors: FieldErrors::new(),
            ticket_form: TicketForm::default(),
            ticket_errors: FieldErrors::new(),
        }
    }

    /// Consume the app and hand the external store back to the host.
    pub fn into_store(self) -> S {
        self.storage.into_inner()
    }

    pub fn auth_state(&self) -> AuthState {
        self.auth_state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn tickets(&self) -> &TicketStore {
        &self.tickets
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    // ------------------------------------------------------------------
    // Startup
    // ------------------------------------------------------------------

    /// Resume a persisted session, if any, otherwise show the landing page.
    pub fn restore_session(&mut self) {
        match self.storage.load_session() {
            Some(record) => {
                self.enter_authenticated(record.name);
                self.load_user_tickets();
            }
            None => {
                self.ui.page = Page::Landing;
            }
        }
    }

    // ------------------------------------------------------------------
    // Auth flows
    // ------------------------------------------------------------------

    /// Log in with the current [`App::login_form`].
    ///
    /// Validation failures land in [`App::login_errors`] and return `false`
    /// without suspending. A credential mismatch surfaces a generic error
    /// toast and leaves the session anonymous.
    pub async fn login(&mut self) -> bool {
        self.login_errors = validate_login(&self.login_form);
        if !self.login_errors.is_empty() {
            return false;
        }

        self.begin_auth_request().await;
        let users = self.storage.load_users();
        let matched =
            auth::find_user(&users, &self.login_form.email, &self.login_form.password)
                .map(|u| u.name.clone());
        self.ui.loading = false;

        match matched {
            Some(name) => {
                self.enter_authenticated(name);
                self.load_user_tickets();
                self.toast = Some(Toast::success("Login successful!"));
                true
            }
            None => {
                tracing::debug!(email = %self.login_form.email, "login rejected");
                self.auth_state = AuthState::Anonymous;
                self.toast = Some(Toast::error(AuthError::InvalidCredentials.to_string()));
                false
            }
        }
    }

    /// Sign up with the current [`App::signup_form`].
    ///
    /// On success the new user is appended to the stored user list and the
    /// session enters `Authenticated` with an empty, persisted ticket
    /// collection. A duplicate email surfaces a generic error toast.
    pub async fn signup(&mut self) -> bool {
        self.signup_errors = validate_signup(&self.signup_form);
        if !self.signup_errors.is_empty() {
            return false;
        }

        self.begin_auth_request().await;
        let mut users = self.storage.load_users();

        if auth::email_taken(&users, &self.signup_form.email) {
            tracing::debug!(email = %self.signup_form.email, "signup rejected: email taken");
            self.auth_state = AuthState::Anonymous;
            self.ui.loading = false;
            self.toast = Some(Toast::error(AuthError::EmailTaken.to_string()));
            return false;
        }

        let user = User {
            id: self.ids.next_id(),
            name: self.signup_form.name.clone(),
            email: self.signup_form.email.clone(),
            password: self.signup_form.password.clone(),
            created_at: now_iso(),
        };
        let name = user.name.clone();
        users.push(user);
        self.storage.save_users(&users);
        self.ui.loading = false;

        self.enter_authenticated(name);
        self.tickets.clear();
        self.persist_tickets();
        self.toast = Some(Toast::success("Account created successfully!"));
        true
    }

    /// Clear the session in memory and in the store and return to landing.
    pub fn logout(&mut self) {
        tracing::debug!(user = %self.session.user_name, "session cleared");
        self.session = Session::default();
        self.auth_state = AuthState::Anonymous;
        self.storage.clear_session();
        self.tickets.clear();
        self.ui.page = Page::Landing;
        self.ui.auth_page = AuthPage::Login;
        self.reset_auth_forms();
        self.toast = Some(Toast::info("Logged out successfully"));
    }

    async fn begin_auth_request(&mut self) {
        self.ui.loading = true;
        self.auth_state = AuthState::Authenticating;
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn enter_authenticated(&mut self, user_name: String) {
        tracing::debug!(user = %user_name, "session established");
        self.session = Session {
            is_logged_in: true,
            user_name,
        };
        self.auth_state = AuthState::Authenticated;
        self.storage.save_session(&SessionRecord {
            name: self.session.user_name.clone(),
            login_time: now_iso(),
        });
        self.ui.page = Page::App;
        self.ui.app_page = AppPage::Dashboard;
    }

    fn load_user_tickets(&mut self) {
        let tickets = self
            .storage
            .load_tickets(&self.session.user_name)
            .unwrap_or_default();
        self.tickets.replace_all(tickets);
    }

    fn reset_auth_forms(&mut self) {
        self.login_form = LoginForm::default();
        self.signup_form = SignupForm::default();
        self.login_errors.clear();
        self.signup_errors.clear();
    }

    // ------------------------------------------------------------------
    // Ticket flows
    // ------------------------------------------------------------------

    /// Create a ticket from [`App::ticket_form`]. On success the collection
    /// is persisted and the modal closed; on validation failure the errors
    /// land in [`App::ticket_errors`] and nothing changes.
    pub fn create_ticket(&mut self) -> bool {
        match self.tickets.create(&self.ticket_form, &mut self.ids, &now_iso()) {
            Ok(_) => {
                self.persist_tickets();
                self.close_modal();
                self.toast = Some(Toast::success("Ticket created successfully!"));
                true
            }
            Err(errors) => {
                self.ticket_errors = errors;
                false
            }
        }
    }

    /// Apply the edit in [`App::ticket_form`] to its ticket. A stale id is
    /// a silent no-op that keeps the modal open.
    pub fn update_ticket(&mut self) -> bool {
        match self.tickets.update(&self.ticket_form, &now_iso()) {
            Ok(true) => {
                self.persist_tickets();
                self.close_modal();
                self.toast = Some(Toast::success("Ticket updated successfully!"));
                true
            }
            Ok(false) => false,
            Err(errors) => {
                self.ticket_errors = errors;
                false
            }
        }
    }

    /// Delete a ticket. The host must have asked the user to confirm first.
    pub fn delete_ticket(&mut self, id: u64) -> bool {
        if self.tickets.remove(id) {
            self.persist_tickets();
            self.toast = Some(Toast::success("Ticket deleted successfully!"));
            true
        } else {
            false
        }
    }

    pub fn stats(&self) -> TicketStats {
        self.tickets.stats()
    }

    pub fn filtered_tickets(&self, status: StatusFilter, priority: PriorityFilter) -> Vec<&Ticket> {
        self.tickets.filtered(status, priority)
    }

    /// The dashboard's recent-tickets list.
    pub fn recent_tickets(&self) -> Vec<&Ticket> {
        self.tickets.recent(RECENT_TICKET_COUNT)
    }

    fn persist_tickets(&mut self) {
        self.storage
            .save_tickets(&self.session.user_name, self.tickets.all());
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Show the auth page with the given form. Clears stale form errors.
    pub fn switch_to_auth(&mut self, page: AuthPage) {
        self.ui.page = Page::Auth;
        self.ui.auth_page = page;
        self.login_errors.clear();
        self.signup_errors.clear();
    }

    /// Toggle between login and signup without leaving the auth page.
    pub fn switch_auth_page(&mut self, page: AuthPage) {
        self.ui.auth_page = page;
        self.login_errors.clear();
        self.signup_errors.clear();
    }

    /// Back to the landing page, dropping all auth form state.
    pub fn go_to_landing(&mut self) {
        self.ui.page = Page::Landing;
        self.reset_auth_forms();
    }

    pub fn go_to_app_page(&mut self, page: AppPage) {
        self.ui.app_page = page;
    }

    pub fn open_create_modal(&mut self) {
        self.ticket_form = TicketForm::default();
        self.ticket_errors.clear();
        self.ui.modal = Modal::Create;
    }

    /// Open the edit modal pre-filled from an existing ticket.
    pub fn open_edit_modal(&mut self, id: u64) -> bool {
        let Some(ticket) = self.tickets.get(id) else {
            return false;
        };
        self.ticket_form = TicketForm {
            id: Some(ticket.id),
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            status: ticket.status,
            priority: ticket.priority,
        };
        self.ticket_errors.clear();
        self.ui.modal = Modal::Edit;
        true
    }

    /// Close whichever modal is open and reset the ticket form.
    pub fn close_modal(&mut self) {
        self.ui.modal = Modal::None;
        self.ticket_form = TicketForm::default();
        self.ticket_errors.clear();
    }
}
