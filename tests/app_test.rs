//! End-to-end scenarios driving the application state object the way the
//! rendering layer would: fill a form, fire the action, read the state.

use std::time::Duration;

use ticflow::{
    App, AppPage, AuthPage, AuthState, MemoryStore, Modal, Page, PriorityFilter, SESSION_KEY,
    StatusFilter, TicketPriority, TicketStatus, ToastLevel, USERS_KEY,
};

fn new_app() -> App<MemoryStore> {
    App::with_latency(MemoryStore::new(), Duration::ZERO)
}

fn fill_signup(app: &mut App<MemoryStore>, name: &str, email: &str, password: &str) {
    app.signup_form.name = name.to_string();
    app.signup_form.email = email.to_string();
    app.signup_form.password = password.to_string();
    app.signup_form.confirm_password = password.to_string();
}

fn fill_login(app: &mut App<MemoryStore>, email: &str, password: &str) {
    app.login_form.email = email.to_string();
    app.login_form.password = password.to_string();
}

async fn signed_up_app() -> App<MemoryStore> {
    let mut app = new_app();
    fill_signup(&mut app, "Ada", "a@b.com", "secret1");
    assert!(app.signup().await);
    app
}

#[tokio::test]
async fn test_signup_authenticates_with_empty_tickets() {
    let app = signed_up_app().await;

    assert_eq!(app.auth_state(), AuthState::Authenticated);
    assert!(app.session().is_logged_in);
    assert_eq!(app.session().user_name, "Ada");
    assert!(app.tickets().is_empty());
    assert_eq!(app.ui().page, Page::App);
    assert_eq!(app.ui().app_page, AppPage::Dashboard);
    assert_eq!(app.toast().unwrap().message, "Account created successfully!");

    // User list and session mirror are in the external store.
    use ticflow::KeyValueStore;
    let store = app.into_store();
    assert!(store.get(USERS_KEY).is_some());
    assert!(store.get(SESSION_KEY).is_some());
}

#[tokio::test]
async fn test_signup_duplicate_email_rejected() {
    let mut app = signed_up_app().await;
    app.logout();

    fill_signup(&mut app, "Imposter", "a@b.com", "another1");
    assert!(!app.signup().await);

    assert_eq!(app.auth_state(), AuthState::Anonymous);
    let toast = app.toast().unwrap();
    assert_eq!(toast.message, "Email already registered");
    assert_eq!(toast.level, ToastLevel::Error);

    // No new user was appended: only the original credentials work.
    fill_login(&mut app, "a@b.com", "secret1");
    assert!(app.login().await);
    app.logout();
    fill_login(&mut app, "a@b.com", "another1");
    assert!(!app.login().await);
}

#[tokio::test]
async fn test_signup_validation_blocks_without_suspending() {
    let mut app = new_app();
    fill_signup(&mut app, "Ada", "a@b.com", "secret1");
    app.signup_form.confirm_password = "secret2".to_string();

    assert!(!app.signup().await);
    assert_eq!(app.auth_state(), AuthState::Anonymous);
    assert_eq!(
        app.signup_errors.get("confirmPassword"),
        Some("Passwords do not match")
    );
    assert!(app.toast().is_none());
}

#[tokio::test]
async fn test_login_wrong_password_stays_anonymous() {
    let mut app = signed_up_app().await;
    app.logout();
    app.dismiss_toast();

    fill_login(&mut app, "a@b.com", "wrong00");
    assert!(!app.login().await);

    assert_eq!(app.auth_state(), AuthState::Anonymous);
    assert!(!app.session().is_logged_in);
    assert_eq!(app.ui().page, Page::Landing);
    let toast = app.toast().unwrap();
    assert_eq!(toast.message, "Invalid email or password");
    assert_eq!(toast.level, ToastLevel::Error);
}

#[tokio::test]
async fn test_login_loads_the_users_tickets() {
    let mut app = signed_up_app().await;
    app.open_create_modal();
    app.ticket_form.title = "Bug".to_string();
    app.ticket_form.description = "Crashes on save".to_string();
    assert!(app.create_ticket());
    app.logout();

    fill_login(&mut app, "a@b.com", "secret1");
    assert!(app.login().await);

    assert_eq!(app.auth_state(), AuthState::Authenticated);
    assert_eq!(app.tickets().len(), 1);
    assert_eq!(app.tickets().all()[0].title, "Bug");
    assert_eq!(app.toast().unwrap().message, "Login successful!");
}

#[tokio::test]
async fn test_create_ticket_applies_defaults() {
    let mut app = signed_up_app().await;

    app.open_create_modal();
    assert_eq!(app.ui().modal, Modal::Create);
    app.ticket_form.title = "Bug".to_string();
    app.ticket_form.description = "Crashes on save".to_string();
    assert!(app.create_ticket());

    let ticket = &app.tickets().all()[0];
    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(ticket.priority, TicketPriority::Medium);
    assert_eq!(ticket.created_at, ticket.updated_at);

    // Success closes the modal and resets the form.
    assert_eq!(app.ui().modal, Modal::None);
    assert!(app.ticket_form.title.is_empty());
    assert_eq!(app.toast().unwrap().message, "Ticket created successfully!");
}

#[tokio::test]
async fn test_create_ticket_invalid_keeps_modal_and_store() {
    let mut app = signed_up_app().await;

    app.open_create_modal();
    app.ticket_form.title = "ab".to_string();
    app.ticket_form.description = "short".to_string();
    assert!(!app.create_ticket());

    assert!(app.tickets().is_empty());
    assert_eq!(app.ui().modal, Modal::Create);
    assert!(app.ticket_errors.get("title").is_some());
    assert!(app.ticket_errors.get("description").is_some());
}

#[tokio::test]
async fn test_edit_modal_prefills_and_update_persists() {
    let mut app = signed_up_app().await;
    app.open_create_modal();
    app.ticket_form.title = "Bug".to_string();
    app.ticket_form.description = "Crashes on save".to_string();
    assert!(app.create_ticket());
    let id = app.tickets().all()[0].id;

    assert!(app.open_edit_modal(id));
    assert_eq!(app.ui().modal, Modal::Edit);
    assert_eq!(app.ticket_form.id, Some(id));
    assert_eq!(app.ticket_form.title, "Bug");

    app.ticket_form.status = TicketStatus::Resolved;
    app.ticket_form.priority = TicketPriority::High;
    assert!(app.update_ticket());

    let ticket = app.tickets().get(id).unwrap();
    assert_eq!(ticket.status, TicketStatus::Resolved);
    assert_eq!(ticket.priority, TicketPriority::High);
    assert_eq!(app.ui().modal, Modal::None);
    assert_eq!(app.toast().unwrap().message, "Ticket updated successfully!");
}

#[tokio::test]
async fn test_update_with_stale_id_is_noop() {
    let mut app = signed_up_app().await;
    app.ticket_form.id = Some(12345);
    app.ticket_form.title = "Ghost".to_string();
    app.ticket_form.description = "Edited after deletion".to_string();

    assert!(!app.update_ticket());
    assert!(app.tickets().is_empty());
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let mut app = signed_up_app().await;
    for title in ["First bug", "Second bug", "Third bug"] {
        app.open_create_modal();
        app.ticket_form.title = title.to_string();
        app.ticket_form.description = "Crashes on save".to_string();
        assert!(app.create_ticket());
    }
    let victim = app.tickets().all()[1].id;

    assert!(app.delete_ticket(victim));
    let titles: Vec<&str> = app.tickets().all().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["First bug", "Third bug"]);
    assert_eq!(app.toast().unwrap().message, "Ticket deleted successfully!");

    assert!(!app.delete_ticket(victim));
}

#[tokio::test]
async fn test_filtered_and_recent_views() {
    let mut app = signed_up_app().await;
    for i in 0..6 {
        app.open_create_modal();
        app.ticket_form.title = format!("Ticket {i}");
        app.ticket_form.description = "A long enough description".to_string();
        if i % 2 == 0 {
            app.ticket_form.status = TicketStatus::Resolved;
        }
        assert!(app.create_ticket());
    }

    let open = app.filtered_tickets(
        StatusFilter::Status(TicketStatus::Open),
        PriorityFilter::All,
    );
    assert_eq!(open.len(), 3);
    assert!(open.iter().all(|t| t.status == TicketStatus::Open));

    let stats = app.stats();
    assert_eq!(stats.total, 6);
    assert_eq!(stats.open, 3);
    assert_eq!(stats.resolved, 3);
    assert_eq!(stats.in_progress, 0);

    assert_eq!(app.recent_tickets().len(), 5);
}

#[tokio::test]
async fn test_restore_session_resumes_across_restart() {
    let mut app = signed_up_app().await;
    app.open_create_modal();
    app.ticket_form.title = "Bug".to_string();
    app.ticket_form.description = "Crashes on save".to_string();
    assert!(app.create_ticket());
    let store = app.into_store();

    let mut restarted = App::with_latency(store, Duration::ZERO);
    restarted.restore_session();

    assert_eq!(restarted.auth_state(), AuthState::Authenticated);
    assert_eq!(restarted.session().user_name, "Ada");
    assert_eq!(restarted.tickets().len(), 1);
    assert_eq!(restarted.ui().page, Page::App);
}

#[tokio::test]
async fn test_restore_session_without_record_shows_landing() {
    let mut app = new_app();
    app.restore_session();
    assert_eq!(app.auth_state(), AuthState::Anonymous);
    assert_eq!(app.ui().page, Page::Landing);
}

#[tokio::test]
async fn test_logout_clears_session_and_forms() {
    let mut app = signed_up_app().await;
    fill_login(&mut app, "a@b.com", "secret1");
    app.logout();

    assert_eq!(app.auth_state(), AuthState::Anonymous);
    assert!(!app.session().is_logged_in);
    assert!(app.tickets().is_empty());
    assert_eq!(app.ui().page, Page::Landing);
    assert_eq!(app.ui().auth_page, AuthPage::Login);
    assert!(app.login_form.email.is_empty());
    assert!(app.signup_form.name.is_empty());
    let toast = app.toast().unwrap();
    assert_eq!(toast.message, "Logged out successfully");
    assert_eq!(toast.level, ToastLevel::Info);

    // The session mirror is gone, so a restart lands on the landing page.
    use ticflow::KeyValueStore;
    let store = app.into_store();
    assert!(store.get(SESSION_KEY).is_none());
}

#[tokio::test]
async fn test_navigation_clears_form_errors() {
    let mut app = new_app();
    fill_login(&mut app, "not-an-email", "x");
    assert!(!app.login().await);
    assert!(!app.login_errors.is_empty());

    app.switch_to_auth(AuthPage::Signup);
    assert_eq!(app.ui().page, Page::Auth);
    assert_eq!(app.ui().auth_page, AuthPage::Signup);
    assert!(app.login_errors.is_empty());

    fill_login(&mut app, "not-an-email", "x");
    assert!(!app.login().await);
    app.go_to_landing();
    assert!(app.login_errors.is_empty());
    assert!(app.login_form.email.is_empty());
}
