//! Login flow and session lifecycle.
//!
//! `SessionClient` drives a login surface through the `LoginView` trait:
//! it validates input, calls the login endpoint, persists the resulting
//! `Session` in an injected `SessionStore`, and tells the view what to show
//! and where to go next. The view's submit control is put in a busy state
//! for the duration of a request and always restored afterwards.

use std::ops::{Deref, DerefMut};

use tracing::{debug, error, info, warn};

use crate::api::{ApiClient, ApiError};
use crate::auth::{Credentials, Session, SessionStore, SessionUser, TEST_CREDENTIALS};
use crate::config::{Config, DEFAULT_EMAIL_DOMAIN};

// ============================================================================
// Messages
// ============================================================================

pub const VALIDATION_MESSAGE: &str = "Please fill in all fields";

pub const CONNECTIVITY_MESSAGE: &str = "Cannot connect to server. Please check:\n\
     1. Backend is running\n\
     2. The API port is accessible\n\
     3. No firewall blocking";

/// Submit label while a login request is in flight
pub const BUSY_LABEL: &str = "Logging in...";

pub const DEFAULT_SUBMIT_LABEL: &str = "Log In";

/// Navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Entry,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard.html",
            Page::Entry => "index.html",
        }
    }
}

/// Label and enabled flag of the login form's submit control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitState {
    pub label: String,
    pub enabled: bool,
}

impl SubmitState {
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
        }
    }

    pub fn busy() -> Self {
        Self {
            label: BUSY_LABEL.to_string(),
            enabled: false,
        }
    }
}

impl Default for SubmitState {
    fn default() -> Self {
        Self::idle(DEFAULT_SUBMIT_LABEL)
    }
}

/// The surface a login form is rendered on.
pub trait LoginView {
    /// Show a blocking notification to the user
    fn alert(&mut self, message: &str);

    fn submit_state(&self) -> SubmitState;

    fn set_submit_state(&mut self, state: SubmitState);

    fn navigate(&mut self, page: Page);

    fn has_test_credentials_control(&self) -> bool;

    /// Offer a control that pre-fills the given pair into the form
    fn add_test_credentials_control(&mut self, email: &str, password: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// A field was empty; nothing was sent
    Invalid,
    LoggedIn(Session),
    /// The server answered with a non-2xx status
    Rejected(String),
    /// The request failed or its answer could not be used
    Unreachable,
}

/// Holds the view's submit control in the busy state and puts the original
/// state back when dropped.
struct BusySubmit<'a, V: LoginView> {
    view: &'a mut V,
    original: SubmitState,
}

impl<'a, V: LoginView> BusySubmit<'a, V> {
    fn engage(view: &'a mut V) -> Self {
        let original = view.submit_state();
        view.set_submit_state(SubmitState::busy());
        Self { view, original }
    }
}

impl<V: LoginView> Deref for BusySubmit<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        &*self.view
    }
}

impl<V: LoginView> DerefMut for BusySubmit<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        &mut *self.view
    }
}

impl<V: LoginView> Drop for BusySubmit<'_, V> {
    fn drop(&mut self) {
        let original = std::mem::take(&mut self.original);
        self.view.set_submit_state(original);
    }
}

pub struct SessionClient<S> {
    api: ApiClient,
    store: S,
    email_domain: String,
    verify_token: bool,
}

impl<S: SessionStore> SessionClient<S> {
    pub fn new(api: ApiClient, store: S) -> Self {
        Self {
            api,
            store,
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
            verify_token: true,
        }
    }

    pub fn from_config(config: &Config, store: S) -> Result<Self, ApiError> {
        let api = ApiClient::new(&config.api_base_url)?;
        Ok(Self::new(api, store)
            .with_email_domain(&config.default_email_domain)
            .with_token_check(config.verify_token_on_login))
    }

    /// Domain appended to emails that lack an `@`
    pub fn with_email_domain(mut self, domain: &str) -> Self {
        self.email_domain = domain.to_string();
        self
    }

    /// Whether a fresh token is probed against the profile endpoint
    pub fn with_token_check(mut self, enabled: bool) -> Self {
        self.verify_token = enabled;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Login
    // =========================================================================

    /// Handle a submit of the login form.
    ///
    /// Every outcome is reported through `view`; the return value is for
    /// callers that want to branch on it.
    pub async fn submit_login<V: LoginView>(
        &self,
        view: &mut V,
        email: &str,
        password: &str,
    ) -> LoginOutcome {
        let Some(credentials) = Credentials::from_form(email, password, &self.email_domain) else {
            view.alert(VALIDATION_MESSAGE);
            return LoginOutcome::Invalid;
        };

        // Restored on drop, including when this future is cancelled mid-request
        let mut busy = BusySubmit::engage(view);
        self.authenticate(&mut *busy, &credentials).await
    }

    async fn authenticate<V: LoginView>(&self, view: &mut V, credentials: &Credentials) -> LoginOutcome {
        info!(email = %credentials.email, "Sending login request");

        let response = match self.api.login(credentials).await {
            Ok(response) => response,
            Err(ApiError::Rejected(message)) => {
                warn!(%message, "Login rejected");
                view.alert(&format!("Login Failed: {}", message));
                return LoginOutcome::Rejected(message);
            }
            Err(e) => {
                if e.is_transport() {
                    error!(error = %e, "Login request failed");
                } else {
                    error!(error = %e, "Unexpected login error");
                }
                view.alert(CONNECTIVITY_MESSAGE);
                return LoginOutcome::Unreachable;
            }
        };

        let session = Session::new(response.token, response.user);
        if let Err(e) = self.store.write(&session) {
            error!(error = %e, "Failed to save session");
            view.alert(CONNECTIVITY_MESSAGE);
            return LoginOutcome::Unreachable;
        }

        info!(
            username = %session.user.username,
            token_len = session.token.len(),
            "Login successful"
        );
        view.alert(&format!("Login Successful! Welcome {}", session.user.username));

        if self.verify_token {
            self.check_token(&session.token).await;
        }

        view.navigate(Page::Dashboard);
        LoginOutcome::LoggedIn(session)
    }

    /// Probe the profile endpoint with a fresh token. Only logs; never fails.
    async fn check_token(&self, token: &str) {
        let api = self.api.with_token(token.to_string());
        let task = tokio::spawn(async move {
            match api.profile_status().await {
                Ok(status) if status.is_success() => info!("Token accepted by protected API"),
                Ok(status) => debug!(%status, "Token check returned non-success status"),
                Err(e) => warn!(error = %e, "Token check failed, continuing"),
            }
        });

        if let Err(e) = task.await {
            debug!(error = %e, "Token check task did not complete");
        }
    }

    // =========================================================================
    // Session access
    // =========================================================================

    /// The stored session, if one exists and has not expired.
    /// Expired or unreadable sessions are cleared.
    pub fn current_session(&self) -> Option<Session> {
        let session = match self.store.read() {
            Ok(session) => session?,
            Err(e) => {
                warn!(error = %e, "Discarding unreadable session");
                self.discard();
                return None;
            }
        };

        if session.is_expired() {
            info!(username = %session.user.username, "Token expired");
            self.discard();
            return None;
        }
        Some(session)
    }

    fn discard(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear session");
        }
    }

    /// Bearer token for API calls, or `None` when logged out or expired
    pub fn get_auth_token(&self) -> Option<String> {
        self.current_session().map(|s| s.token)
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.current_session().map(|s| s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }

    /// API client carrying the current bearer token
    pub fn authorized_api(&self) -> Option<ApiClient> {
        self.get_auth_token().map(|token| self.api.with_token(token))
    }

    /// Clear the session and return to the entry page. Safe without a session.
    pub fn logout<V: LoginView>(&self, view: &mut V) -> anyhow::Result<()> {
        let result = self.store.clear();
        if result.is_ok() {
            info!("Logged out");
        }
        view.navigate(Page::Entry);
        result
    }

    /// Prepare a freshly shown login page.
    ///
    /// Adds the test-credentials control if missing and logs whether a
    /// session already exists. An existing session does not redirect.
    pub fn page_loaded<V: LoginView>(&self, view: &mut V) {
        if !view.has_test_credentials_control() {
            let (email, password) = TEST_CREDENTIALS;
            view.add_test_credentials_control(email, password);
        }

        match self.current_session() {
            Some(session) => debug!(
                username = %session.user.username,
                minutes_left = session.minutes_until_expiry(),
                "User already logged in"
            ),
            None => debug!("No active session"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{FileSessionStore, MemorySessionStore};
    use chrono::{Duration, Utc};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Default)]
    struct RecordingView {
        alerts: Vec<String>,
        submit: SubmitState,
        submit_history: Vec<SubmitState>,
        pages: Vec<Page>,
        test_credentials: Option<(String, String)>,
    }

    impl RecordingView {
        fn with_label(label: &str) -> Self {
            Self {
                submit: SubmitState::idle(label),
                ..Self::default()
            }
        }
    }

    impl LoginView for RecordingView {
        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }

        fn submit_state(&self) -> SubmitState {
            self.submit.clone()
        }

        fn set_submit_state(&mut self, state: SubmitState) {
            self.submit_history.push(state.clone());
            self.submit = state;
        }

        fn navigate(&mut self, page: Page) {
            self.pages.push(page);
        }

        fn has_test_credentials_control(&self) -> bool {
            self.test_credentials.is_some()
        }

        fn add_test_credentials_control(&mut self, email: &str, password: &str) {
            self.test_credentials = Some((email.to_string(), password.to_string()));
        }
    }

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl SessionStore for ReadOnlyStore {
        fn read(&self) -> anyhow::Result<Option<Session>> {
            Ok(None)
        }

        fn write(&self, _session: &Session) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("storage is read-only"))
        }

        fn clear(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn client(uri: &str) -> SessionClient<MemorySessionStore> {
        SessionClient::new(ApiClient::new(uri).unwrap(), MemorySessionStore::new())
    }

    fn closed_port_uri() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    async fn mount_login(server: &MockServer, status: u16, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(server)
            .await;
    }

    async fn mount_profile(server: &MockServer, status: u16, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/api/profile"))
            .respond_with(ResponseTemplate::new(status))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    fn stored_session(expires_in: Duration) -> Session {
        let mut session = Session::new("stored".into(), SessionUser::new("ann"));
        session.expires_at = Utc::now() + expires_in;
        session
    }

    // -------------------------------------------------------------------------
    // submit_login
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_empty_fields_send_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client(&server.uri());
        for (email, password) in [("", "pw"), ("bob", ""), ("", "")] {
            let mut view = RecordingView::default();
            let outcome = client.submit_login(&mut view, email, password).await;

            assert_eq!(outcome, LoginOutcome::Invalid);
            assert_eq!(view.alerts, vec![VALIDATION_MESSAGE.to_string()]);
            assert!(view.submit_history.is_empty());
            assert!(view.pages.is_empty());
        }
        assert!(client.store().read().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_email_normalized_before_sending() {
        let server = MockServer::start().await;
        for email in ["bob@incops.dev", "carol@example.com"] {
            Mock::given(method("POST"))
                .and(path("/api/login"))
                .and(body_json(json!({"email": email, "password": "pw"})))
                .respond_with(
                    ResponseTemplate::new(401).set_body_json(json!({"error": "checked"})),
                )
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = client(&server.uri());
        let mut view = RecordingView::default();
        assert_eq!(
            client.submit_login(&mut view, "bob", "pw").await,
            LoginOutcome::Rejected("checked".into())
        );
        assert_eq!(
            client.submit_login(&mut view, "carol@example.com", "pw").await,
            LoginOutcome::Rejected("checked".into())
        );
    }

    #[tokio::test]
    async fn test_custom_email_domain() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({"email": "bob@corp.example", "password": "pw"})))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server.uri()).with_email_domain("corp.example");
        let mut view = RecordingView::default();
        let outcome = client.submit_login(&mut view, "bob", "pw").await;
        assert_eq!(outcome, LoginOutcome::Rejected("Unknown error".into()));
        assert_eq!(view.alerts, vec!["Login Failed: Unknown error".to_string()]);
    }

    #[tokio::test]
    async fn test_successful_login_persists_session() {
        let server = MockServer::start().await;
        mount_login(&server, 200, json!({"token": "t", "user": {"username": "bob"}})).await;
        Mock::given(method("GET"))
            .and(path("/api/profile"))
            .and(header("authorization", "Bearer t"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server.uri());
        let mut view = RecordingView::with_label("Sign in");

        let before = Utc::now().timestamp_millis();
        let outcome = client.submit_login(&mut view, "bob", "pw").await;
        let after = Utc::now().timestamp_millis();

        assert!(matches!(outcome, LoginOutcome::LoggedIn(_)));
        let stored = client.store().read().unwrap().unwrap();
        assert_eq!(stored.token, "t");
        assert_eq!(serde_json::to_value(&stored.user).unwrap(), json!({"username": "bob"}));

        let expiry = stored.expires_at.timestamp_millis();
        assert!(expiry >= before + 86_400_000);
        assert!(expiry <= after + 86_400_000);

        assert_eq!(view.pages, vec![Page::Dashboard]);
        assert_eq!(view.alerts, vec!["Login Successful! Welcome bob".to_string()]);
        assert_eq!(
            view.submit_history,
            vec![SubmitState::busy(), SubmitState::idle("Sign in")]
        );
        assert_eq!(view.submit, SubmitState::idle("Sign in"));
    }

    #[tokio::test]
    async fn test_failed_token_check_does_not_affect_login() {
        let server = MockServer::start().await;
        mount_login(&server, 200, json!({"token": "t", "user": {"username": "bob"}})).await;
        mount_profile(&server, 500, 1).await;

        let client = client(&server.uri());
        let mut view = RecordingView::default();
        let outcome = client.submit_login(&mut view, "bob", "pw").await;

        assert!(matches!(outcome, LoginOutcome::LoggedIn(ref s) if s.token == "t"));
        assert_eq!(view.pages, vec![Page::Dashboard]);
        assert_eq!(client.get_auth_token().as_deref(), Some("t"));
    }

    #[tokio::test]
    async fn test_token_check_can_be_disabled() {
        let server = MockServer::start().await;
        mount_login(&server, 200, json!({"token": "t", "user": {"username": "bob"}})).await;
        mount_profile(&server, 200, 0).await;

        let client = client(&server.uri()).with_token_check(false);
        let mut view = RecordingView::default();
        let outcome = client.submit_login(&mut view, "bob", "pw").await;
        assert!(matches!(outcome, LoginOutcome::LoggedIn(_)));
    }

    #[tokio::test]
    async fn test_rejected_login_stores_nothing() {
        let server = MockServer::start().await;
        mount_login(&server, 401, json!({"error": "bad credentials"})).await;
        mount_profile(&server, 200, 0).await;

        let client = client(&server.uri());
        let mut view = RecordingView::default();
        let outcome = client.submit_login(&mut view, "bob", "wrong").await;

        assert_eq!(outcome, LoginOutcome::Rejected("bad credentials".into()));
        assert!(client.store().read().unwrap().is_none());
        assert_eq!(view.alerts.len(), 1);
        assert!(view.alerts[0].contains("bad credentials"));
        assert!(view.pages.is_empty());
        assert_eq!(view.submit, SubmitState::default());
        assert_eq!(view.submit_history.first(), Some(&SubmitState::busy()));
    }

    #[tokio::test]
    async fn test_rejection_keeps_existing_session() {
        let server = MockServer::start().await;
        mount_login(&server, 403, json!({"error": "locked"})).await;

        let existing = stored_session(Duration::hours(1));
        let client = SessionClient::new(
            ApiClient::new(&server.uri()).unwrap(),
            MemorySessionStore::with_session(existing.clone()),
        );
        let mut view = RecordingView::default();
        client.submit_login(&mut view, "bob", "pw").await;

        assert_eq!(client.store().read().unwrap(), Some(existing));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let client = client(&closed_port_uri());
        let mut view = RecordingView::with_label("Go");
        let outcome = client.submit_login(&mut view, "bob", "pw").await;

        assert_eq!(outcome, LoginOutcome::Unreachable);
        assert_eq!(view.alerts, vec![CONNECTIVITY_MESSAGE.to_string()]);
        assert!(client.store().read().unwrap().is_none());
        assert!(view.pages.is_empty());
        assert_eq!(view.submit, SubmitState::idle("Go"));
    }

    #[tokio::test]
    async fn test_cancelled_login_restores_submit_state() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"token": "t", "user": {"username": "bob"}}))
                    .set_delay(std::time::Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client = client(&server.uri());
        let mut view = RecordingView::with_label("Sign in");

        let result = tokio::time::timeout(
            std::time::Duration::from_millis(200),
            client.submit_login(&mut view, "bob", "pw"),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(view.submit, SubmitState::idle("Sign in"));
        assert_eq!(
            view.submit_history,
            vec![SubmitState::busy(), SubmitState::idle("Sign in")]
        );
        assert!(view.pages.is_empty());
        assert!(client.store().read().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_write_failure_is_treated_as_unreachable() {
        let server = MockServer::start().await;
        mount_login(&server, 200, json!({"token": "t", "user": {"username": "bob"}})).await;
        mount_profile(&server, 200, 0).await;

        let client = SessionClient::new(ApiClient::new(&server.uri()).unwrap(), ReadOnlyStore);
        let mut view = RecordingView::with_label("Sign in");
        let outcome = client.submit_login(&mut view, "bob", "pw").await;

        assert_eq!(outcome, LoginOutcome::Unreachable);
        assert_eq!(view.alerts, vec![CONNECTIVITY_MESSAGE.to_string()]);
        assert!(view.pages.is_empty());
        assert_eq!(view.submit, SubmitState::idle("Sign in"));
    }

    #[tokio::test]
    async fn test_unparseable_body_is_treated_as_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client(&server.uri());
        let mut view = RecordingView::default();
        let outcome = client.submit_login(&mut view, "bob", "pw").await;

        assert_eq!(outcome, LoginOutcome::Unreachable);
        assert_eq!(view.alerts, vec![CONNECTIVITY_MESSAGE.to_string()]);
        assert_eq!(view.submit, SubmitState::default());
    }

    // -------------------------------------------------------------------------
    // Session access
    // -------------------------------------------------------------------------

    #[test]
    fn test_expired_session_is_cleared() {
        let client = SessionClient::new(
            ApiClient::new("http://localhost:3001").unwrap(),
            MemorySessionStore::with_session(stored_session(-Duration::seconds(1))),
        );

        assert_eq!(client.get_auth_token(), None);
        assert!(client.store().read().unwrap().is_none());
    }

    #[test]
    fn test_live_session_returns_token() {
        let session = stored_session(Duration::hours(2));
        let client = SessionClient::new(
            ApiClient::new("http://localhost:3001").unwrap(),
            MemorySessionStore::with_session(session.clone()),
        );

        assert_eq!(client.get_auth_token().as_deref(), Some("stored"));
        assert_eq!(client.current_user().map(|u| u.username).as_deref(), Some("ann"));
        assert!(client.is_authenticated());
        assert!(client.authorized_api().is_some());
        assert_eq!(client.store().read().unwrap(), Some(session));
    }

    #[test]
    fn test_unreadable_session_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().to_path_buf());
        std::fs::write(store.path(), "garbage").unwrap();
        let path = store.path();

        let client = SessionClient::new(ApiClient::new("http://localhost:3001").unwrap(), store);
        assert_eq!(client.get_auth_token(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_no_session() {
        let client = client("http://localhost:3001");
        assert_eq!(client.get_auth_token(), None);
        assert!(client.current_user().is_none());
        assert!(!client.is_authenticated());
        assert!(client.authorized_api().is_none());
    }

    // -------------------------------------------------------------------------
    // logout / page_loaded
    // -------------------------------------------------------------------------

    #[test]
    fn test_logout_clears_and_navigates() {
        let client = SessionClient::new(
            ApiClient::new("http://localhost:3001").unwrap(),
            MemorySessionStore::with_session(stored_session(Duration::hours(1))),
        );
        let mut view = RecordingView::default();

        client.logout(&mut view).unwrap();
        assert!(client.store().read().unwrap().is_none());
        assert_eq!(view.pages, vec![Page::Entry]);

        // Again, with nothing stored
        client.logout(&mut view).unwrap();
        assert_eq!(view.pages, vec![Page::Entry, Page::Entry]);
    }

    #[test]
    fn test_page_loaded_offers_test_credentials_once() {
        let client = client("http://localhost:3001");
        let mut view = RecordingView::default();

        client.page_loaded(&mut view);
        assert_eq!(
            view.test_credentials,
            Some(("admin".to_string(), "password123".to_string()))
        );

        view.test_credentials = Some(("kept".into(), "kept".into()));
        client.page_loaded(&mut view);
        assert_eq!(view.test_credentials, Some(("kept".into(), "kept".into())));
    }

    #[test]
    fn test_page_loaded_does_not_redirect_when_logged_in() {
        let client = SessionClient::new(
            ApiClient::new("http://localhost:3001").unwrap(),
            MemorySessionStore::with_session(stored_session(Duration::hours(1))),
        );
        let mut view = RecordingView::default();

        client.page_loaded(&mut view);
        assert!(view.pages.is_empty());
        assert!(view.alerts.is_empty());
    }

    #[test]
    fn test_page_paths() {
        assert_eq!(Page::Dashboard.path(), "dashboard.html");
        assert_eq!(Page::Entry.path(), "index.html");
    }
}
