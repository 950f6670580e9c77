//! Terminal rendition of the login form.

use incops_core::{LoginView, Page, SubmitState};

pub struct TerminalView {
    submit: SubmitState,
    test_credentials: Option<(String, String)>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            submit: SubmitState::default(),
            test_credentials: None,
        }
    }

    /// The pair offered by the test-credentials control, if one was added
    pub fn test_credentials(&self) -> Option<(String, String)> {
        self.test_credentials.clone()
    }
}

impl LoginView for TerminalView {
    fn alert(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn submit_state(&self) -> SubmitState {
        self.submit.clone()
    }

    fn set_submit_state(&mut self, state: SubmitState) {
        if !state.enabled {
            eprintln!("{}", state.label);
        }
        self.submit = state;
    }

    fn navigate(&mut self, page: Page) {
        println!("-> {}", page.path());
    }

    fn has_test_credentials_control(&self) -> bool {
        self.test_credentials.is_some()
    }

    fn add_test_credentials_control(&mut self, email: &str, password: &str) {
        self.test_credentials = Some((email.to_string(), password.to_string()));
    }
}
