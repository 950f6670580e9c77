use serde::Serialize;

/// Fixed pair offered by the login surface to speed up manual testing.
/// Development convenience only; it carries no real secret.
pub const TEST_CREDENTIALS: (&str, &str) = ("admin", "password123");

/// Login credentials for a single submit attempt. Never persisted.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Build credentials from raw form input.
    ///
    /// Returns `None` when either field is empty. A bare username without
    /// `@` gets `@<default_domain>` appended.
    pub fn from_form(email: &str, password: &str, default_domain: &str) -> Option<Self> {
        if email.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self {
            email: normalize_email(email, default_domain),
            password: password.to_string(),
        })
    }
}

// Manual Debug so passwords stay out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"********")
            .finish()
    }
}

pub fn normalize_email(email: &str, default_domain: &str) -> String {
    if email.contains('@') {
        email.to_string()
    } else {
        format!("{}@{}", email, default_domain)
    }
}
