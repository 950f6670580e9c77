//! Authentication types and session persistence.
//!
//! This module provides:
//! - `Credentials`: per-attempt login input with email normalization
//! - `Session`: the persisted record of a successful login, valid for 24 hours
//! - `SessionStore`: the storage capability sessions are read from and written to

pub mod credentials;
pub mod session;
pub mod store;

pub use credentials::{normalize_email, Credentials, TEST_CREDENTIALS};
pub use session::{Session, SessionUser, SESSION_TTL_HOURS};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, SESSION_KEY};
