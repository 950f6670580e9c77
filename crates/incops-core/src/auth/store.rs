//! Persistence for the authenticated session.
//!
//! The whole session is one serialized record under a single key, so it is
//! written and cleared as a unit.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};

use super::Session;

/// Storage key for the serialized session
pub const SESSION_KEY: &str = "incops_session";

pub trait SessionStore: Send + Sync {
    fn read(&self) -> Result<Option<Session>>;
    fn write(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Session kept as a JSON file in a directory (normally the cache dir).
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", SESSION_KEY))
    }

    fn temp_path(&self) -> PathBuf {
        self.dir.join(format!(".{}.json.tmp", SESSION_KEY))
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self) -> Result<Option<Session>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path).context("Failed to read session file")?;
        let session = serde_json::from_str(&contents).context("Failed to parse session file")?;
        Ok(Some(session))
    }

    fn write(&self, session: &Session) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let contents = serde_json::to_string_pretty(session)?;

        // Rename over the old file so readers never see a partial session
        let temp = self.temp_path();
        std::fs::write(&temp, contents).context("Failed to write session file")?;
        std::fs::rename(&temp, self.path()).context("Failed to replace session file")?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        remove_if_exists(&self.path())?;
        remove_if_exists(&self.temp_path())
    }
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
    }
}

/// In-process store, used by tests and embedders without a filesystem.
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Session>> {
        // A panic while holding the lock cannot leave a half-written session
        self.session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> Result<Option<Session>> {
        Ok(self.slot().clone())
    }

    fn write(&self, session: &Session) -> Result<()> {
        *self.slot() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot() = None;
        Ok(())
    }
}
