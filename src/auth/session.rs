use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Role;

/// Session file name in the state directory
const SESSION_FILE: &str = "session.json";

/// An authenticated session: the bearer token plus the role set it was
/// issued with. Absence of a session (the store holding `None`) is itself
/// meaningful - there is deliberately no "empty session" value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub roles: HashSet<Role>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(access_token: String, roles: HashSet<Role>) -> Self {
        Self {
            access_token,
            roles,
            created_at: Utc::now(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Session with the token replaced and everything else carried over.
    /// This is what a successful refresh produces: roles never change within
    /// one login's lifetime.
    pub fn with_token(&self, access_token: String) -> Self {
        Self {
            access_token,
            roles: self.roles.clone(),
            created_at: Utc::now(),
        }
    }
}

/// Process-wide source of truth for the current session.
///
/// `get`/`set`/`clear` are atomic with respect to concurrent readers: the
/// token and role set always change together, never one without the other.
/// The persisted copy on disk survives a restart but is only a cache - the
/// backend's refresh credential decides whether the session is actually
/// still alive.
pub struct SessionStore {
    state_dir: Option<PathBuf>,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Create a store persisting to `state_dir`, loading any session a
    /// previous run left behind.
    pub fn new(state_dir: PathBuf) -> Self {
        let store = Self {
            state_dir: Some(state_dir),
            current: RwLock::new(None),
        };
        match store.load_from_disk() {
            Ok(Some(session)) => {
                debug!("restored persisted session");
                *store.write_lock() = Some(session);
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "failed to load persisted session"),
        }
        store
    }

    /// Create a store with no disk persistence.
    pub fn in_memory() -> Self {
        Self {
            state_dir: None,
            current: RwLock::new(None),
        }
    }

    pub fn get(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn set(&self, session: Session) {
        if let Err(e) = self.persist(&session) {
            // Degrade to in-memory operation; never fail the login/refresh.
            warn!(error = %e, "failed to persist session");
        }
        *self.write_lock() = Some(session);
    }

    pub fn clear(&self) {
        *self.write_lock() = None;
        if let Some(path) = self.session_path() {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(&path) {
                    warn!(error = %e, "failed to remove persisted session");
                }
            }
        }
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Option<Session>> {
        self.current.write().unwrap_or_else(|e| e.into_inner())
    }

    fn session_path(&self) -> Option<PathBuf> {
        self.state_dir.as_ref().map(|d| d.join(SESSION_FILE))
    }

    fn load_from_disk(&self) -> Result<Option<Session>> {
        let Some(path) = self.session_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let contents =
            std::fs::read_to_string(&path).context("Failed to read session file")?;
        let session: Session =
            serde_json::from_str(&contents).context("Failed to parse session file")?;
        Ok(Some(session))
    }

    fn persist(&self, session: &Session) -> Result<()> {
        let Some(path) = self.session_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(session)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
