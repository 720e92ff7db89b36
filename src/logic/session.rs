use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Access;

/// Identity cached by a successful login: whoever the server said we are,
/// plus the bearer token it handed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: String,
    pub token: String,
}

impl Session {
    /// Role comparison is case-sensitive: only the exact string `Admin` counts.
    pub fn is_admin(&self) -> bool {
        self.role == "Admin"
    }
}

/// File-backed store for the one process-wide session.
///
/// Whole-file granularity: `save` overwrites unconditionally, each login
/// replaces the previous identity. Notes live in their own file (see
/// [`crate::logic::notes`]), so note commands can never clobber the session.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store under the platform config directory.
    pub fn open() -> anyhow::Result<Self> {
        let pd = ProjectDirs::from("com", "example", "ntc").context("no config dir")?;
        let dir = pd.config_dir();
        fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join("session.json"),
        })
    }

    /// Store rooted at an explicit directory.
    pub fn at(dir: &Path) -> Self {
        Self {
            path: dir.join("session.json"),
        }
    }

    /// Read the persisted session. A missing or unparseable file degrades to
    /// logged-out behavior rather than failing the command.
    pub fn load(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    pub fn save(&self, session: &Session) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

/// Gate a command on the locally cached session, before any request is built.
///
/// Returns the session to run with, or the message to print when the command
/// must not proceed.
pub fn authorize(access: Access, session: Option<Session>) -> Result<Option<Session>, &'static str> {
    match access {
        Access::Public => Ok(session),
        Access::LoggedIn => match session {
            Some(s) => Ok(Some(s)),
            None => Err("Not logged in: please run `ntc login` first"),
        },
        Access::Admin => match session {
            Some(s) if s.is_admin() => Ok(Some(s)),
            Some(_) => Err("This command requires an Admin account"),
            None => Err("Not logged in: please run `ntc login` first"),
        },
    }
}
