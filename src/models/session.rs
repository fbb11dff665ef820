//! Persisted session state.
//!
//! A session is created by `login`, read by every user-facing command and
//! removed by `logout`. The expand toggle for the assignments view lives
//! here so it stays sticky across invocations until explicitly collapsed.

use crate::errors::{AppError, AppResult};
use crate::models::identity::{Identity, Role};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub email: String,
    pub role: Role,
    pub display_name: String,
    #[serde(default)]
    pub show_all: bool,
}

impl SessionState {
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            email: identity.email.clone(),
            role: identity.role,
            display_name: identity.display_name.clone(),
            show_all: false,
        }
    }

    pub fn identity(&self) -> Identity {
        Identity {
            email: self.email.clone(),
            role: self.role,
            display_name: self.display_name.clone(),
        }
    }

    /// Load the session file, or None when nobody is logged in.
    pub fn load(path: &Path) -> AppResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let state = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("invalid session file: {}", e)))?;
        Ok(Some(state))
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize session: {}", e)))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Remove the session file. Removing a missing file is not an error.
    pub fn clear(path: &Path) -> AppResult<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
