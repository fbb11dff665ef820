use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Admin,
    Regular,
}

impl Role {
    pub fn from_sheet_str(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            _ => Role::Regular,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Authenticated session identity. `email` carries the canonical casing
/// from the credential record, not whatever the user typed at login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub role: Role,
    pub display_name: String,
}

impl Identity {
    /// Name shown in greetings and headers.
    pub fn display(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.email
        } else {
            &self.display_name
        }
    }
}
