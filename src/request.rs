use std::fmt;

use serde::{Deserialize, Serialize};

/// Role held by a dashboard user.
///
/// Read from storage on every request, never from the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Blanket access to every resource
    Admin,
    /// Access to owned resources only
    Standard,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Standard => write!(f, "standard"),
        }
    }
}

/// An authenticated dashboard user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Unique identifier for this principal
    pub id: i64,
    /// Display name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Stored role
    pub role: Role,
}

impl Principal {
    /// Returns true if this principal holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
