use serde::{Deserialize, Serialize};

/// Account-level role granted at registration or by an administrator.
///
/// The wire format uses the backend's `ROLE_` prefix; the enum drops it.
/// A session's role set is fixed for its lifetime - privilege changes
/// require a fresh login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_LEADER")]
    Leader,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "User"),
            Role::Leader => write!(f, "Leader"),
            Role::Admin => write!(f, "Admin"),
        }
    }
}
