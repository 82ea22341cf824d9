use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

record_id!(
    /// Type-safe identifier for Users.
    UserId,
    "user"
);

/// The requester's role, threaded explicitly through every visibility decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "faculty")]
    Faculty,
    #[serde(rename = "TA")]
    Ta,
    #[serde(rename = "student")]
    Student,
    /// Not logged in.
    #[serde(rename = "anonymous")]
    Anonymous,
}

impl Role {
    /// Role of a session, where `None` means nobody is logged in.
    ///
    /// Unknown role strings get the anonymous tier.
    pub fn from_session(status: Option<&str>) -> Self {
        status
            .and_then(|s| s.parse().ok())
            .unwrap_or(Role::Anonymous)
    }

    /// Admin, faculty and TA accounts see every approved resource.
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Admin | Role::Faculty | Role::Ta)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Faculty => "faculty",
            Role::Ta => "TA",
            Role::Student => "student",
            Role::Anonymous => "anonymous",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "faculty" => Ok(Role::Faculty),
            "TA" => Ok(Role::Ta),
            "student" => Ok(Role::Student),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Represents a registered account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: Role,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub user_name: String,
    pub email: String,
    pub role: Role,
}

impl UserCreate {
    pub fn new(user_name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_name: user_name.into(),
            email: email.into(),
            role,
        }
    }
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

/// Store filter for users.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub role: Option<Role>,
}
