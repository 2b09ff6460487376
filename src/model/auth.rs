use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role carried by an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Instructor,
    Student,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Instructor => write!(f, "instructor"),
            Role::Student => write!(f, "student"),
        }
    }
}

/// Login request for instructors, students and admins.
///
/// Both fields default to empty so a missing field reaches the handler and is
/// reported as missing credentials instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
}

/// The user bound to the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthUserDto {
    pub id: i32,
    pub name: String,
    pub role: Role,
}
