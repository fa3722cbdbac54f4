//! User models.
//!
//! Users are employees, evaluators and administrators of the evaluation
//! system; all of them are managed through `/users`.

use serde::{Deserialize, Serialize};

/// Role of a user in the evaluation workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Manages periods, criteria, templates and users.
    Admin,
    /// Scores evaluations assigned to them.
    Evaluator,
    /// Is evaluated.
    Employee,
}

impl Role {
    /// Path segment used by `/references/users/{role}`.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Evaluator => "evaluator",
            Role::Employee => "employee",
        }
    }
}

/// A user as returned by `/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Workflow role.
    pub role: Role,
    /// Whether the account is enabled.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Payload for `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Full name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Workflow role.
    pub role: Role,
}

/// Payload for `PUT /users/{id}`; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Enable or disable the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Payload for `POST /users/{id}/reset-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    /// The replacement password.
    pub new_password: String,
}
