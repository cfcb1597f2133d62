//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::{User, UserPatch};

// ============================================================================
// User
// ============================================================================

/// User record as returned by GET /users, GET and PATCH /users/{username}
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub date_joined: String,
    pub location: String,
    pub age: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            date_joined: user.date_joined,
            location: user.location,
            age: user.age,
        }
    }
}

// ============================================================================
// List
// ============================================================================

/// Query for GET /users
///
/// `limit` is kept raw so that bad values surface as field errors.
#[derive(Debug, Clone, Default)]
pub struct ListUsersQuery {
    pub limit: Option<String>,
}

impl ListUsersQuery {
    /// Collect from raw query pairs; a repeated `limit` keeps the last value
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let limit = pairs
            .into_iter()
            .filter(|(key, _)| key == "limit")
            .map(|(_, value)| value)
            .last();
        Self { limit }
    }
}

// ============================================================================
// Create
// ============================================================================

/// Request for POST /users
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub date_joined: String,
    pub location: String,
    pub age: i64,
}

/// Response for POST /users
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserResponse {
    pub message: String,
}

impl CreateUserResponse {
    pub fn created(username: &str) -> Self {
        Self {
            message: format!("User {} created", username),
        }
    }
}

// ============================================================================
// Update
// ============================================================================

/// Request for PATCH /users/{username}
///
/// Absent and `null` both leave the field unchanged. A `username` key is
/// ignored like any other unknown key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub date_joined: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            date_joined: req.date_joined,
            location: req.location,
            age: req.age,
        }
    }
}
