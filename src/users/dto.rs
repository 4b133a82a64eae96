use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::users::repo::User;

/// Request body for `POST /api/users`.
///
/// Fields are optional at the wire level; `validate` turns the payload into a [`NewUser`].
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A create payload that passed presence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.email)
    }
}

impl CreateUserRequest {
    pub fn validate(self) -> Result<NewUser, ApiError> {
        let name = required(self.name);
        let email = required(self.email);
        match (name, email) {
            (Some(name), Some(email)) => Ok(NewUser { name, email }),
            _ => Err(ApiError::Validation("Name and email are required".into())),
        }
    }
}

fn required(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    pub success: bool,
    pub data: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub data: User,
}
