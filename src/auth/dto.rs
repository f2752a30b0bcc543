use serde::{Deserialize, Serialize};

use crate::{
    auth::repo::User,
    error::{ApiError, ApiResult},
    validation::{is_valid_email, max_len, required, MAX_VARCHAR},
};

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
    }

    pub fn validate(&self) -> ApiResult<()> {
        required("name", &self.name)?;
        required("email", &self.email)?;
        required("password", &self.password)?;
        max_len("name", &self.name, MAX_VARCHAR)?;
        max_len("email", &self.email, MAX_VARCHAR)?;
        if !is_valid_email(&self.email) {
            return Err(ApiError::BadRequest("email is not a valid address".into()));
        }
        Ok(())
    }
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> ApiResult<()> {
        required("email", &self.email)?;
        required("password", &self.password)
    }
}

/// Public part of a user; also the expanded owner inside products and profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}
