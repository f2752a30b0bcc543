use serde::{Deserialize, Serialize};

use crate::{
    auth::dto::PublicUser,
    error::ApiResult,
    profiles::repo::Profile,
    validation::{max_len, required, MAX_VARCHAR},
};

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub address: String,
}

impl ProfileRequest {
    pub fn validate(&self) -> ApiResult<()> {
        required("phone", &self.phone)?;
        required("gender", &self.gender)?;
        required("address", &self.address)?;
        max_len("phone", &self.phone, MAX_VARCHAR)?;
        max_len("gender", &self.gender, MAX_VARCHAR)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: i32,
    pub phone: String,
    pub gender: String,
    pub address: String,
    pub user_id: i32,
    pub user: PublicUser,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            phone: p.phone,
            gender: p.gender,
            address: p.address,
            user_id: p.user_id,
            user: p.user,
        }
    }
}
