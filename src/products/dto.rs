use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    auth::dto::PublicUser,
    categories::repo::Category,
    error::{ApiError, ApiResult},
    products::repo::Product,
    validation::{max_len, required, required_int, MAX_VARCHAR},
};

/// Text fields of the product creation form. The owner is never read from
/// the form; it is the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRequest {
    pub name: String,
    pub desc: String,
    pub price: i32,
    pub qty: i32,
    pub category_id: i32,
}

impl ProductRequest {
    pub fn from_fields(fields: &HashMap<String, String>) -> ApiResult<Self> {
        let text = |key: &str| fields.get(key).map(String::as_str);

        let name = text("name").unwrap_or_default().trim().to_string();
        let desc = text("desc").unwrap_or_default().trim().to_string();
        required("name", &name)?;
        required("desc", &desc)?;
        max_len("name", &name, MAX_VARCHAR)?;

        let price = required_int("price", text("price"))?;
        let qty = required_int("qty", text("qty"))?;
        let category_id = required_int("category_id", text("category_id"))?;

        if price < 0 {
            return Err(ApiError::BadRequest("price must not be negative".into()));
        }
        if qty < 0 {
            return Err(ApiError::BadRequest("qty must not be negative".into()));
        }
        if category_id <= 0 {
            return Err(ApiError::BadRequest("category_id must be positive".into()));
        }

        Ok(Self {
            name,
            desc,
            price,
            qty,
            category_id,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub desc: String,
    pub price: i32,
    pub image: String,
    pub qty: i32,
    pub user_id: i32,
    pub category_id: i32,
    pub user: PublicUser,
    pub category: Category,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            desc: p.desc,
            price: p.price,
            image: p.image,
            qty: p.qty,
            user_id: p.user_id,
            category_id: p.category_id,
            user: p.user,
            category: p.category,
        }
    }
}
