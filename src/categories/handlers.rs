use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{
    auth::jwt::AuthUser,
    categories::repo::Category,
    error::{internal, ok, ApiResult, JsonBody, SuccessBody},
    state::AppState,
    validation::{max_len, required, MAX_VARCHAR},
};

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub name: String,
}

pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/category", post(create_category))
}

#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<SuccessBody<Vec<Category>>>> {
    let categories = state.categories.list().await.map_err(internal)?;
    Ok(ok(categories))
}

#[instrument(skip(state, payload))]
pub async fn create_category(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(payload): JsonBody<CategoryRequest>,
) -> ApiResult<Json<SuccessBody<Category>>> {
    required("name", &payload.name)?;
    max_len("name", payload.name.trim(), MAX_VARCHAR)?;
    let category = state
        .categories
        .create(payload.name.trim())
        .await
        .map_err(internal)?;
    info!(user_id, category_id = category.id, "category created");
    Ok(ok(category))
}
