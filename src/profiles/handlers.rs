use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument};

use crate::{
    auth::jwt::AuthUser,
    error::{internal, ok, ApiError, ApiResult, JsonBody, SuccessBody},
    profiles::{
        dto::{ProfileRequest, ProfileResponse},
        repo::NewProfile,
    },
    state::AppState,
    validation::parse_id,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile/:id", get(get_profile))
        .route("/profile", post(create_profile))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessBody<ProfileResponse>>> {
    let id = parse_id(&id);
    match state.profiles.find_by_id(id).await.map_err(internal)? {
        Some(profile) => Ok(ok(ProfileResponse::from(profile))),
        None => {
            error!(id, "profile not found");
            Err(ApiError::Internal("profile not found".into()))
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn create_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(payload): JsonBody<ProfileRequest>,
) -> ApiResult<Json<SuccessBody<ProfileResponse>>> {
    payload.validate()?;

    let id = state
        .profiles
        .create(NewProfile {
            phone: payload.phone.trim().to_string(),
            gender: payload.gender.trim().to_string(),
            address: payload.address.trim().to_string(),
            user_id,
        })
        .await
        .map_err(internal)?;

    let profile = state
        .profiles
        .find_by_id(id)
        .await
        .map_err(internal)?
        .ok_or_else(|| ApiError::Internal("profile not found".into()))?;

    info!(profile_id = id, user_id, "profile created");
    Ok(ok(ProfileResponse::from(profile)))
}
