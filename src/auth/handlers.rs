use axum::{
    extract::{FromRef, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RegisterRequest},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::{EmailTaken, NewUser},
    },
    error::{internal, ok, ApiError, ApiResult, JsonBody, SuccessBody},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(mut payload): JsonBody<RegisterRequest>,
) -> ApiResult<Json<SuccessBody<PublicUser>>> {
    payload.normalize();
    if let Err(e) = payload.validate() {
        warn!(email = %payload.email, error = %e, "invalid registration");
        return Err(e);
    }

    // Ensure email is not taken
    if state
        .users
        .find_by_email(&payload.email)
        .await
        .map_err(internal)?
        .is_some()
    {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("email already registered".into()));
    }

    let password_hash = hash_password(&payload.password).map_err(internal)?;

    let user = state
        .users
        .create(NewUser {
            name: payload.name,
            email: payload.email,
            password_hash,
        })
        .await
        .map_err(|e| {
            if e.is::<EmailTaken>() {
                warn!("email registered concurrently");
                ApiError::Conflict(e.to_string())
            } else {
                internal(e)
            }
        })?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(ok(PublicUser::from(user)))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(mut payload): JsonBody<LoginRequest>,
) -> ApiResult<Json<SuccessBody<AuthResponse>>> {
    payload.email = payload.email.trim().to_lowercase();
    payload.validate()?;

    let Some(user) = state
        .users
        .find_by_email(&payload.email)
        .await
        .map_err(internal)?
    else {
        warn!(email = %payload.email, "login unknown email");
        return Err(ApiError::Unauthorized("invalid credentials".into()));
    };

    if !verify_password(&payload.password, &user.password_hash).map_err(internal)? {
        warn!(user_id = user.id, "login invalid password");
        return Err(ApiError::Unauthorized("invalid credentials".into()));
    }

    let token = JwtKeys::from_ref(&state).sign(user.id).map_err(internal)?;

    info!(user_id = user.id, "user logged in");
    Ok(ok(AuthResponse {
        token,
        user: PublicUser::from(user),
    }))
}
