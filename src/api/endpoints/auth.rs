//! Identity endpoints: login, registration and listing.
//!
//! `POST /login`: exact plaintext match on cedula + password
//! `POST /registro`: insert-if-absent
//! `GET /usuarios`: all identities, passwords omitted

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::{ApiContext, MessageResponse};
use crate::models::{LoginRequest, User, UserProfile};

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub usuario: UserProfile,
}

/// `POST /login`: 401 on any mismatch.
pub async fn login(
    State(ctx): State<ApiContext>,
    ApiJson(credentials): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let profile = ctx
        .core
        .authenticate(&credentials.id, &credentials.password)
        .map_err(|e| {
            tracing::info!(id = %credentials.id, "Login rejected");
            ApiError::from(e)
        })?;

    Ok(Json(LoginResponse {
        success: true,
        usuario: profile,
    }))
}

/// `POST /registro`: 400 if the cedula is already registered.
pub async fn register(
    State(ctx): State<ApiContext>,
    ApiJson(user): ApiJson<User>,
) -> Result<Json<MessageResponse>, ApiError> {
    ctx.core.register(user)?;

    Ok(Json(MessageResponse {
        mensaje: "Usuario registrado exitosamente",
    }))
}

#[derive(Serialize)]
pub struct UsersResponse {
    pub usuarios: Vec<UserProfile>,
}

/// `GET /usuarios`
pub async fn users(State(ctx): State<ApiContext>) -> Result<Json<UsersResponse>, ApiError> {
    Ok(Json(UsersResponse {
        usuarios: ctx.core.list_users()?,
    }))
}
