use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;

use crate::{
    error::Result,
    services::auth as auth_service,
    services::session,
    state::AppState,
    validation::auth::*,
};

/// The request payload for user registration.
///
/// Missing fields decode as empty strings and fail validation.
#[derive(Deserialize, Debug)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// The request payload for user login.
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// The response payload for authentication-related requests.
#[derive(Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
}

/// Handles user registration.
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!("📝 Register attempt: {}", payload.username);
    validate_username(&payload.username)?;
    validate_password(&payload.password)?;

    let user = auth_service::create_user(&state.db, &payload.username, &payload.password).await?;

    tracing::info!("✅ User registered: {}", user.id);

    let response = AuthResponse {
        success: true,
        message: "Registration successful".to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// Handles user login.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<Response> {
    tracing::info!("🔐 Login attempt: {}", payload.username);

    let user =
        auth_service::authenticate_user(&state.db, &payload.username, &payload.password).await?;

    session::issue(&cookies, user.id, state.config.session_duration_hours);
    tracing::info!("✅ Session cookie issued for user: {}", user.id);

    let response = AuthResponse {
        success: true,
        message: "Login successful".to_string(),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Handles user logout.
///
/// Not gated: clearing an absent cookie is harmless, so an anonymous logout
/// still answers 200.
#[axum::debug_handler]
pub async fn logout(cookies: Cookies) -> Response {
    session::revoke(&cookies);
    tracing::info!("👋 Session cookie cleared");

    let response = AuthResponse {
        success: true,
        message: "Logout successful".to_string(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Reports whether the request carries a resolvable session.
#[axum::debug_handler]
pub async fn check_auth(cookies: Cookies) -> StatusCode {
    match session::resolve(&cookies) {
        Some(user_id) => {
            tracing::debug!("✅ Session check passed for user: {}", user_id);
            StatusCode::OK
        }
        None => StatusCode::UNAUTHORIZED,
    }
}
