use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use tower_cookies::Cookies;

use crate::{models::session::Session, services::session};

/// A middleware that requires a valid session to be present.
///
/// Resolves the session cookie to a user id and injects it into request
/// extensions as a `Session`; rejects with 401 otherwise. Runs once per
/// request, before the wrapped handler, with no logic after dispatch.
pub async fn require_auth(
    cookies: Cookies,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    tracing::debug!("🔐 Checking authentication...");

    let user_id = session::resolve(&cookies).ok_or_else(|| {
        tracing::warn!("❌ Missing or invalid session cookie");
        StatusCode::UNAUTHORIZED
    })?;

    tracing::debug!("✅ User authenticated: {}", user_id);

    request.extensions_mut().insert(Session { user_id });

    Ok(next.run(request).await)
}
