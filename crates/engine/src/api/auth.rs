//! Session authentication for the private routes
//!
//! A session token arrives as `Authorization: Bearer <token>` or as a
//! `session=<token>` cookie. The middleware resolves it against the
//! configured tokens and stores the user in the request extensions.
//!
//! # Usage
//!
//! ```rust,ignore
//! let private = Router::new()
//!     .route("/usage", get(handler))
//!     .route_layer(middleware::from_fn_with_state(app.clone(), require_session));
//!
//! async fn handler(Auth(user): Auth) -> impl IntoResponse {
//!     format!("Hello, {}", user.user_id)
//! }
//! ```

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::http::ApiError;
use crate::app::App;

/// Name of the cookie carrying a session token.
pub const SESSION_COOKIE: &str = "session";

/// User resolved from a session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

/// Token from the bearer header, falling back to the session cookie.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if bearer.is_some() {
        return bearer;
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|t| !t.is_empty())
}

/// Middleware that rejects requests without a known session with 401.
pub async fn require_session(
    State(app): State<Arc<App>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user_id = session_token(request.headers())
        .and_then(|token| app.sessions.resolve(token))
        .map(str::to_string)
        .ok_or(ApiError::Unauthorized)?;

    tracing::debug!(user_id = %user_id, path = %request.uri().path(), "Session accepted");
    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Extractor for the authenticated user in handlers behind `require_session`
#[derive(Debug, Clone)]
pub struct Auth(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(Auth)
            .ok_or(ApiError::Unauthorized)
    }
}
