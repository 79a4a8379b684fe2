use axum::{
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use axum_extra::extract::CookieJar;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{models::CurrentUser, AppState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    // user id issued by the identity provider
    pub sub: String,
    // expiry (unix timestamp seconds)
    pub exp: usize,
}

/// Signs an HS256 token for `user_id`. Sign-in itself happens at the
/// identity provider; this exists for tooling and tests.
pub fn make_token(secret: &str, user_id: &str, days: i64) -> Result<String, String> {
    let exp = (Utc::now() + Duration::days(days)).timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| e.to_string())
}

pub fn verify_token(secret: &str, token: &str) -> Option<CurrentUser> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .ok()?;

    let sub = data.claims.sub.trim();
    if sub.is_empty() {
        return None;
    }

    Some(CurrentUser { id: sub.to_string() })
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = raw.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then(|| token.to_string())
}

fn cookie_token(headers: &HeaderMap, name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    jar.get(name).map(|c| c.value().to_string())
}

pub async fn inject_current_user(
    State(state): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let token = bearer_token(req.headers())
        .or_else(|| cookie_token(req.headers(), &state.settings.jwt_cookie_name));

    if let Some(token) = token {
        match verify_token(&state.settings.jwt_secret, &token) {
            // Store user in request extensions so handlers can access it
            Some(user) => {
                req.extensions_mut().insert(user);
            }
            None => tracing::debug!("ignoring invalid or expired token"),
        }
    }

    next.run(req).await
}

fn is_public_path(path: &str) -> bool {
    path == "/health"
        || path == "/health/db"
        || path == "/cities"
        || path.starts_with("/cities/")
        || path.starts_with("/weather/")
}

pub async fn require_auth(
    State(_state): State<AppState>,
    req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    if is_public_path(req.uri().path()) {
        return next.run(req).await;
    }

    // inject_current_user runs first and leaves CurrentUser behind on success
    if req.extensions().get::<CurrentUser>().is_some() {
        return next.run(req).await;
    }

    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "unauthorized" })),
    )
        .into_response()
}
