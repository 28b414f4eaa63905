use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use crate::config::TokenTransport;
use crate::domain::account::models::AccountId;
use crate::inbound::http::handlers::session::SESSION_COOKIE;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type holding the account admitted by [`authenticate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    pub account_id: AccountId,
}

/// Gate rejections, each with its own client message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateRejection {
    MissingCredential,
    MalformedToken,
    Expired,
    InvalidIdentity,
}

impl GateRejection {
    pub fn message(&self) -> &'static str {
        match self {
            GateRejection::MissingCredential => "Missing credential",
            GateRejection::MalformedToken => "Invalid or malformed token",
            GateRejection::Expired => "Token has expired",
            GateRejection::InvalidIdentity => "Identity claim missing or invalid",
        }
    }
}

impl From<auth::JwtError> for GateRejection {
    fn from(err: auth::JwtError) -> Self {
        match err {
            auth::JwtError::TokenExpired => GateRejection::Expired,
            auth::JwtError::MissingClaim(_) | auth::JwtError::InvalidClaim { .. } => {
                GateRejection::InvalidIdentity
            }
            auth::JwtError::InvalidToken(_) | auth::JwtError::EncodingFailed(_) => {
                GateRejection::MalformedToken
            }
        }
    }
}

impl From<GateRejection> for ApiError {
    fn from(rejection: GateRejection) -> Self {
        ApiError::Unauthorized(rejection.message().to_string())
    }
}

/// Middleware that validates the session token and adds the account to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(req.headers(), state.session.transport).map_err(|rejection| {
        tracing::warn!(uri = %req.uri(), reason = rejection.message(), "Request rejected");
        rejection
    })?;

    let account_id = admit(&state.authenticator, &token, Utc::now().timestamp()).map_err(
        |rejection| {
            tracing::warn!(uri = %req.uri(), reason = rejection.message(), "Request rejected");
            rejection
        },
    )?;

    req.extensions_mut()
        .insert(AuthenticatedAccount { account_id });

    Ok(next.run(req).await)
}

/// Signature, expiry, then identity.
fn admit(
    authenticator: &auth::Authenticator,
    token: &str,
    now: i64,
) -> Result<AccountId, GateRejection> {
    let claims = authenticator.validate_session(token, now)?;

    Ok(claims.subject_as::<AccountId>()?)
}

/// Read the token from the configured transport only.
fn extract_token(headers: &HeaderMap, transport: TokenTransport) -> Result<String, GateRejection> {
    match transport {
        TokenTransport::Cookie => CookieJar::from_headers(headers)
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(GateRejection::MissingCredential),
        TokenTransport::Header => {
            let value = headers
                .get(header::AUTHORIZATION)
                .ok_or(GateRejection::MissingCredential)?;
            let value = value.to_str().map_err(|_| GateRejection::MalformedToken)?;
            let token = value
                .strip_prefix("Bearer ")
                .ok_or(GateRejection::MalformedToken)?;

            if token.is_empty() {
                return Err(GateRejection::MissingCredential);
            }
            Ok(token.to_string())
        }
    }
}
