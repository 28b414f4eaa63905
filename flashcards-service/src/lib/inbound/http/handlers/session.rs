use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::cookie::SameSite;
use serde::Serialize;
use time::OffsetDateTime;

use crate::config::SessionConfig;
use crate::config::TokenTransport;
use crate::domain::account::models::Account;
use crate::domain::account::models::Session;
use crate::inbound::http::handlers::ApiError;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// Public view of an account returned by signup and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl From<&Account> for AccountData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.0,
            first_name: account.first_name.as_str().to_string(),
            last_name: account.last_name.as_str().to_string(),
            email: account.email.as_str().to_string(),
            token: None,
        }
    }
}

/// Hand the session token to the client over the configured transport.
///
/// Cookie transport adds the `token` cookie to `jar`; header transport puts the
/// token into the payload instead.
pub fn deliver_session(
    jar: CookieJar,
    config: &SessionConfig,
    session: Session,
) -> Result<(CookieJar, AccountData), ApiError> {
    let mut data = AccountData::from(&session.account);

    match config.transport {
        TokenTransport::Cookie => {
            let cookie = session_cookie(config, session.token, session.expires_at)?;
            Ok((jar.add(cookie), data))
        }
        TokenTransport::Header => {
            data.token = Some(session.token);
            Ok((jar, data))
        }
    }
}

fn session_cookie(
    config: &SessionConfig,
    token: String,
    expires_at: i64,
) -> Result<Cookie<'static>, ApiError> {
    let expires = OffsetDateTime::from_unix_timestamp(expires_at).map_err(|e| {
        tracing::error!(error = %e, expires_at, "Session expiry out of range");
        ApiError::InternalServerError("Server error".to_string())
    })?;

    Ok(Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .expires(expires)
        .secure(config.secure)
        .same_site(SameSite::None)
        .http_only(config.http_only)
        .build())
}
