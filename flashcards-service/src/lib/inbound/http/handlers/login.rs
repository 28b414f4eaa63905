use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::session::deliver_session;
use super::session::AccountData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::errors::AccountError;
use crate::domain::account::errors::RequiredFieldError;
use crate::domain::account::models::Credentials;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, ApiSuccess<AccountData>), ApiError> {
    let Json(body) = body?;
    let credentials = body.try_into_credentials()?;

    let session = state.account_service.login(credentials).await?;
    let (jar, data) = deliver_session(jar, &state.session, session)?;

    Ok((jar, ApiSuccess::new(StatusCode::OK, "Logged In", data)))
}

/// HTTP request body for login (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl LoginRequest {
    // Presence only; format is checked at signup.
    fn try_into_credentials(self) -> Result<Credentials, AccountError> {
        if self.email.trim().is_empty() {
            return Err(RequiredFieldError::Missing("email").into());
        }
        if self.password.is_empty() {
            return Err(RequiredFieldError::Missing("password").into());
        }

        Ok(Credentials {
            email: self.email,
            password: self.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_password_is_rejected() {
        let req: LoginRequest = serde_json::from_str(r#"{"email": "a@b.com"}"#).unwrap();

        assert!(matches!(
            req.try_into_credentials(),
            Err(AccountError::MissingField(RequiredFieldError::Missing(
                "password"
            )))
        ));
    }

    #[test]
    fn test_email_format_not_checked_at_login() {
        let req = LoginRequest {
            email: "legacy-login".to_string(),
            password: "pw".to_string(),
        };

        assert_eq!(req.try_into_credentials().unwrap().email, "legacy-login");
    }
}
