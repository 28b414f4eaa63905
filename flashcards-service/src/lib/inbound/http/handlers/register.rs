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
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::PersonName;
use crate::domain::account::models::RegisterAccountCommand;
use crate::inbound::http::router::AppState;

/// `POST /signup`: create the account, then log it in.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(CookieJar, ApiSuccess<AccountData>), ApiError> {
    let Json(body) = body?;
    let command = body.try_into_command()?;

    let session = state.account_service.register(command).await?;
    let (jar, data) = deliver_session(jar, &state.session, session)?;

    Ok((
        jar,
        ApiSuccess::new(StatusCode::OK, "Signed Up Successfully", data),
    ))
}

/// HTTP request body for signup (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterAccountCommand, AccountError> {
        let first_name = PersonName::new("firstName", self.first_name)?;
        let last_name = PersonName::new("lastName", self.last_name)?;
        if self.email.trim().is_empty() {
            return Err(RequiredFieldError::Missing("email").into());
        }
        let email = EmailAddress::new(self.email)?;
        if self.password.is_empty() {
            return Err(RequiredFieldError::Missing("password").into());
        }

        Ok(RegisterAccountCommand::new(
            first_name,
            last_name,
            email,
            self.password,
        ))
    }
}
