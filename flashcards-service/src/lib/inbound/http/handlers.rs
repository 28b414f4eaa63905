use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::account::errors::AccountError;
use crate::domain::card::errors::CardError;
use crate::domain::deck::errors::DeckError;

pub mod cards;
pub mod decks;
pub mod login;
pub mod register;
pub mod session;

/// Successful response: status code plus the `isOk: true` envelope.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, payload: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::ok(message, Some(payload))))
    }

    /// Success without a payload (`"payload": null`).
    pub fn empty(status: StatusCode, message: impl Into<String>) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::ok(message, None)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::InternalServerError(msg)
            | ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Unauthorized(msg) => msg,
        };

        (status, Json(ApiResponseBody::<()>::error(message))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        ApiError::BadRequest("Invalid input".to_string())
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::MissingField(_) | AccountError::InvalidEmail(_) => {
                ApiError::BadRequest(err.to_string())
            }
            AccountError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AccountError::CreationFailed(_) => {
                tracing::error!(error = %err, "Account creation failed");
                ApiError::InternalServerError("Error creating account".to_string())
            }
            AccountError::Password(_) => {
                tracing::error!(error = %err, "Password hashing failed");
                ApiError::InternalServerError("Error signing up".to_string())
            }
            AccountError::Token(_) | AccountError::DatabaseError(_) => {
                tracing::error!(error = %err, "Account operation failed");
                ApiError::InternalServerError("Server error".to_string())
            }
        }
    }
}

impl From<DeckError> for ApiError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::InvalidDeckId(_) => ApiError::BadRequest("Invalid deck id".to_string()),
            DeckError::InvalidDeckName(_) => ApiError::BadRequest(err.to_string()),
            DeckError::NotFound(_) => ApiError::NotFound("Deck not found".to_string()),
            DeckError::DatabaseError(_) => {
                tracing::error!(error = %err, "Deck operation failed");
                ApiError::InternalServerError("Deck operation failed".to_string())
            }
        }
    }
}

impl From<CardError> for ApiError {
    fn from(err: CardError) -> Self {
        match err {
            CardError::InvalidCardId(_) => ApiError::BadRequest("Invalid card id".to_string()),
            CardError::InvalidContent(_) => ApiError::BadRequest(err.to_string()),
            CardError::DeckNotFound(_) => ApiError::NotFound("Deck not found".to_string()),
            CardError::NoCards(_) => {
                ApiError::NotFound("No flashcards found for this deck".to_string())
            }
            CardError::NotFound(_) => ApiError::NotFound("Card not found".to_string()),
            CardError::DatabaseError(_) => {
                tracing::error!(error = %err, "Card operation failed");
                ApiError::InternalServerError("Card operation failed".to_string())
            }
        }
    }
}

/// Response envelope shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    is_ok: bool,
    message: String,
    payload: Option<T>,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn ok(message: impl Into<String>, payload: Option<T>) -> Self {
        Self {
            is_ok: true,
            message: message.into(),
            payload,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_ok: false,
            message: message.into(),
            payload: None,
        }
    }
}
