use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::deck::errors::DeckError;
use crate::domain::deck::models::Deck;
use crate::domain::deck::models::DeckId;
use crate::domain::deck::models::DeckName;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

/// HTTP request body for creating or renaming a deck
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeckRequest {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckData {
    pub id: i64,
    pub name: String,
}

impl From<&Deck> for DeckData {
    fn from(deck: &Deck) -> Self {
        Self {
            id: deck.id.0,
            name: deck.name.as_str().to_string(),
        }
    }
}

pub async fn create_deck(
    State(state): State<AppState>,
    Extension(account): Extension<AuthenticatedAccount>,
    body: Result<Json<DeckRequest>, JsonRejection>,
) -> Result<ApiSuccess<DeckData>, ApiError> {
    let Json(body) = body?;
    let name = DeckName::new(body.name).map_err(DeckError::from)?;

    state
        .deck_service
        .create_deck(account.account_id, name)
        .await
        .map_err(ApiError::from)
        .map(|ref deck| ApiSuccess::new(StatusCode::OK, "Deck Created", deck.into()))
}

pub async fn list_decks(
    State(state): State<AppState>,
    Extension(account): Extension<AuthenticatedAccount>,
) -> Result<ApiSuccess<Vec<DeckData>>, ApiError> {
    state
        .deck_service
        .list_decks(account.account_id)
        .await
        .map_err(ApiError::from)
        .map(|decks| {
            ApiSuccess::new(
                StatusCode::OK,
                "Decks retrieved",
                decks.iter().map(DeckData::from).collect(),
            )
        })
}

pub async fn update_deck(
    State(state): State<AppState>,
    Extension(account): Extension<AuthenticatedAccount>,
    Path(deck_id): Path<String>,
    body: Result<Json<DeckRequest>, JsonRejection>,
) -> Result<ApiSuccess<DeckData>, ApiError> {
    // Parse at HTTP boundary
    let deck_id = DeckId::from_string(&deck_id).map_err(DeckError::from)?;
    let Json(body) = body?;
    let name = DeckName::new(body.name).map_err(DeckError::from)?;

    state
        .deck_service
        .rename_deck(account.account_id, deck_id, name)
        .await
        .map_err(ApiError::from)
        .map(|ref deck| ApiSuccess::new(StatusCode::OK, "Deck Updated Successfully", deck.into()))
}

pub async fn delete_deck(
    State(state): State<AppState>,
    Extension(account): Extension<AuthenticatedAccount>,
    Path(deck_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let deck_id = DeckId::from_string(&deck_id).map_err(DeckError::from)?;

    state
        .deck_service
        .delete_deck(account.account_id, deck_id)
        .await?;

    Ok(ApiSuccess::empty(
        StatusCode::OK,
        format!("Deck {} deleted successfully", deck_id),
    ))
}
