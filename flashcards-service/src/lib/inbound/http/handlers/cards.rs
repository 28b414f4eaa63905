use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::card::errors::CardError;
use crate::domain::card::models::Card;
use crate::domain::card::models::CardContent;
use crate::domain::card::models::CardId;
use crate::domain::deck::errors::DeckError;
use crate::domain::deck::models::DeckId;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    deck_id: Option<i64>,
    #[serde(default)]
    question: String,
    #[serde(default)]
    answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCardRequest {
    #[serde(default)]
    question: String,
    #[serde(default)]
    answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub id: i64,
    pub deck_id: i64,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id.0,
            deck_id: card.deck_id.0,
            question: card.content.question().to_string(),
            answer: card.content.answer().to_string(),
            created_at: card.created_at,
        }
    }
}

pub async fn create_card(
    State(state): State<AppState>,
    Extension(account): Extension<AuthenticatedAccount>,
    body: Result<Json<CreateCardRequest>, JsonRejection>,
) -> Result<ApiSuccess<CardData>, ApiError> {
    let Json(body) = body?;
    let deck_id = body
        .deck_id
        .map(DeckId)
        .ok_or_else(|| ApiError::BadRequest("deckId is required".to_string()))?;
    let content = CardContent::new(body.question, body.answer).map_err(CardError::from)?;

    state
        .card_service
        .create_card(account.account_id, deck_id, content)
        .await
        .map_err(ApiError::from)
        .map(|ref card| ApiSuccess::new(StatusCode::OK, "Card Created", card.into()))
}

pub async fn list_cards(
    State(state): State<AppState>,
    Extension(account): Extension<AuthenticatedAccount>,
    Path(deck_id): Path<String>,
) -> Result<ApiSuccess<Vec<CardData>>, ApiError> {
    let deck_id = DeckId::from_string(&deck_id).map_err(DeckError::from)?;

    let cards = state
        .card_service
        .list_cards(account.account_id, deck_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        "Cards Retrieved",
        cards.iter().map(CardData::from).collect(),
    ))
}

pub async fn update_card(
    State(state): State<AppState>,
    Extension(account): Extension<AuthenticatedAccount>,
    Path(card_id): Path<String>,
    body: Result<Json<UpdateCardRequest>, JsonRejection>,
) -> Result<ApiSuccess<CardData>, ApiError> {
    let card_id = CardId::from_string(&card_id).map_err(CardError::from)?;
    let Json(body) = body?;
    let content = CardContent::new(body.question, body.answer).map_err(CardError::from)?;

    state
        .card_service
        .update_card(account.account_id, card_id, content)
        .await
        .map_err(ApiError::from)
        .map(|ref card| {
            ApiSuccess::new(
                StatusCode::OK,
                format!("Card {} updated", card_id),
                card.into(),
            )
        })
}

pub async fn delete_card(
    State(state): State<AppState>,
    Extension(account): Extension<AuthenticatedAccount>,
    Path(card_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let card_id = CardId::from_string(&card_id).map_err(CardError::from)?;

    state
        .card_service
        .delete_card(account.account_id, card_id)
        .await?;

    Ok(ApiSuccess::empty(
        StatusCode::OK,
        format!("Card {} deleted successfully", card_id),
    ))
}
