use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::AllowOrigin;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::cards::create_card;
use super::handlers::cards::delete_card;
use super::handlers::cards::list_cards;
use super::handlers::cards::update_card;
use super::handlers::decks::create_deck;
use super::handlers::decks::delete_deck;
use super::handlers::decks::list_decks;
use super::handlers::decks::update_deck;
use super::handlers::login::login;
use super::handlers::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::config::SessionConfig;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::card::ports::CardServicePort;
use crate::domain::deck::ports::DeckServicePort;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServicePort>,
    pub deck_service: Arc<dyn DeckServicePort>,
    pub card_service: Arc<dyn CardServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub session: SessionConfig,
}

pub fn create_router(
    account_service: Arc<dyn AccountServicePort>,
    deck_service: Arc<dyn DeckServicePort>,
    card_service: Arc<dyn CardServicePort>,
    authenticator: Arc<Authenticator>,
    session: SessionConfig,
    cors_allowed_origins: &[String],
) -> Router {
    let state = AppState {
        account_service,
        deck_service,
        card_service,
        authenticator,
        session,
    };

    let public_routes = Router::new()
        .route("/signup", post(register))
        .route("/login", post(login));

    let protected_routes = Router::new()
        .route("/decks", post(create_deck).get(list_decks))
        .route("/decks/:deck_id", put(update_deck).delete(delete_deck))
        .route("/cards/create", post(create_card))
        .route("/cards/:deck_id", get(list_cards))
        .route("/cards/update/:card_id", put(update_card))
        .route("/cards/delete/:card_id", delete(delete_card))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span; they carry the session token.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(cors_layer(cors_allowed_origins))
        .with_state(state)
}

/// Credentialed CORS for the listed origins only. With no list, any origin
/// may call the API but the browser never attaches the session cookie.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
