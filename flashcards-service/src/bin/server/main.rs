use std::sync::Arc;

use auth::Authenticator;
use flashcards_service::config::Config;
use flashcards_service::domain::account::service::AccountService;
use flashcards_service::domain::card::service::CardService;
use flashcards_service::domain::deck::service::DeckService;
use flashcards_service::inbound::http::router::create_router;
use flashcards_service::outbound::repositories::PostgresAccountRepository;
use flashcards_service::outbound::repositories::PostgresCardRepository;
use flashcards_service::outbound::repositories::PostgresDeckRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flashcards_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "flashcards-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        session_transport = ?config.session.transport,
        session_ttl_seconds = config.jwt.session_ttl_seconds,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(
        Authenticator::new(config.jwt.secret.as_bytes())
            .with_session_ttl(config.jwt.session_ttl_seconds),
    );

    let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool.clone()));
    let deck_repository = Arc::new(PostgresDeckRepository::new(pg_pool.clone()));
    let card_repository = Arc::new(PostgresCardRepository::new(pg_pool));

    let account_service = Arc::new(AccountService::new(
        account_repository,
        Arc::clone(&authenticator),
    ));
    let deck_service = Arc::new(DeckService::new(deck_repository));
    let card_service = Arc::new(CardService::new(card_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        account_service,
        deck_service,
        card_service,
        authenticator,
        config.session.clone(),
        &config.server.cors_allowed_origins,
    );

    axum::serve(http_listener, http_application).await?;
    tracing::info!("Server exited");

    Ok(())
}
