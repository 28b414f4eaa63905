#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;
use flashcards_service::config::SessionConfig;
use flashcards_service::config::TokenTransport;
use flashcards_service::domain::account::errors::AccountError;
use flashcards_service::domain::account::models::Account;
use flashcards_service::domain::account::models::AccountId;
use flashcards_service::domain::account::models::NewAccount;
use flashcards_service::domain::account::ports::AccountRepository;
use flashcards_service::domain::account::service::AccountService;
use flashcards_service::domain::card::errors::CardError;
use flashcards_service::domain::card::models::Card;
use flashcards_service::domain::card::models::CardContent;
use flashcards_service::domain::card::models::CardId;
use flashcards_service::domain::card::ports::CardRepository;
use flashcards_service::domain::card::service::CardService;
use flashcards_service::domain::deck::errors::DeckError;
use flashcards_service::domain::deck::models::Deck;
use flashcards_service::domain::deck::models::DeckId;
use flashcards_service::domain::deck::models::DeckName;
use flashcards_service::domain::deck::ports::DeckRepository;
use flashcards_service::domain::deck::service::DeckService;
use flashcards_service::inbound::http::router::create_router;
use reqwest::header;
use serde_json::json;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over an in-memory store
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub authenticator: Authenticator,
    pub store: Arc<InMemoryStore>,
    pub transport: TokenTransport,
}

impl TestApp {
    /// Spawn with the default (cookie) session transport
    pub async fn spawn() -> Self {
        Self::spawn_with(SessionConfig::default()).await
    }

    pub async fn spawn_with(session: SessionConfig) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let store = Arc::new(InMemoryStore::default());
        let authenticator = Arc::new(Authenticator::new(TEST_SECRET));

        let account_service = Arc::new(AccountService::new(
            Arc::clone(&store),
            Arc::clone(&authenticator),
        ));
        let deck_service = Arc::new(DeckService::new(Arc::clone(&store)));
        let card_service = Arc::new(CardService::new(Arc::clone(&store)));

        let transport = session.transport;
        let router = create_router(
            account_service,
            deck_service,
            card_service,
            authenticator,
            session,
            &[],
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            authenticator: Authenticator::new(TEST_SECRET),
            store,
            transport,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(self.url(path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(self.url(path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(self.url(path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(self.url(path))
    }

    /// Attach a session token the way the configured transport expects it
    pub fn with_token(
        &self,
        request: reqwest::RequestBuilder,
        token: &str,
    ) -> reqwest::RequestBuilder {
        match self.transport {
            TokenTransport::Cookie => request.header(header::COOKIE, format!("token={}", token)),
            TokenTransport::Header => request.bearer_auth(token),
        }
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.with_token(self.get(path), token)
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.with_token(self.post(path), token)
    }

    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.with_token(self.put(path), token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.with_token(self.delete(path), token)
    }

    pub async fn signup(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/signup")
            .json(&json!({
                "firstName": "A",
                "lastName": "B",
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register an account and return its id and session token
    pub async fn signup_session(&self, email: &str) -> (i64, String) {
        let response = self.signup(email, "pw123").await;
        assert!(response.status().is_success());

        let cookie_token = session_cookie(&response).map(|cookie| cookie_value(&cookie));
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        let id = body["payload"]["id"].as_i64().expect("Missing account id");

        let token = match self.transport {
            TokenTransport::Cookie => cookie_token.expect("Missing session cookie"),
            TokenTransport::Header => body["payload"]["token"]
                .as_str()
                .expect("Missing token in payload")
                .to_string(),
        };
        (id, token)
    }

    /// Session token for an arbitrary account id, signed with the test secret
    pub fn token_for(&self, account_id: i64, issued_at: i64) -> String {
        self.authenticator
            .issue_session(account_id, issued_at)
            .expect("Failed to issue token")
            .access_token
    }

    pub fn fresh_token_for(&self, account_id: i64) -> String {
        self.token_for(account_id, Utc::now().timestamp())
    }
}

/// Raw `Set-Cookie` header of the session cookie, if any
pub fn session_cookie(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("token="))
        .map(str::to_string)
}

pub fn cookie_value(set_cookie: &str) -> String {
    set_cookie
        .trim_start_matches("token=")
        .split(';')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// In-memory implementation of every repository port
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

#[derive(Default)]
struct StoreState {
    next_id: i64,
    accounts: Vec<Account>,
    decks: Vec<Deck>,
    cards: Vec<Card>,
}

impl StoreState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn owns_deck(&self, owner: AccountId, deck_id: DeckId) -> bool {
        self.decks
            .iter()
            .any(|deck| deck.id == deck_id && deck.owner == owner)
    }
}

impl InMemoryStore {
    pub fn decks_of(&self, owner: AccountId) -> Vec<Deck> {
        let state = self.state.lock().unwrap();
        state
            .decks
            .iter()
            .filter(|deck| deck.owner == owner)
            .cloned()
            .collect()
    }

    pub fn account_by_email(&self, email: &str) -> Option<Account> {
        let state = self.state.lock().unwrap();
        state
            .accounts
            .iter()
            .find(|account| account.email.as_str() == email)
            .cloned()
    }
}

#[async_trait]
impl AccountRepository for InMemoryStore {
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError> {
        let mut state = self.state.lock().unwrap();
        if state
            .accounts
            .iter()
            .any(|existing| existing.email == account.email)
        {
            return Err(AccountError::CreationFailed(format!(
                "email {} already registered",
                account.email
            )));
        }

        let id = AccountId(state.next_id());
        let account = account.into_account(id);
        state.accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        Ok(self.account_by_email(email))
    }
}

#[async_trait]
impl DeckRepository for InMemoryStore {
    async fn create(&self, owner: AccountId, name: DeckName) -> Result<Deck, DeckError> {
        let mut state = self.state.lock().unwrap();
        let deck = Deck {
            id: DeckId(state.next_id()),
            owner,
            name,
            created_at: Utc::now(),
        };
        state.decks.push(deck.clone());
        Ok(deck)
    }

    async fn list_by_owner(&self, owner: AccountId) -> Result<Vec<Deck>, DeckError> {
        Ok(self.decks_of(owner))
    }

    async fn rename(
        &self,
        owner: AccountId,
        id: DeckId,
        name: DeckName,
    ) -> Result<Option<Deck>, DeckError> {
        let mut state = self.state.lock().unwrap();
        Ok(state
            .decks
            .iter_mut()
            .find(|deck| deck.id == id && deck.owner == owner)
            .map(|deck| {
                deck.name = name;
                deck.clone()
            }))
    }

    async fn delete(&self, owner: AccountId, id: DeckId) -> Result<bool, DeckError> {
        let mut state = self.state.lock().unwrap();
        if !state.owns_deck(owner, id) {
            return Ok(false);
        }
        state.decks.retain(|deck| deck.id != id);
        state.cards.retain(|card| card.deck_id != id);
        Ok(true)
    }
}

#[async_trait]
impl CardRepository for InMemoryStore {
    async fn create(
        &self,
        owner: AccountId,
        deck_id: DeckId,
        content: CardContent,
    ) -> Result<Option<Card>, CardError> {
        let mut state = self.state.lock().unwrap();
        if !state.owns_deck(owner, deck_id) {
            return Ok(None);
        }
        let card = Card {
            id: CardId(state.next_id()),
            deck_id,
            content,
            created_at: Utc::now(),
        };
        state.cards.push(card.clone());
        Ok(Some(card))
    }

    async fn list_by_deck(
        &self,
        owner: AccountId,
        deck_id: DeckId,
    ) -> Result<Vec<Card>, CardError> {
        let state = self.state.lock().unwrap();
        if !state.owns_deck(owner, deck_id) {
            return Ok(Vec::new());
        }
        Ok(state
            .cards
            .iter()
            .filter(|card| card.deck_id == deck_id)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        owner: AccountId,
        id: CardId,
        content: CardContent,
    ) -> Result<Option<Card>, CardError> {
        let mut state = self.state.lock().unwrap();
        let Some(deck_id) = state
            .cards
            .iter()
            .find(|card| card.id == id)
            .map(|card| card.deck_id)
        else {
            return Ok(None);
        };
        if !state.owns_deck(owner, deck_id) {
            return Ok(None);
        }
        Ok(state
            .cards
            .iter_mut()
            .find(|card| card.id == id)
            .map(|card| {
                card.content = content;
                card.clone()
            }))
    }

    async fn delete(&self, owner: AccountId, id: CardId) -> Result<bool, CardError> {
        let mut state = self.state.lock().unwrap();
        let Some(deck_id) = state
            .cards
            .iter()
            .find(|card| card.id == id)
            .map(|card| card.deck_id)
        else {
            return Ok(false);
        };
        if !state.owns_deck(owner, deck_id) {
            return Ok(false);
        }
        state.cards.retain(|card| card.id != id);
        Ok(true)
    }
}
