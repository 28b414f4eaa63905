use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Prefix of environment overrides, e.g. `FLASHCARDS__JWT__SECRET`.
const ENV_PREFIX: &str = "FLASHCARDS";

/// Application configuration for flashcards-service.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    /// Browser origins allowed to make credentialed requests. Empty means any
    /// origin, without credentials.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

/// Session token signing configuration.
#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub session_ttl_seconds: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("session_ttl_seconds", &self.session_ttl_seconds)
            .finish()
    }
}

/// How the session token travels between client and server.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenTransport {
    /// `token` cookie set on login, read back by the gate
    Cookie,
    /// Token returned in the response payload, sent back as `Authorization: Bearer`
    Header,
}

/// Session transport configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub transport: TokenTransport,
    pub http_only: bool,
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            transport: TokenTransport::Cookie,
            http_only: true,
            secure: true,
        }
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FLASHCARDS__JWT__SECRET, FLASHCARDS__DATABASE__URL, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults (everything except `jwt.secret` and `database.url`)
    ///
    /// # Errors
    /// Returns error if a required value is missing, including an empty signing secret
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 8000)?
            .set_default("database.max_connections", 5)?
            .set_default("jwt.session_ttl_seconds", auth::SESSION_TTL_SECONDS)?
            .set_default("session.transport", "cookie")?
            .set_default("session.http_only", true)?
            .set_default("session.secure", true)?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: FLASHCARDS__JWT__SECRET=... overrides jwt.secret
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_allowed_origins"),
            )
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret is not set; refusing to start without a signing secret".to_string(),
            ));
        }
        if self.jwt.session_ttl_seconds <= 0 {
            return Err(ConfigError::Message(
                "jwt.session_ttl_seconds must be positive".to_string(),
            ));
        }
        for origin in &self.server.cors_allowed_origins {
            if origin == "*" || axum::http::HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::Message(format!(
                    "server.cors_allowed_origins: {origin:?} is not a single origin"
                )));
            }
        }
        Ok(())
    }
}
