//! Application configuration loaded from environment variables.
//!
//! Secrets are only checked for presence; their values never enter `Config`.

use std::env;
use std::path::PathBuf;

/// Deployment environment, from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// Parse an `APP_ENV` value. Anything unrecognized is production.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Self::Development,
            "test" => Self::Test,
            _ => Self::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

/// Which user store backs the auth endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStoreKind {
    File,
    Memory,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    pub environment: Environment,
    /// Platform marker reported by the diagnostics endpoint
    pub platform: String,
    /// JSON file holding the user accounts
    pub users_file: PathBuf,
    pub user_store: UserStoreKind,

    // --- Secret presence flags ---
    /// `MONGODB_URI` is set and non-empty
    pub has_mongodb_uri: bool,
    /// `JWT_SECRET` is set and non-empty
    pub has_jwt_secret: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let user_store = match env::var("USER_STORE") {
            Err(_) => UserStoreKind::File,
            Ok(v) => match v.trim() {
                "" | "file" => UserStoreKind::File,
                "memory" => UserStoreKind::Memory,
                _ => return Err(ConfigError::Invalid("USER_STORE", v)),
            },
        };

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            environment: env::var("APP_ENV")
                .map(|v| Environment::parse(&v))
                .unwrap_or(Environment::Production),
            platform: env::var("PLATFORM").unwrap_or_else(|_| "server".to_string()),
            users_file: env::var("USERS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_users_file()),
            user_store,
            has_mongodb_uri: secret_present("MONGODB_URI"),
            has_jwt_secret: secret_present("JWT_SECRET"),
        })
    }

    /// Deterministic config for tests.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            environment: Environment::Test,
            platform: "test".to_string(),
            users_file: default_users_file(),
            user_store: UserStoreKind::Memory,
            has_mongodb_uri: false,
            has_jwt_secret: true,
        }
    }

    /// Whether raw error text may be sent to clients.
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

fn default_users_file() -> PathBuf {
    env::temp_dir().join("users.json")
}

fn secret_present(name: &str) -> bool {
    env::var(name).is_ok_and(|v| !v.trim().is_empty())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
