// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Configuration loaded from environment variables (and `.env` if present).

use std::env;
use std::time::Duration;

/// Default visibility window for status messages.
pub const DEFAULT_MESSAGE_TIMEOUT_SECS: u64 = 5;

/// Configuration shared by the terminal client and the activities server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the activities API (client side)
    pub api_base_url: String,
    /// Frontend origin allowed by CORS (server side)
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// How long a status message stays visible
    pub message_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default; malformed values are errors rather than
    /// being silently replaced.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 8000,
        };

        let message_timeout_secs = match env::var("MESSAGE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("MESSAGE_TIMEOUT_SECS", raw))?,
            Err(_) => DEFAULT_MESSAGE_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base_url: env::var("API_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            port,
            message_timeout: Duration::from_secs(message_timeout_secs),
        })
    }

    /// Config for tests.
    pub fn test_default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            frontend_url: "http://localhost:8000".to_string(),
            port: 8000,
            message_timeout: Duration::from_secs(DEFAULT_MESSAGE_TIMEOUT_SECS),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
