/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{DEFAULT_AUTH_URL, DEFAULT_SERVICE_TYPE, TOKENS_PATH};
use crate::error::AppError;
use crate::model::requests::{V2AuthRequest, redact};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error, warn};

/// Environment variable holding the account username
pub const ENV_USERNAME: &str = "SWIFT_USERNAME";
/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "SWIFT_API_KEY";
/// Environment variable holding the password
pub const ENV_PASSWORD: &str = "SWIFT_PASSWORD";
/// Environment variable holding the identity endpoint
pub const ENV_AUTH_URL: &str = "SWIFT_AUTH_URL";
/// Environment variable holding the region preference
pub const ENV_REGION: &str = "SWIFT_REGION";
/// Environment variable holding the catalog service type to resolve
pub const ENV_SERVICE_TYPE: &str = "SWIFT_SERVICE_TYPE";

#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
/// Authentication credentials for the identity service
///
/// Either secret may be empty; both are sent.
pub struct Credentials {
    /// Account username
    pub username: String,
    /// API key for the account
    pub api_key: String,
    /// Password for the account
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &redact(&self.api_key))
            .field("password", &redact(&self.password))
            .finish()
    }
}

#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for V2 authentication
pub struct Config {
    /// Authentication credentials
    #[serde(skip_serializing, default)]
    pub credentials: Credentials,
    /// Identity endpoint, without the `tokens` path
    pub auth_url: String,
    /// Region preference; empty takes the first endpoint of a service
    pub region: String,
    /// Catalog service type to resolve
    pub service_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// A `.env` file is loaded first if present. Variables read:
    /// `SWIFT_USERNAME`, `SWIFT_API_KEY`, `SWIFT_PASSWORD`, `SWIFT_AUTH_URL`,
    /// `SWIFT_REGION` and `SWIFT_SERVICE_TYPE`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username: String = get_env_or_default(ENV_USERNAME, String::new());
        let api_key: String = get_env_or_default(ENV_API_KEY, String::new());
        let password: String = get_env_or_default(ENV_PASSWORD, String::new());

        if username.is_empty() {
            error!("{} not found in environment variables or .env file", ENV_USERNAME);
        }
        if api_key.is_empty() && password.is_empty() {
            warn!(
                "Neither {} nor {} is set, authentication will be rejected",
                ENV_API_KEY, ENV_PASSWORD
            );
        }

        let config = Config {
            credentials: Credentials {
                username,
                api_key,
                password,
            },
            auth_url: get_env_or_default(ENV_AUTH_URL, DEFAULT_AUTH_URL.to_string()),
            region: get_env_or_none(ENV_REGION).unwrap_or_default(),
            service_type: get_env_or_default(ENV_SERVICE_TYPE, DEFAULT_SERVICE_TYPE.to_string()),
        };
        debug!("Loaded configuration: {}", config);
        config
    }

    /// Full URL the authentication request is posted to
    pub fn tokens_url(&self) -> String {
        format!("{}/{}", self.auth_url.trim_end_matches('/'), TOKENS_PATH)
    }

    /// Builds the authentication request for the configured credentials
    pub fn auth_request(&self) -> V2AuthRequest {
        V2AuthRequest::new(
            &self.credentials.username,
            &self.credentials.api_key,
            &self.credentials.password,
        )
    }

    /// Serialized authentication request body
    pub fn auth_request_body(&self) -> Result<Vec<u8>, AppError> {
        self.auth_request().to_bytes()
    }
}
