/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Identity V2 authentication request body
///
/// Serializes to:
///
/// ```json
/// {"auth": {
///     "RAX-KSKEY:apiKeyCredentials": {"username": "...", "apiKey": "..."},
///     "passwordCredentials": {"username": "...", "password": "..."}}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct V2AuthRequest {
    /// Both credential kinds
    pub auth: AuthCredentials,
}

/// Credential objects carried by a [`V2AuthRequest`]
///
/// Both are always present, even when a secret is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCredentials {
    /// API key credentials (vendor extension)
    #[serde(rename = "RAX-KSKEY:apiKeyCredentials")]
    pub api_key_credentials: ApiKeyCredentials,
    /// Password credentials
    #[serde(rename = "passwordCredentials")]
    pub password_credentials: PasswordCredentials,
}

/// Username and API key pair
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyCredentials {
    /// Account username
    pub username: String,
    /// API key, possibly empty
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

/// Username and password pair
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCredentials {
    /// Account username
    pub username: String,
    /// Password, possibly empty
    pub password: String,
}

impl V2AuthRequest {
    /// Creates a request carrying both credential kinds for `username`
    ///
    /// No check is made that either secret is non-empty.
    pub fn new(username: &str, api_key: &str, password: &str) -> Self {
        Self {
            auth: AuthCredentials {
                api_key_credentials: ApiKeyCredentials {
                    username: username.to_string(),
                    api_key: api_key.to_string(),
                },
                password_credentials: PasswordCredentials {
                    username: username.to_string(),
                    password: password.to_string(),
                },
            },
        }
    }

    /// Account username the request authenticates
    pub fn username(&self) -> &str {
        &self.auth.api_key_credentials.username
    }

    /// Serializes the request to its JSON body
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - The request body
    /// * `Err(AppError::SerializationError)` - If encoding fails
    pub fn to_bytes(&self) -> Result<Vec<u8>, AppError> {
        let body =
            serde_json::to_vec(self).map_err(|e| AppError::SerializationError(e.to_string()))?;
        debug!(
            "Built V2 auth request for user {} ({} bytes)",
            self.username(),
            body.len()
        );
        Ok(body)
    }
}

/// Builds the identity V2 request body for the given credentials
///
/// Both the API key and the password credential objects are populated with
/// `username`, whichever secret is empty.
///
/// # Arguments
/// * `username` - Account username
/// * `api_key` - API key, may be empty
/// * `password` - Password, may be empty
pub fn build_auth_request(
    username: &str,
    api_key: &str,
    password: &str,
) -> Result<Vec<u8>, AppError> {
    V2AuthRequest::new(username, api_key, password).to_bytes()
}

/// Replaces a secret with a marker carrying only its length
pub(crate) fn redact(secret: &str) -> String {
    if secret.is_empty() {
        "<empty>".to_string()
    } else {
        format!("<redacted:{}>", secret.len())
    }
}

impl fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyCredentials")
            .field("username", &self.username)
            .field("api_key", &redact(&self.api_key))
            .finish()
    }
}

impl fmt::Debug for PasswordCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordCredentials")
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .finish()
    }
}
