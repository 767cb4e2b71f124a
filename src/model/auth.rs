/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::serialization::null_as_default;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::{debug, warn};

/// Decoded identity V2 authentication response
///
/// This is the content of the `access` object. It is never mutated after
/// decoding; the catalog keeps the order of the wire response, which is the
/// order endpoint resolution walks it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Services available to the token, in response order
    #[serde(
        rename = "serviceCatalog",
        default,
        deserialize_with = "null_as_default"
    )]
    pub service_catalog: Vec<CatalogEntry>,
    /// Issued token
    #[serde(default, deserialize_with = "null_as_default")]
    pub token: Token,
    /// Authenticated user
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: User,
}

#[derive(Deserialize)]
struct AccessEnvelope {
    access: AuthResponse,
}

/// One service in the catalog
///
/// Several entries may share the same `service_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Service name (e.g. "cloudFiles")
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Service type (e.g. "object-store")
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub service_type: String,
    /// Endpoints of the service, in response order
    #[serde(default, deserialize_with = "null_as_default")]
    pub endpoints: Vec<Endpoint>,
}

/// Region-scoped URLs of a service
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct Endpoint {
    /// Region name; empty means the endpoint is not region restricted
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    /// Tenant the endpoint belongs to
    #[serde(rename = "tenantId", default, deserialize_with = "null_as_default")]
    pub tenant_id: String,
    /// Public URL
    #[serde(
        rename = "publicURL",
        alias = "publicUrl",
        default,
        deserialize_with = "null_as_default"
    )]
    pub public_url: String,
    /// Internal (service network) URL
    #[serde(
        rename = "internalURL",
        alias = "internalUrl",
        default,
        deserialize_with = "null_as_default"
    )]
    pub internal_url: String,
}

/// Token issued by the identity service
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct Token {
    /// Token value, sent as `X-Auth-Token`
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Expiry timestamp as sent by the server
    #[serde(default, deserialize_with = "null_as_default")]
    pub expires: String,
    /// Tenant the token is scoped to
    #[serde(default, deserialize_with = "null_as_default")]
    pub tenant: Tenant,
}

/// Tenant a token is scoped to
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct Tenant {
    /// Tenant identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Tenant name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Authenticated user
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// User name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Default region assigned to the account (vendor extension)
    #[serde(
        rename = "RAX-AUTH:defaultRegion",
        default,
        deserialize_with = "null_as_default"
    )]
    pub default_region: String,
    /// Roles granted to the user; carried but not interpreted
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<Role>,
}

/// Role granted to a user
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct Role {
    /// Role identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Role name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Human readable description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Tenant the role applies to
    #[serde(rename = "tenantId", default, deserialize_with = "null_as_default")]
    pub tenant_id: String,
}

impl Token {
    /// Tenant identifier the token is scoped to
    pub fn tenant_id(&self) -> &str {
        &self.tenant.id
    }

    /// Tenant name the token is scoped to
    pub fn tenant_name(&self) -> &str {
        &self.tenant.name
    }

    /// Parses the expiry timestamp
    ///
    /// # Returns
    /// `None` if the server sent no expiry or it is not RFC 3339
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.expires)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl AuthResponse {
    /// Decodes an authentication response body
    ///
    /// # Arguments
    /// * `bytes` - Raw response body, a JSON object with an `access` member
    ///
    /// # Returns
    /// * `Ok(AuthResponse)` - The decoded `access` object
    /// * `Err(AppError::ParseError)` - If the body is not valid JSON or a
    ///   structural node has the wrong type
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AppError> {
        let envelope: AccessEnvelope = serde_json::from_slice(bytes).map_err(|e| {
            warn!("Failed to decode V2 auth response: {}", e);
            AppError::ParseError(e.to_string())
        })?;
        envelope.access.log_decoded();
        Ok(envelope.access)
    }

    /// Decodes an authentication response read from `reader`
    ///
    /// Read failures are reported as [`AppError::ParseError`] too.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AppError> {
        let envelope: AccessEnvelope = serde_json::from_reader(reader).map_err(|e| {
            warn!("Failed to read V2 auth response: {}", e);
            AppError::ParseError(e.to_string())
        })?;
        envelope.access.log_decoded();
        Ok(envelope.access)
    }

    fn log_decoded(&self) {
        debug!(
            "Decoded V2 auth response for user {} with {} catalog entries",
            self.user.name,
            self.service_catalog.len()
        );
    }
}

/// Decodes an identity V2 authentication response body
///
/// See [`AuthResponse::from_slice`].
pub fn parse_auth_response(bytes: &[u8]) -> Result<AuthResponse, AppError> {
    AuthResponse::from_slice(bytes)
}
