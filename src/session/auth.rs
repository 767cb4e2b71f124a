/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::DEFAULT_SERVICE_TYPE;
use crate::error::AppError;
use crate::model::auth::{AuthResponse, parse_auth_response};
use crate::model::catalog::EndpointInterface;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Authenticated V2 session
///
/// Pairs a decoded [`AuthResponse`] with the region preference of the
/// connection that owns it. Both are fixed for the lifetime of the session;
/// re-authenticating produces a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct V2Session {
    /// Decoded authentication response
    pub auth: AuthResponse,
    /// Region preference; empty takes the first endpoint of a service
    pub region: String,
}

impl V2Session {
    /// Creates a session from an already decoded response
    pub fn new(auth: AuthResponse, region: impl Into<String>) -> Self {
        Self {
            auth,
            region: region.into(),
        }
    }

    /// Decodes `bytes` and wraps the result in a session
    ///
    /// # Arguments
    /// * `bytes` - Raw authentication response body
    /// * `region` - Region preference of the caller, may be empty
    pub fn from_response(bytes: &[u8], region: impl Into<String>) -> Result<Self, AppError> {
        let session = Self::new(parse_auth_response(bytes)?, region);
        debug!(
            "Created V2 session for tenant '{}' (region preference '{}')",
            session.tenant_id(),
            session.region
        );
        Ok(session)
    }

    /// Returns a session that prefers the user's default region
    ///
    /// Used when the caller has no region of its own configured.
    pub fn with_default_region(auth: AuthResponse) -> Self {
        let region = auth.user.default_region.clone();
        Self::new(auth, region)
    }

    /// Token to send as `X-Auth-Token`
    pub fn auth_token(&self) -> &str {
        &self.auth.token.id
    }

    /// Tenant identifier the token is scoped to
    pub fn tenant_id(&self) -> &str {
        self.auth.token.tenant_id()
    }

    /// Token expiry, if the server sent a parseable one
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.auth.token.expires_at()
    }

    /// Public URL of `service_type` for this session's region
    ///
    /// Empty if the catalog offers nothing that matches.
    pub fn endpoint_url(&self, service_type: &str) -> &str {
        self.auth.endpoint_url(service_type, &self.region)
    }

    /// URL of `service_type` for this session's region and the given interface
    pub fn endpoint_url_for(&self, service_type: &str, interface: EndpointInterface) -> &str {
        self.auth.endpoint_url_for(service_type, &self.region, interface)
    }

    /// Object storage URL for this session's region
    pub fn storage_url(&self) -> &str {
        let url = self.endpoint_url(DEFAULT_SERVICE_TYPE);
        if url.is_empty() {
            warn!(
                "No {} endpoint for region '{}', available: {:?}",
                DEFAULT_SERVICE_TYPE,
                self.region,
                self.auth.regions(DEFAULT_SERVICE_TYPE)
            );
        }
        url
    }
}
