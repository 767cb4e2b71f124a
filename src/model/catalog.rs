/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Endpoint resolution over a decoded service catalog
//!
//! Resolution is a single first-match walk: catalog entries of the requested
//! type are visited in response order, and within each entry the first
//! endpoint whose region matches wins. An empty region preference matches any
//! endpoint, so the first endpoint of the first matching entry is the default.
//! When nothing matches the result is an empty string; callers decide whether
//! that is fatal.

use crate::model::auth::{AuthResponse, CatalogEntry, Endpoint};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Which URL of an endpoint to hand back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointInterface {
    /// The public URL
    #[default]
    Public,
    /// The internal (service network) URL
    Internal,
}

impl Endpoint {
    /// Returns true if this endpoint satisfies `preferred_region`
    ///
    /// An empty preference matches every endpoint.
    pub fn matches_region(&self, preferred_region: &str) -> bool {
        preferred_region.is_empty() || self.region == preferred_region
    }

    /// URL for the requested interface
    pub fn url(&self, interface: EndpointInterface) -> &str {
        match interface {
            EndpointInterface::Public => &self.public_url,
            EndpointInterface::Internal => &self.internal_url,
        }
    }
}

impl AuthResponse {
    /// Catalog entries of `service_type`, in response order
    pub fn catalog_entries<'a, 's>(
        &'a self,
        service_type: &'s str,
    ) -> impl Iterator<Item = &'a CatalogEntry> + use<'a, 's> {
        self.service_catalog
            .iter()
            .filter(move |entry| entry.service_type == service_type)
    }

    /// Finds the first endpoint of `service_type` matching `preferred_region`
    pub fn find_endpoint(&self, service_type: &str, preferred_region: &str) -> Option<&Endpoint> {
        self.catalog_entries(service_type).find_map(|entry| {
            entry
                .endpoints
                .iter()
                .find(|endpoint| endpoint.matches_region(preferred_region))
        })
    }

    /// Resolves the public URL for `service_type` in `preferred_region`
    ///
    /// # Arguments
    /// * `service_type` - Catalog type to look for (e.g. "object-store")
    /// * `preferred_region` - Region to match; empty takes the first endpoint
    ///
    /// # Returns
    /// The endpoint URL, or an empty string if nothing matched
    pub fn endpoint_url(&self, service_type: &str, preferred_region: &str) -> &str {
        self.endpoint_url_for(service_type, preferred_region, EndpointInterface::Public)
    }

    /// Same as [`AuthResponse::endpoint_url`] but for a chosen interface
    pub fn endpoint_url_for(
        &self,
        service_type: &str,
        preferred_region: &str,
        interface: EndpointInterface,
    ) -> &str {
        match self.find_endpoint(service_type, preferred_region) {
            Some(endpoint) => {
                trace!(
                    "Resolved {} endpoint in region '{}' ({:?}): {}",
                    service_type,
                    endpoint.region,
                    interface,
                    endpoint.url(interface)
                );
                endpoint.url(interface)
            }
            None => {
                debug!(
                    "No {} endpoint found for region '{}'",
                    service_type, preferred_region
                );
                ""
            }
        }
    }

    /// Distinct non-empty regions offered for `service_type`, first seen first
    pub fn regions(&self, service_type: &str) -> Vec<String> {
        let mut regions: Vec<String> = Vec::new();
        for endpoint in self
            .catalog_entries(service_type)
            .flat_map(|entry| entry.endpoints.iter())
        {
            if !endpoint.region.is_empty() && !regions.contains(&endpoint.region) {
                regions.push(endpoint.region.clone());
            }
        }
        regions
    }
}

/// Resolves the public URL of `service_type` from a decoded response
///
/// See [`AuthResponse::endpoint_url`].
pub fn resolve_endpoint<'a>(
    response: &'a AuthResponse,
    service_type: &str,
    preferred_region: &str,
) -> &'a str {
    response.endpoint_url(service_type, preferred_region)
}
