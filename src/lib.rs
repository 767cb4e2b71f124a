/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # swift-auth
//!
//! Identity V2 authentication for Swift object storage clients.
//!
//! The crate covers the two ends of the handshake that sit around the HTTP
//! transport:
//!
//! - building the credential request body (API key and password credentials
//!   are always sent side by side, the identity service picks the one that
//!   matches the account)
//! - decoding the `access` response and resolving a base URL from its service
//!   catalog for a service type and an optional region
//!
//! ```rust
//! use swift_auth::prelude::*;
//!
//! let body = build_auth_request("user", "api-key", "").unwrap();
//! assert!(!body.is_empty());
//!
//! let json = br#"{"access": {"serviceCatalog": [{"type": "object-store",
//!     "endpoints": [{"region": "DFW", "publicURL": "https://dfw.example"}]}]}}"#;
//! let auth = parse_auth_response(json).unwrap();
//! assert_eq!(resolve_endpoint(&auth, "object-store", ""), "https://dfw.example");
//! assert_eq!(resolve_endpoint(&auth, "object-store", "ORD"), "");
//! ```

/// Configuration loaded from the environment
pub mod application;
/// Service and endpoint defaults
pub mod constants;
/// Library error type
pub mod error;
/// Request and response models
pub mod model;
/// Commonly used types and functions
pub mod prelude;
/// Session holder pairing a decoded response with a region preference
pub mod session;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
