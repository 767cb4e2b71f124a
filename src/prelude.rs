/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # swift-auth Prelude
//!
//! Brings the commonly used types and functions into scope.
//!
//! ```rust
//! use swift_auth::prelude::*;
//!
//! let request = V2AuthRequest::new("user", "key", "");
//! assert_eq!(request.username(), "user");
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Configuration loaded from the environment
pub use crate::application::config::{Config, Credentials};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// REQUEST AND RESPONSE MODELS
// ============================================================================

/// Credential request models
pub use crate::model::requests::{
    ApiKeyCredentials, AuthCredentials, PasswordCredentials, V2AuthRequest, build_auth_request,
};

/// Authentication response models
pub use crate::model::auth::{
    AuthResponse, CatalogEntry, Endpoint, Role, Tenant, Token, User, parse_auth_response,
};

/// Endpoint resolution
pub use crate::model::catalog::{EndpointInterface, resolve_endpoint};

// ============================================================================
// SESSION AND UTILITIES
// ============================================================================

/// Session holder
pub use crate::session::auth::V2Session;

/// Logger setup
pub use crate::utils::logger::setup_logger;
