/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::fmt;

/// Main error type for the library
///
/// Endpoint resolution never fails: a missing service or region is reported
/// as an empty URL, not as an error.
#[derive(Debug)]
pub enum AppError {
    /// The authentication request could not be encoded
    SerializationError(String),
    /// The authentication response is not valid or not shaped as expected
    ParseError(String),
    /// Any other JSON failure
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::SerializationError(msg) => write!(f, "serialization error: {msg}"),
            AppError::ParseError(msg) => write!(f, "parse error: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
