/// Authenticated session state built from a V2 auth response
pub mod auth;
