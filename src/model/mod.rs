/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Authentication response models
pub mod auth;
/// Endpoint resolution over the service catalog
pub mod catalog;
/// Credential request models
pub mod requests;
pub mod serialization;
