/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Service type under which object storage is published in the catalog
pub const DEFAULT_SERVICE_TYPE: &str = "object-store";
/// Default identity endpoint for V2 authentication
pub const DEFAULT_AUTH_URL: &str = "https://identity.api.rackspacecloud.com/v2.0";
/// Path appended to the identity endpoint to request a token
pub const TOKENS_PATH: &str = "tokens";
