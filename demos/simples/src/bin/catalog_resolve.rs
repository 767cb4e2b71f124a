use std::fs::File;
use std::io::BufReader;
use swift_auth::prelude::*;
use swift_auth::utils::config::get_env_or_none;
use tracing::{error, info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    info!("Authenticating against {}", config.tokens_url());

    let body = config.auth_request_body()?;
    info!("Request body ready ({} bytes)", body.len());

    // The HTTP exchange is not part of this crate: read a saved response instead
    let Some(path) = get_env_or_none::<String>("SWIFT_AUTH_RESPONSE_FILE") else {
        warn!("SWIFT_AUTH_RESPONSE_FILE not set, nothing to resolve");
        return Ok(());
    };
    let auth = AuthResponse::from_reader(BufReader::new(File::open(&path)?))?;
    let session = V2Session::new(auth, config.region.clone());

    info!("Token expires at: {:?}", session.expires_at());
    let url = session.endpoint_url(&config.service_type);
    if url.is_empty() {
        error!(
            "No {} endpoint for region '{}', available regions: {:?}",
            config.service_type,
            config.region,
            session.auth.regions(&config.service_type)
        );
    } else {
        info!("Resolved {} endpoint: {}", config.service_type, url);
    }

    Ok(())
}
