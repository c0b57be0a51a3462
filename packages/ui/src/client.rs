//! Shared REST client constructor for all platforms.
//!
//! The base URL is resolved in this order:
//! - `STUDENTS_API_URL` from the environment (`.env` honoured via `dotenvy` on
//!   native; fixed at compile time on web)
//! - **Desktop / Mobile**: `<config_dir>/student-roster/roster.toml`
//! - the built-in default, `http://localhost:8080/students`

use api::{ApiError, HttpStudentApi};
use store::RosterConfig;

#[cfg(not(target_arch = "wasm32"))]
const BASE_URL_VAR: &str = "STUDENTS_API_URL";

/// Resolve the client configuration for this platform.
pub fn load_config() -> RosterConfig {
    #[cfg(target_arch = "wasm32")]
    {
        RosterConfig::default()
            .with_base_url_override(option_env!("STUDENTS_API_URL").map(String::from))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        read_config_file().with_base_url_override(std::env::var(BASE_URL_VAR).ok())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> RosterConfig {
    let Some(path) = dirs::config_dir()
        .map(|d| d.join("student-roster").join(RosterConfig::filename()))
    else {
        return RosterConfig::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(text) => RosterConfig::from_toml(&text).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            RosterConfig::default()
        }),
        Err(_) => RosterConfig::default(),
    }
}

/// Create the REST client from the resolved configuration.
pub fn make_client() -> Result<HttpStudentApi, ApiError> {
    let config = load_config();
    tracing::info!(base_url = %config.api.base_url, "Using students API");
    HttpStudentApi::from_config(&config)
}
