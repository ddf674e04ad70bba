mod config;
mod dashboard_config;
mod error;
mod guest_token_config;
mod log_level;
mod logging_config;
mod resize_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use dashboard_config::DashboardConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use guest_token_config::GuestTokenConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use resize_config::ResizeConfig;
pub use session_config::SessionConfig;

const DEFAULT_DASHBOARD_ID: &str = "078c015e-3464-46a3-b75b-0caefddafb6a";
const DEFAULT_SUPERSET_DOMAIN: &str = "http://localhost:8088";
const DEFAULT_CONTAINER_ID: &str = "superset-container";
const DEFAULT_GUEST_TOKEN_ENDPOINT: &str = "http://localhost:3000/api/superset/guest-token";
const DEFAULT_USER_HEADER: &str = "x-user-id";
const DEFAULT_USER: &str = "admin";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

/// Validates that a configured URL is non-empty and uses an http(s) scheme.
fn validate_http_url(field: &str, value: &str) -> ConfigErrorResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::config(format!("{field} cannot be empty")));
    }

    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::config(format!(
            "{field} must start with http:// or https://, got {value}"
        )));
    }

    Ok(())
}
