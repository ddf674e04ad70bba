use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GUEST_TOKEN_ENDPOINT, DEFAULT_USER_HEADER,
    validate_http_url,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GuestTokenConfig {
    /// POST endpoint issuing guest tokens
    pub endpoint: String,
    /// Header carrying the selected user identity
    pub user_header: String,
}

impl Default for GuestTokenConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_GUEST_TOKEN_ENDPOINT),
            user_header: String::from(DEFAULT_USER_HEADER),
        }
    }
}

impl GuestTokenConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        validate_http_url("guest_token.endpoint", &self.endpoint)?;

        let header_ok = !self.user_header.is_empty()
            && self
                .user_header
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if !header_ok {
            return Err(ConfigError::config(format!(
                "guest_token.user_header must be a non-empty header name, got '{}'",
                self.user_header
            )));
        }

        Ok(())
    }
}
