use crate::{EmbedError, EmbedResult, GuestToken, UserIdentity};

use dash_config::GuestTokenConfig;
use log::{debug, info, warn};
use reqwest::Client as ReqwestClient;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

const DEFAULT_USER_HEADER: &str = "x-user-id";

/// HTTP client for the guest-token issuing service.
///
/// No internal timeout or retry: a hung request stalls only the session
/// that issued it, and failures are surfaced to the caller as-is.
#[derive(Debug, Clone)]
pub struct GuestTokenClient {
    endpoint: String,
    user_header: String,
    client: ReqwestClient,
}

impl GuestTokenClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the token endpoint
    ///   (e.g., "http://localhost:3000/api/superset/guest-token")
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            user_header: String::from(DEFAULT_USER_HEADER),
            client: ReqwestClient::new(),
        }
    }

    pub fn from_config(config: &GuestTokenConfig) -> Self {
        Self::new(&config.endpoint).with_user_header(&config.user_header)
    }

    /// Override the header carrying the user identity.
    pub fn with_user_header(mut self, header: &str) -> Self {
        self.user_header = header.to_string();
        self
    }

    /// Request a guest token scoped to `user` for `dashboard_id`.
    ///
    /// The identity travels both in the user header and in the JSON body.
    /// Non-2xx responses fail with `TokenFetch`, bodies without a `token`
    /// string fail with `TokenFormat`.
    pub async fn fetch_token(
        &self,
        user: &UserIdentity,
        dashboard_id: &str,
    ) -> EmbedResult<GuestToken> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct GuestTokenRequest<'a> {
            dashboard_id: &'a str,
            username: &'a str,
        }

        #[derive(Deserialize)]
        struct GuestTokenResponse {
            token: Option<String>,
        }

        debug!("Requesting guest token for {user} from {}", self.endpoint);

        let body = GuestTokenRequest {
            dashboard_id,
            username: user.as_str(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(self.user_header.as_str(), user.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Guest token request for {user} rejected: {status}");
            return Err(EmbedError::token_fetch(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let parsed: GuestTokenResponse = serde_json::from_slice(&bytes)
            .map_err(|e| EmbedError::token_format(format!("invalid JSON body: {e}")))?;

        let token = parsed
            .token
            .filter(|token| !token.is_empty())
            .map(GuestToken::new)
            .ok_or_else(|| EmbedError::token_format("response body has no 'token' field"))?;

        info!("Guest token received for {user}: {}", token.preview());
        Ok(token)
    }
}
