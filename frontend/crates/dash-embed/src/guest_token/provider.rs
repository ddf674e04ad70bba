use crate::{EmbedResult, GuestToken, GuestTokenClient, UserIdentity};

use std::sync::Arc;

use async_trait::async_trait;

/// Token-provider callback handed to the embedding collaborator.
///
/// The collaborator calls it whenever it needs a (fresh) guest token.
#[async_trait]
pub trait GuestTokenProvider: Send + Sync {
    async fn fetch_guest_token(&self) -> EmbedResult<GuestToken>;
}

/// Provider bound to one user and dashboard.
#[derive(Debug, Clone)]
pub struct UserTokenProvider {
    client: Arc<GuestTokenClient>,
    user: UserIdentity,
    dashboard_id: String,
}

impl UserTokenProvider {
    pub fn new(client: Arc<GuestTokenClient>, user: UserIdentity, dashboard_id: &str) -> Self {
        Self {
            client,
            user,
            dashboard_id: dashboard_id.to_string(),
        }
    }
}

#[async_trait]
impl GuestTokenProvider for UserTokenProvider {
    async fn fetch_guest_token(&self) -> EmbedResult<GuestToken> {
        self.client.fetch_token(&self.user, &self.dashboard_id).await
    }
}
