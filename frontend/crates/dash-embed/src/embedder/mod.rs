mod dashboard_ui_config;
mod iframe_embedder;

pub use dashboard_ui_config::DashboardUiConfig;
pub use iframe_embedder::{IframeEmbedder, embedded_src};

use crate::{EmbedResult, GuestTokenProvider, MountTarget};

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

/// Everything the embedding collaborator needs to render one dashboard.
#[derive(Clone)]
pub struct EmbedRequest {
    pub dashboard_id: String,
    /// Origin serving the embedded dashboard
    pub domain: String,
    pub mount_point: Arc<dyn MountTarget>,
    pub token_provider: Arc<dyn GuestTokenProvider>,
    pub ui_config: DashboardUiConfig,
}

impl fmt::Debug for EmbedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbedRequest")
            .field("dashboard_id", &self.dashboard_id)
            .field("domain", &self.domain)
            .field("mount_point", &self.mount_point.element_id())
            .field("ui_config", &self.ui_config)
            .finish_non_exhaustive()
    }
}

/// Handle returned once the dashboard frame is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedDashboard {
    pub dashboard_id: String,
    pub src: String,
}

/// External SDK that renders the dashboard inside a container.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, request: EmbedRequest) -> EmbedResult<EmbeddedDashboard>;
}
