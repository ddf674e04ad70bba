use crate::embedder::{DashboardUiConfig, EmbedRequest, EmbeddedDashboard, Embedder};
use crate::{EmbedError, EmbedResult, EmbeddedFrame};

use async_trait::async_trait;
use log::debug;

/// Frame source for an embedded dashboard.
pub fn embedded_src(domain: &str, dashboard_id: &str, ui_config: DashboardUiConfig) -> String {
    format!(
        "{}/embedded/{}?uiConfig={}",
        domain.trim_end_matches('/'),
        dashboard_id,
        ui_config.url_flags()
    )
}

/// Renders the dashboard as a single frame pointing at the embedded route.
///
/// The guest token is fetched before anything is rendered, so a failed
/// token request leaves the container untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IframeEmbedder;

impl IframeEmbedder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Embedder for IframeEmbedder {
    async fn embed(&self, request: EmbedRequest) -> EmbedResult<EmbeddedDashboard> {
        let token = request.token_provider.fetch_guest_token().await?;

        if !request.mount_point.is_attached() {
            return Err(EmbedError::embedding(format!(
                "mount point '{}' was detached while fetching the guest token",
                request.mount_point.element_id()
            )));
        }

        let src = embedded_src(&request.domain, &request.dashboard_id, request.ui_config);
        debug!("Attaching frame {src} to #{}", request.mount_point.element_id());

        request
            .mount_point
            .attach_frame(EmbeddedFrame::new(src.clone(), token));

        Ok(EmbeddedDashboard {
            dashboard_id: request.dashboard_id,
            src,
        })
    }
}
