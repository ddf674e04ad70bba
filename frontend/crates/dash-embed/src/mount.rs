use crate::controller::SessionFence;
use crate::{
    DashboardUiConfig, EmbedError, EmbedRequest, EmbedResult, EmbeddedDashboard, EmbeddedFrame,
    Embedder, FrameStyle, GuestTokenClient, MountTarget, UserIdentity, UserTokenProvider,
};

use std::sync::Arc;

use dash_config::DashboardConfig;
use log::{debug, info};

const DEFAULT_CONTAINER_ID: &str = "superset-container";

/// Mounts the dashboard for one user into a container via the embedding
/// collaborator.
#[derive(Clone)]
pub struct DashboardMount {
    embedder: Arc<dyn Embedder>,
    tokens: Arc<GuestTokenClient>,
    domain: String,
    ui_config: DashboardUiConfig,
    /// Element id reported when no container is supplied
    container_id: String,
}

impl DashboardMount {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        tokens: Arc<GuestTokenClient>,
        domain: &str,
        ui_config: DashboardUiConfig,
    ) -> Self {
        Self {
            embedder,
            tokens,
            domain: domain.to_string(),
            ui_config,
            container_id: String::from(DEFAULT_CONTAINER_ID),
        }
    }

    pub fn with_container_id(mut self, container_id: &str) -> Self {
        self.container_id = container_id.to_string();
        self
    }

    pub fn from_config(
        config: &DashboardConfig,
        embedder: Arc<dyn Embedder>,
        tokens: Arc<GuestTokenClient>,
    ) -> Self {
        Self::new(
            embedder,
            tokens,
            &config.superset_domain,
            DashboardUiConfig::from_config(config),
        )
        .with_container_id(&config.container_id)
    }

    /// Clear `container` and embed the dashboard for `user` into it.
    ///
    /// The collaborator receives a token provider bound to `user`; any token
    /// or embedding failure is returned unchanged and never retried.
    pub async fn mount(
        &self,
        container: Option<Arc<dyn MountTarget>>,
        dashboard_id: &str,
        user: &UserIdentity,
    ) -> EmbedResult<EmbeddedDashboard> {
        self.mount_fenced(container, dashboard_id, user, None).await
    }

    pub(crate) async fn mount_fenced(
        &self,
        container: Option<Arc<dyn MountTarget>>,
        dashboard_id: &str,
        user: &UserIdentity,
        fence: Option<SessionFence>,
    ) -> EmbedResult<EmbeddedDashboard> {
        let container = match container {
            Some(container) if container.is_attached() => container,
            Some(container) => {
                return Err(EmbedError::container_missing(container.element_id()));
            }
            None => return Err(EmbedError::container_missing(&self.container_id)),
        };

        info!("Loading dashboard for user: {user}");

        let mount_point: Arc<dyn MountTarget> = match fence {
            Some(fence) => Arc::new(FencedMountTarget {
                inner: container,
                fence,
            }),
            None => container,
        };
        mount_point.clear();

        let provider = UserTokenProvider::new(Arc::clone(&self.tokens), user.clone(), dashboard_id);

        let request = EmbedRequest {
            dashboard_id: dashboard_id.to_string(),
            domain: self.domain.clone(),
            mount_point,
            token_provider: Arc::new(provider),
            ui_config: self.ui_config,
        };

        let dashboard = self.embedder.embed(request).await?;
        debug!("Dashboard {} mounted for {user}", dashboard.dashboard_id);

        Ok(dashboard)
    }
}

/// Container view that ignores writes once its session has been superseded.
struct FencedMountTarget {
    inner: Arc<dyn MountTarget>,
    fence: SessionFence,
}

impl MountTarget for FencedMountTarget {
    fn element_id(&self) -> &str {
        self.inner.element_id()
    }

    fn is_attached(&self) -> bool {
        self.inner.is_attached()
    }

    fn clear(&self) {
        if self.fence.is_current() {
            self.inner.clear();
        }
    }

    fn attach_frame(&self, frame: EmbeddedFrame) {
        if self.fence.is_current() {
            self.inner.attach_frame(frame);
        } else {
            debug!(
                "Dropping frame from superseded session {}",
                self.fence.session()
            );
        }
    }

    fn frame(&self) -> Option<EmbeddedFrame> {
        self.inner.frame()
    }

    fn restyle_frame(&self, style: FrameStyle) -> bool {
        self.fence.is_current() && self.inner.restyle_frame(style)
    }
}
