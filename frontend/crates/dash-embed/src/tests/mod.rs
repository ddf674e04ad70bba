mod errors;
mod mount;
mod policy_table;

use crate::{
    ControllerEvent, ControllerSettings, DashboardMount, DashboardUiConfig, EmbedError,
    EmbedRequest, EmbedResult, EmbeddedDashboard, EmbeddedFrame, Embedder, GuestToken,
    GuestTokenClient, GuestTokenProvider, HeadlessContainer, ResizeKeeper, UserIdentity,
    UserSwitchController, Viewport,
};

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{broadcast, watch};

pub(crate) const DASHBOARD_ID: &str = "078c015e-3464-46a3-b75b-0caefddafb6a";
pub(crate) const DOMAIN: &str = "http://localhost:8088";
pub(crate) const CONTAINER_ID: &str = "superset-container";
pub(crate) const RESIZE_INTERVAL: Duration = Duration::from_millis(20);

/// One scripted reaction of [`ScriptedEmbedder`].
#[derive(Debug, Clone)]
pub(crate) enum Step {
    Render { delay: Duration },
    Fail { delay: Duration, message: &'static str },
}

/// Embedder that renders `fake://{dashboard}/{call}` frames according to a
/// script, one step per call. An exhausted script renders immediately.
pub(crate) struct ScriptedEmbedder {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

impl ScriptedEmbedder {
    pub(crate) fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Embedder for ScriptedEmbedder {
    async fn embed(&self, request: EmbedRequest) -> EmbedResult<EmbeddedDashboard> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self
            .steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Step::Render {
                delay: Duration::ZERO,
            });

        match step {
            Step::Render { delay } => {
                tokio::time::sleep(delay).await;
                let src = format!("fake://{}/{}", request.dashboard_id, call);
                request
                    .mount_point
                    .attach_frame(EmbeddedFrame::new(src.clone(), GuestToken::new("fake")));
                Ok(EmbeddedDashboard {
                    dashboard_id: request.dashboard_id,
                    src,
                })
            }
            Step::Fail { delay, message } => {
                tokio::time::sleep(delay).await;
                Err(EmbedError::embedding(message))
            }
        }
    }
}

/// Token provider returning a fixed token.
pub(crate) struct FixedTokenProvider(pub(crate) &'static str);

#[async_trait]
impl GuestTokenProvider for FixedTokenProvider {
    async fn fetch_guest_token(&self) -> EmbedResult<GuestToken> {
        Ok(GuestToken::new(self.0))
    }
}

/// Token provider that always fails like a rejected HTTP request.
pub(crate) struct RejectingTokenProvider(pub(crate) u16);

#[async_trait]
impl GuestTokenProvider for RejectingTokenProvider {
    async fn fetch_guest_token(&self) -> EmbedResult<GuestToken> {
        Err(EmbedError::token_fetch(self.0))
    }
}

pub(crate) struct Harness {
    pub(crate) controller: UserSwitchController,
    pub(crate) container: Arc<HeadlessContainer>,
    pub(crate) viewport: watch::Sender<Viewport>,
    pub(crate) embedder: Arc<ScriptedEmbedder>,
}

/// Controller over a headless container and a scripted embedder, no load delay.
pub(crate) fn harness(steps: Vec<Step>) -> Harness {
    let container = Arc::new(HeadlessContainer::new(CONTAINER_ID));
    let (viewport, viewport_rx) = watch::channel(Viewport::new(1280, 720));
    let embedder = Arc::new(ScriptedEmbedder::new(steps));

    // Never contacted: the scripted embedder does not call the provider.
    let tokens = Arc::new(GuestTokenClient::new("http://127.0.0.1:9/guest-token"));
    let mount = DashboardMount::new(
        embedder.clone(),
        tokens,
        DOMAIN,
        DashboardUiConfig::default(),
    );
    let keeper = ResizeKeeper::new(viewport_rx, RESIZE_INTERVAL);
    let settings = ControllerSettings {
        dashboard_id: DASHBOARD_ID.to_string(),
        default_user: UserIdentity::new("admin"),
        load_delay: Duration::ZERO,
    };

    let controller = UserSwitchController::new(mount, keeper, container.clone(), settings);

    Harness {
        controller,
        container,
        viewport,
        embedder,
    }
}

/// Everything published so far.
pub(crate) fn drain(events: &mut broadcast::Receiver<ControllerEvent>) -> Vec<ControllerEvent> {
    let mut drained = Vec::new();
    while let Ok(event) = events.try_recv() {
        drained.push(event);
    }
    drained
}

/// Poll `check` for up to a second.
pub(crate) async fn eventually(mut check: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
