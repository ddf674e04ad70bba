use crate::controller::{
    ControllerEvent, ControllerSettings, DisplayState, SessionFence, SessionGeneration, SessionId,
    SessionOutcome, SessionState,
};
use crate::{
    DashboardMount, EmbedError, EmbeddedDashboard, Embedder, GuestTokenClient, MountTarget,
    ResizeKeeper, UserIdentity, Viewport, describe,
};

use std::sync::{Arc, Mutex, PoisonError};

use dash_config::Config;
use log::{debug, error, info, warn};
use tokio::sync::{Mutex as AsyncMutex, broadcast, watch};

const EVENT_CAPACITY: usize = 64;

/// Top-level coordinator of the embedded dashboard view.
///
/// Every switch is a full teardown and remount: the previous resize loop is
/// stopped and the container cleared before the new session mounts. Each
/// switch gets a fresh [`SessionId`]; completions from superseded sessions
/// are discarded instead of applied. Cloning yields another handle to the
/// same controller.
#[derive(Clone)]
pub struct UserSwitchController {
    inner: Arc<Inner>,
}

struct Inner {
    mount: DashboardMount,
    container: Arc<dyn MountTarget>,
    settings: ControllerSettings,
    generation: SessionGeneration,
    selection: Mutex<String>,
    keeper: AsyncMutex<ResizeKeeper>,
    display: watch::Sender<DisplayState>,
    events: broadcast::Sender<ControllerEvent>,
}

impl UserSwitchController {
    pub fn new(
        mount: DashboardMount,
        keeper: ResizeKeeper,
        container: Arc<dyn MountTarget>,
        settings: ControllerSettings,
    ) -> Self {
        let (display, _) = watch::channel(DisplayState::idle(settings.default_user.clone()));
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            inner: Arc::new(Inner {
                mount,
                container,
                selection: Mutex::new(settings.default_user.as_str().to_string()),
                settings,
                generation: SessionGeneration::default(),
                keeper: AsyncMutex::new(keeper),
                display,
                events,
            }),
        }
    }

    /// Wire a controller from loaded configuration.
    pub fn from_config(
        config: &Config,
        embedder: Arc<dyn Embedder>,
        container: Arc<dyn MountTarget>,
        viewport: watch::Receiver<Viewport>,
    ) -> Self {
        let tokens = Arc::new(GuestTokenClient::from_config(&config.guest_token));
        let mount = DashboardMount::from_config(&config.dashboard, embedder, tokens);
        let keeper = ResizeKeeper::from_config(&config.resize, viewport);

        Self::new(
            mount,
            keeper,
            container,
            ControllerSettings::from_config(config),
        )
    }

    // =========================================================================
    // UI surface
    // =========================================================================

    /// Initial view attach: load the dashboard for the current selection.
    pub async fn attach(&self) -> SessionOutcome {
        let user = self.selected_user();
        info!("View attached, loading dashboard for {user}");
        self.switch_user(user).await
    }

    /// Record the selection-control value without reloading.
    pub fn select_user(&self, selection: &str) {
        *self
            .inner
            .selection
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = selection.to_string();
    }

    /// User the next reload will load. An empty selection means the default user.
    pub fn selected_user(&self) -> UserIdentity {
        let selection = self
            .inner
            .selection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        UserIdentity::from_selection(&selection, &self.inner.settings.default_user)
    }

    /// Reload trigger: switch to the selected user.
    pub async fn reload(&self) -> SessionOutcome {
        let user = self.selected_user();
        self.switch_user(user).await
    }

    /// Tear down the current session and mount the dashboard for `user`.
    ///
    /// Never fails: token and embedding errors end in `Failed` and are
    /// logged, and a switch overtaken by a newer one ends in `Superseded`.
    pub async fn switch_user(&self, user: UserIdentity) -> SessionOutcome {
        let fence = self.begin_session(&user);
        let session = fence.session();

        // The old loop must be gone before the new session can start one.
        self.dispose_resize().await;
        if fence.is_current() {
            self.inner.container.clear();
        }

        let delay = self.inner.settings.load_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if !fence.is_current() {
            return self.discard(session);
        }

        let result = self
            .inner
            .mount
            .mount_fenced(
                Some(Arc::clone(&self.inner.container)),
                &self.inner.settings.dashboard_id,
                &user,
                Some(fence.clone()),
            )
            .await;

        match result {
            Ok(dashboard) => self.finish_ready(&fence, &user, dashboard).await,
            Err(err) => self.finish_failed(&fence, &user, err),
        }
    }

    /// Component teardown: stop tracking, clear the container and go Idle.
    ///
    /// In-flight mounts are superseded and discarded when they complete.
    pub async fn teardown(&self) {
        let fence = self.inner.generation.advance();
        let session = fence.session();

        self.dispose_resize().await;
        self.inner.container.clear();

        let mut user = None;
        self.inner.display.send_if_modified(|current| {
            if current.session > session {
                return false;
            }
            current.session = session;
            current.state = SessionState::Idle;
            user = Some(current.user.clone());
            true
        });

        if let Some(user) = user {
            self.emit(ControllerEvent::StateChanged {
                session,
                user,
                state: SessionState::Idle,
            });
        }

        info!("Dashboard view torn down (session {session})");
    }

    // =========================================================================
    // Observation
    // =========================================================================

    pub fn display(&self) -> DisplayState {
        self.inner.display.borrow().clone()
    }

    pub fn state(&self) -> SessionState {
        self.inner.display.borrow().state
    }

    pub fn current_session(&self) -> SessionId {
        self.inner.generation.current()
    }

    pub fn subscribe_display(&self) -> watch::Receiver<DisplayState> {
        self.inner.display.subscribe()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ControllerEvent> {
        self.inner.events.subscribe()
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    fn begin_session(&self, user: &UserIdentity) -> SessionFence {
        let fence = self.inner.generation.advance();
        let session = fence.session();
        let policy = describe(user);

        let next = DisplayState {
            session,
            user: user.clone(),
            policy,
            state: SessionState::Loading,
        };
        self.inner.display.send_if_modified(|current| {
            if current.session >= session {
                return false;
            }
            *current = next;
            true
        });

        self.emit(ControllerEvent::StateChanged {
            session,
            user: user.clone(),
            state: SessionState::Loading,
        });
        info!("Switching to {user} [{policy}] in session {session}");

        fence
    }

    async fn finish_ready(
        &self,
        fence: &SessionFence,
        user: &UserIdentity,
        dashboard: EmbeddedDashboard,
    ) -> SessionOutcome {
        let session = fence.session();

        {
            let mut keeper = self.inner.keeper.lock().await;
            if !fence.is_current() {
                return self.discard(session);
            }

            if let Some(previous) = keeper
                .start(Arc::clone(&self.inner.container), session)
                .await
            {
                warn!("Resize loop of session {previous} was still running");
                self.emit(ControllerEvent::ResizeStopped { session: previous });
            }
            self.emit(ControllerEvent::ResizeStarted { session });
        }

        if !self.publish_state(session, user, SessionState::Ready) {
            // The newer session stops the loop started above.
            return self.discard(session);
        }

        info!("Dashboard ready for {user}: {}", dashboard.src);
        SessionOutcome::Ready
    }

    fn finish_failed(
        &self,
        fence: &SessionFence,
        user: &UserIdentity,
        err: EmbedError,
    ) -> SessionOutcome {
        let session = fence.session();
        if !fence.is_current() {
            debug!("Ignoring failure of superseded session {session}: {err}");
            return self.discard(session);
        }

        error!("Dashboard load error for {user}: {err}");
        self.inner.container.clear();

        if !self.publish_state(session, user, SessionState::Failed) {
            return self.discard(session);
        }

        SessionOutcome::failed(&err)
    }

    fn discard(&self, session: SessionId) -> SessionOutcome {
        debug!("Discarding completion of superseded session {session}");
        self.emit(ControllerEvent::SessionDiscarded { session });
        SessionOutcome::Superseded
    }

    /// Set the state of `session` if it is still the displayed one.
    fn publish_state(&self, session: SessionId, user: &UserIdentity, state: SessionState) -> bool {
        let mut applied = false;
        self.inner.display.send_if_modified(|current| {
            if current.session != session {
                return false;
            }
            current.state = state;
            applied = true;
            true
        });

        if applied {
            self.emit(ControllerEvent::StateChanged {
                session,
                user: user.clone(),
                state,
            });
        }
        applied
    }

    async fn dispose_resize(&self) {
        let stopped = {
            let mut keeper = self.inner.keeper.lock().await;
            keeper.stop().await
        };

        if let Some(session) = stopped {
            self.emit(ControllerEvent::ResizeStopped { session });
        }
    }

    fn emit(&self, event: ControllerEvent) {
        // No subscribers is fine.
        let _ = self.inner.events.send(event);
    }
}
