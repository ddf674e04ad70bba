use crate::{MountTarget, ResizeHandle, SessionId, Viewport};

use std::sync::Arc;
use std::time::Duration;

use dash_config::ResizeConfig;
use tokio::sync::watch;

/// Owns at most one frame-tracking loop.
///
/// `start` on a running keeper stops the previous loop first, so two loops
/// never race over the same container.
#[derive(Debug)]
pub struct ResizeKeeper {
    viewport: watch::Receiver<Viewport>,
    interval: Duration,
    active: Option<ResizeHandle>,
}

impl ResizeKeeper {
    pub fn new(viewport: watch::Receiver<Viewport>, interval: Duration) -> Self {
        Self {
            viewport,
            interval,
            active: None,
        }
    }

    pub fn from_config(config: &ResizeConfig, viewport: watch::Receiver<Viewport>) -> Self {
        Self::new(viewport, Duration::from_millis(config.interval_ms))
    }

    /// Spawn an unmanaged loop; the caller owns the returned handle.
    pub(crate) fn spawn(
        &self,
        container: Arc<dyn MountTarget>,
        session: SessionId,
    ) -> ResizeHandle {
        ResizeHandle::spawn(container, self.viewport.clone(), self.interval, session)
    }

    /// Start tracking `container` for `session`.
    ///
    /// Returns the session whose loop had to be stopped first, if any.
    pub async fn start(
        &mut self,
        container: Arc<dyn MountTarget>,
        session: SessionId,
    ) -> Option<SessionId> {
        let stopped = self.stop().await;
        self.active = Some(self.spawn(container, session));
        stopped
    }

    /// Stop the running loop. Returns its session, or None if idle.
    pub async fn stop(&mut self) -> Option<SessionId> {
        let handle = self.active.take()?;
        let session = handle.session();
        handle.stop().await;
        Some(session)
    }

    pub fn active_session(&self) -> Option<SessionId> {
        self.active.as_ref().map(ResizeHandle::session)
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }
}
