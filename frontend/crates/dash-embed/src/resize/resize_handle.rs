use crate::{FrameStyle, MountTarget, SessionId, Viewport};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, trace};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Disposal handle for one running frame-tracking loop.
///
/// The loop owns a viewport receiver, which is its resize listener; stopping
/// the handle ends the interval and drops the listener. Dropping the handle
/// without `stop` still aborts the loop.
#[derive(Debug)]
pub struct ResizeHandle {
    session: SessionId,
    task: Option<JoinHandle<()>>,
}

impl ResizeHandle {
    /// Pin the frame once, then keep it pinned on every tick and resize.
    pub(crate) fn spawn(
        container: Arc<dyn MountTarget>,
        viewport: watch::Receiver<Viewport>,
        interval: Duration,
        session: SessionId,
    ) -> Self {
        let initial = *viewport.borrow();
        pin_frame(container.as_ref(), initial);

        let task = tokio::spawn(track_viewport(container, viewport, interval));
        debug!("Resize loop started for session {session}");

        Self {
            session,
            task: Some(task),
        }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Cancel the loop and wait until its listener is gone.
    pub async fn stop(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            // Cancellation drops the loop future, and with it the receiver.
            let _ = task.await;
            debug!("Resize loop stopped for session {}", self.session);
        }
    }
}

impl Drop for ResizeHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn pin_frame(container: &dyn MountTarget, viewport: Viewport) -> bool {
    let pinned = container.restyle_frame(FrameStyle::fill(viewport));
    if !pinned {
        trace!("No frame in #{} to pin yet", container.element_id());
    }
    pinned
}

async fn track_viewport(
    container: Arc<dyn MountTarget>,
    mut viewport: watch::Receiver<Viewport>,
    interval: Duration,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut listening = true;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            changed = viewport.changed(), if listening => {
                if changed.is_err() {
                    debug!("Viewport source closed, falling back to interval only");
                    listening = false;
                }
            }
        }

        let current = *viewport.borrow_and_update();
        pin_frame(container.as_ref(), current);
    }
}
