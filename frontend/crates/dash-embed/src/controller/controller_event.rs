use crate::{SessionId, SessionState, UserIdentity};

use serde::Serialize;

/// Lifecycle notifications published by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ControllerEvent {
    StateChanged {
        session: SessionId,
        user: UserIdentity,
        state: SessionState,
    },
    ResizeStarted {
        session: SessionId,
    },
    ResizeStopped {
        session: SessionId,
    },
    /// A mount finished after a newer switch and was thrown away
    SessionDiscarded {
        session: SessionId,
    },
}
