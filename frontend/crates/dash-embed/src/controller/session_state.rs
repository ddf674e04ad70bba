use std::fmt;

use serde::Serialize;

/// Lifecycle of the dashboard session shown in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// No session, and no async work scheduled
    Idle,
    /// Waiting for the token fetch and the embedding collaborator
    Loading,
    /// Frame attached and tracked
    Ready,
    /// Mount failed; the container stays empty until the next reload
    Failed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Loading => "loading",
            SessionState::Ready => "ready",
            SessionState::Failed => "failed",
        };
        f.write_str(name)
    }
}
