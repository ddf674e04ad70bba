use crate::EmbedError;

use serde::Serialize;

/// Result of one user switch, as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SessionOutcome {
    Ready,
    /// The mount failed and the container was left empty
    Failed {
        /// Error text without source location
        error: String,
        recovery_hint: String,
        /// Whether pressing reload may succeed
        transient: bool,
    },
    /// A newer switch started before this one completed
    Superseded,
}

impl SessionOutcome {
    pub fn failed(err: &EmbedError) -> Self {
        SessionOutcome::Failed {
            error: err.user_message(),
            recovery_hint: err.recovery_hint().to_string(),
            transient: err.is_transient(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SessionOutcome::Ready)
    }
}
