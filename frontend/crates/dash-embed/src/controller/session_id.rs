use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Monotonically increasing id of one dashboard session. 0 = none yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct SessionId(u64);

impl SessionId {
    pub const NONE: SessionId = SessionId(0);

    pub(crate) const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shared session counter. The newest issued id is the only current one.
#[derive(Debug, Clone, Default)]
pub(crate) struct SessionGeneration(Arc<AtomicU64>);

impl SessionGeneration {
    /// Issue a new id, superseding every earlier one.
    pub(crate) fn advance(&self) -> SessionFence {
        let session = SessionId::new(self.0.fetch_add(1, Ordering::SeqCst) + 1);
        SessionFence {
            generation: self.clone(),
            session,
        }
    }

    pub(crate) fn current(&self) -> SessionId {
        SessionId(self.0.load(Ordering::SeqCst))
    }
}

/// Proof of which session an async completion belongs to.
#[derive(Debug, Clone)]
pub(crate) struct SessionFence {
    generation: SessionGeneration,
    session: SessionId,
}

impl SessionFence {
    pub(crate) fn session(&self) -> SessionId {
        self.session
    }

    pub(crate) fn is_current(&self) -> bool {
        self.generation.current() == self.session
    }
}
