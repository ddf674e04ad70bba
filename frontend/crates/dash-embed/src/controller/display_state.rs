use crate::{PolicyDescriptor, SessionId, SessionState, UserIdentity, describe};

use serde::Serialize;

/// What the page shows: the current user name, its policy text and the
/// session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub session: SessionId,
    pub user: UserIdentity,
    pub policy: PolicyDescriptor,
    pub state: SessionState,
}

impl DisplayState {
    pub(crate) fn idle(user: UserIdentity) -> Self {
        Self {
            session: SessionId::NONE,
            policy: describe(&user),
            user,
            state: SessionState::Idle,
        }
    }
}
