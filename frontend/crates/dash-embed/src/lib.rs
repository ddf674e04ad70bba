//! Embedded dashboard session management.
//!
//! Maps simulated users to their row-level-security description, fetches a
//! guest token scoped to the selected user, mounts the dashboard frame into a
//! container and keeps the frame pinned to the viewport. The
//! [`UserSwitchController`] coordinates a full teardown and remount on every
//! user switch.

mod controller;
mod embedder;
mod error;
mod guest_token;
mod mount;
mod page;
mod policy;
mod resize;
mod user_identity;

#[cfg(test)]
mod tests;

pub use controller::{
    ControllerEvent, ControllerSettings, DisplayState, SessionId, SessionOutcome, SessionState,
    UserSwitchController,
};
pub use embedder::{
    DashboardUiConfig, EmbedRequest, EmbeddedDashboard, Embedder, IframeEmbedder, embedded_src,
};
pub use error::{EmbedError, EmbedResult};
pub use guest_token::{GuestToken, GuestTokenClient, GuestTokenProvider, UserTokenProvider};
pub use mount::DashboardMount;
pub use page::{EmbeddedFrame, FramePosition, FrameStyle, HeadlessContainer, MountTarget, Viewport};
pub use policy::{
    ADMIN_USER, PolicyDescriptionTable, PolicyDescriptor, PolicyShape, UNKNOWN_USER, describe,
};
pub use resize::{ResizeHandle, ResizeKeeper};
pub use user_identity::UserIdentity;
