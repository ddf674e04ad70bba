mod embedded_frame;
mod frame_style;
mod headless_container;
mod mount_target;
mod viewport;

pub use embedded_frame::EmbeddedFrame;
pub use frame_style::{FramePosition, FrameStyle};
pub use headless_container::HeadlessContainer;
pub use mount_target::MountTarget;
pub use viewport::Viewport;
