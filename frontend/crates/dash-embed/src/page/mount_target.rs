use crate::{EmbeddedFrame, FrameStyle};

/// The container element the dashboard is mounted into.
///
/// Implementations use interior mutability: the container is shared between
/// the mount, the resize loop and the embedding collaborator.
pub trait MountTarget: Send + Sync {
    /// Element id, used in diagnostics.
    fn element_id(&self) -> &str;

    /// Whether the element is live in the page.
    fn is_attached(&self) -> bool;

    /// Remove all content.
    fn clear(&self);

    /// Replace the content with `frame`.
    fn attach_frame(&self, frame: EmbeddedFrame);

    /// Snapshot of the rendered frame, if any.
    fn frame(&self) -> Option<EmbeddedFrame>;

    /// Overwrite the frame's inline style. Returns false when there is no frame.
    fn restyle_frame(&self, style: FrameStyle) -> bool;
}
