use crate::Viewport;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FramePosition {
    Static,
    Fixed,
}

/// Inline sizing of the rendered dashboard frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameStyle {
    pub width: u32,
    pub height: u32,
    pub position: FramePosition,
    pub top: u32,
    pub left: u32,
    pub border: bool,
}

impl FrameStyle {
    /// Exactly the viewport, fixed to the top-left corner, no border.
    pub fn fill(viewport: Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            position: FramePosition::Fixed,
            top: 0,
            left: 0,
            border: false,
        }
    }

    pub fn is_pinned_to(&self, viewport: Viewport) -> bool {
        *self == Self::fill(viewport)
    }

    /// Inline CSS equivalent.
    pub fn to_css(&self) -> String {
        let position = match self.position {
            FramePosition::Static => "static",
            FramePosition::Fixed => "fixed",
        };
        let border = if self.border { "" } else { " border: none;" };

        format!(
            "width: {}px; height: {}px; position: {}; top: {}; left: {};{}",
            self.width, self.height, position, self.top, self.left, border
        )
    }
}

/// What the embedding collaborator renders before any correction.
impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            position: FramePosition::Static,
            top: 0,
            left: 0,
            border: true,
        }
    }
}
