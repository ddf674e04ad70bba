use crate::{FrameStyle, GuestToken};

/// The single frame rendered inside the mount container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedFrame {
    pub src: String,
    pub guest_token: GuestToken,
    pub style: FrameStyle,
}

impl EmbeddedFrame {
    pub fn new(src: impl Into<String>, guest_token: GuestToken) -> Self {
        Self {
            src: src.into(),
            guest_token,
            style: FrameStyle::default(),
        }
    }
}
