use crate::{EmbeddedFrame, FrameStyle, MountTarget};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-memory container for hosts without a DOM (CLI, tests).
#[derive(Debug)]
pub struct HeadlessContainer {
    element_id: String,
    attached: AtomicBool,
    frame: Mutex<Option<EmbeddedFrame>>,
}

impl HeadlessContainer {
    pub fn new(element_id: &str) -> Self {
        Self {
            element_id: element_id.to_string(),
            attached: AtomicBool::new(true),
            frame: Mutex::new(None),
        }
    }

    /// Take the element out of the page.
    pub fn detach(&self) {
        self.attached.store(false, Ordering::SeqCst);
        self.slot().take();
    }

    pub fn reattach(&self) {
        self.attached.store(true, Ordering::SeqCst);
    }

    fn slot(&self) -> MutexGuard<'_, Option<EmbeddedFrame>> {
        self.frame.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MountTarget for HeadlessContainer {
    fn element_id(&self) -> &str {
        &self.element_id
    }

    fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }

    fn clear(&self) {
        self.slot().take();
    }

    fn attach_frame(&self, frame: EmbeddedFrame) {
        if self.is_attached() {
            *self.slot() = Some(frame);
        }
    }

    fn frame(&self) -> Option<EmbeddedFrame> {
        self.slot().clone()
    }

    fn restyle_frame(&self, style: FrameStyle) -> bool {
        match self.slot().as_mut() {
            Some(frame) => {
                frame.style = style;
                true
            }
            None => false,
        }
    }
}
