mod resize_handle;
mod resize_keeper;

pub use resize_handle::ResizeHandle;
pub use resize_keeper::ResizeKeeper;
