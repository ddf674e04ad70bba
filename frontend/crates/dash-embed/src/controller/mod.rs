mod controller_event;
mod controller_settings;
mod display_state;
mod session_id;
mod session_outcome;
mod session_state;
mod user_switch_controller;

pub use controller_event::ControllerEvent;
pub use controller_settings::ControllerSettings;
pub use display_state::DisplayState;
pub use session_id::SessionId;
pub(crate) use session_id::{SessionFence, SessionGeneration};
pub use session_outcome::SessionOutcome;
pub use session_state::SessionState;
pub use user_switch_controller::UserSwitchController;
