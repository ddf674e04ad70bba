use crate::UserIdentity;

use std::time::Duration;

use dash_config::Config;

#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub dashboard_id: String,
    /// Used on first attach and for an empty selection
    pub default_user: UserIdentity,
    /// Settle delay before each mount
    pub load_delay: Duration,
}

impl ControllerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            dashboard_id: config.dashboard.id.clone(),
            default_user: UserIdentity::new(config.session.default_user.clone()),
            load_delay: Duration::from_millis(config.session.load_delay_ms),
        }
    }
}
