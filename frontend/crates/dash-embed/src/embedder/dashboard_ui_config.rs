use dash_config::DashboardConfig;
use serde::Serialize;

const HIDE_TITLE: u8 = 1;
const HIDE_TAB: u8 = 2;
const HIDE_CHART_CONTROLS: u8 = 8;

/// Visibility toggles for the embedded dashboard chrome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardUiConfig {
    pub hide_title: bool,
    pub hide_tab: bool,
    pub hide_chart_controls: bool,
}

impl DashboardUiConfig {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            hide_title: config.hide_title,
            hide_tab: config.hide_tab,
            hide_chart_controls: config.hide_chart_controls,
        }
    }

    /// Bit set sent as the `uiConfig` query parameter.
    pub fn url_flags(&self) -> u8 {
        let mut flags = 0;
        if self.hide_title {
            flags |= HIDE_TITLE;
        }
        if self.hide_tab {
            flags |= HIDE_TAB;
        }
        if self.hide_chart_controls {
            flags |= HIDE_CHART_CONTROLS;
        }
        flags
    }
}
