use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONTAINER_ID, DEFAULT_DASHBOARD_ID,
    DEFAULT_SUPERSET_DOMAIN, validate_http_url,
};

use serde::Deserialize;

/// Which dashboard to embed, where it is served from, and how it is displayed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Embedded dashboard UUID
    pub id: String,
    /// Origin serving the embedded dashboard
    pub superset_domain: String,
    /// Element id of the mount container
    pub container_id: String,
    pub hide_title: bool,
    pub hide_tab: bool,
    pub hide_chart_controls: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            id: String::from(DEFAULT_DASHBOARD_ID),
            superset_domain: String::from(DEFAULT_SUPERSET_DOMAIN),
            container_id: String::from(DEFAULT_CONTAINER_ID),
            hide_title: false,
            hide_tab: false,
            hide_chart_controls: false,
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.id.trim().is_empty() {
            return Err(ConfigError::dashboard("dashboard.id cannot be empty"));
        }

        if self.container_id.trim().is_empty() {
            return Err(ConfigError::dashboard("dashboard.container_id cannot be empty"));
        }

        validate_http_url("dashboard.superset_domain", &self.superset_domain)
    }
}
