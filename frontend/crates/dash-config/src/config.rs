use crate::{
    ConfigError, ConfigErrorResult, DashboardConfig, GuestTokenConfig, LoggingConfig,
    ResizeConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

const CONFIG_DIR_ENV: &str = "DASH_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".dash";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub dashboard: DashboardConfig,
    pub guest_token: GuestTokenConfig,
    pub session: SessionConfig,
    pub resize: ResizeConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for DASH_CONFIG_DIR env var, else use ./.dash/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply DASH_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DASH_CONFIG_DIR env var > ./.dash/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.dashboard.validate()?;
        self.guest_token.validate()?;
        self.session.validate()?;
        self.resize.validate()?;

        if let Some(ref file) = self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(&self.logging.dir).join(file)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  dashboard: {} @ {} (container #{})",
            self.dashboard.id, self.dashboard.superset_domain, self.dashboard.container_id
        );
        info!(
            "  dashboard ui: hide_title={}, hide_tab={}, hide_chart_controls={}",
            self.dashboard.hide_title, self.dashboard.hide_tab, self.dashboard.hide_chart_controls
        );
        info!(
            "  guest_token: {} (user header: {})",
            self.guest_token.endpoint, self.guest_token.user_header
        );
        info!(
            "  session: default_user={}, load_delay={}ms",
            self.session.default_user, self.session.load_delay_ms
        );
        info!(
            "  resize: interval={}ms, viewport={}x{}",
            self.resize.interval_ms, self.resize.viewport_width, self.resize.viewport_height
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Dashboard
        Self::apply_env_string("DASH_DASHBOARD_ID", &mut self.dashboard.id);
        Self::apply_env_string(
            "DASH_SUPERSET_DOMAIN",
            &mut self.dashboard.superset_domain,
        );
        Self::apply_env_string("DASH_CONTAINER_ID", &mut self.dashboard.container_id);
        Self::apply_env_bool("DASH_HIDE_TITLE", &mut self.dashboard.hide_title);
        Self::apply_env_bool("DASH_HIDE_TAB", &mut self.dashboard.hide_tab);
        Self::apply_env_bool(
            "DASH_HIDE_CHART_CONTROLS",
            &mut self.dashboard.hide_chart_controls,
        );

        // Guest token
        Self::apply_env_string(
            "DASH_GUEST_TOKEN_ENDPOINT",
            &mut self.guest_token.endpoint,
        );
        Self::apply_env_string(
            "DASH_GUEST_TOKEN_USER_HEADER",
            &mut self.guest_token.user_header,
        );

        // Session
        Self::apply_env_string("DASH_DEFAULT_USER", &mut self.session.default_user);
        Self::apply_env_parse("DASH_LOAD_DELAY_MS", &mut self.session.load_delay_ms);

        // Resize
        Self::apply_env_parse("DASH_RESIZE_INTERVAL_MS", &mut self.resize.interval_ms);
        Self::apply_env_parse("DASH_VIEWPORT_WIDTH", &mut self.resize.viewport_width);
        Self::apply_env_parse("DASH_VIEWPORT_HEIGHT", &mut self.resize.viewport_height);

        // Logging
        Self::apply_env_parse("DASH_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DASH_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DASH_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
