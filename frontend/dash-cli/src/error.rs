use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] dash_config::ConfigError),

    #[error("Dashboard error: {0}")]
    Embed(#[from] dash_embed::EmbedError),

    #[error("I/O error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON output error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid command: {message}")]
    Command { message: String },
}

impl CliError {
    #[track_caller]
    pub fn io(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn command<S: Into<String>>(message: S) -> Self {
        CliError::Command {
            message: message.into(),
        }
    }

    /// Recovery hint for dashboard failures.
    pub fn recovery_hint(&self) -> Option<&'static str> {
        match self {
            CliError::Embed(e) => Some(e.recovery_hint()),
            _ => None,
        }
    }

    /// Error text followed by the recovery hint, if there is one.
    pub fn report(&self) -> String {
        match self.recovery_hint() {
            Some(hint) => format!("{self}\n\nHint: {hint}"),
            None => self.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        CliError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
