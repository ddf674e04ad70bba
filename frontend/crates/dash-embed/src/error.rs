use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised while fetching a guest token or mounting the dashboard.
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Failed to fetch guest token: HTTP {status} {location}")]
    TokenFetch { status: u16, location: ErrorLocation },

    #[error("Malformed guest token response: {message} {location}")]
    TokenFormat {
        message: String,
        location: ErrorLocation,
    },

    #[error("Container '{container_id}' not found {location}")]
    ContainerMissing {
        container_id: String,
        location: ErrorLocation,
    },

    #[error("Dashboard embedding failed: {message} {location}")]
    Embedding {
        message: String,
        location: ErrorLocation,
    },

    #[error("Guest token transport error: {message} {location}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },
}

impl EmbedError {
    /// Creates TokenFetch error at caller location.
    #[track_caller]
    pub fn token_fetch(status: u16) -> Self {
        Self::TokenFetch {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates TokenFormat error at caller location.
    #[track_caller]
    pub fn token_format(message: impl Into<String>) -> Self {
        Self::TokenFormat {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates ContainerMissing error at caller location.
    #[track_caller]
    pub fn container_missing(container_id: impl Into<String>) -> Self {
        Self::ContainerMissing {
            container_id: container_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Embedding error at caller location.
    #[track_caller]
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of a rejected token request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::TokenFetch { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error text for display, without the source location.
    pub fn user_message(&self) -> String {
        match self {
            Self::TokenFetch { status, .. } => {
                format!("Failed to fetch guest token: HTTP {status}")
            }
            Self::TokenFormat { message, .. } => {
                format!("Malformed guest token response: {message}")
            }
            Self::ContainerMissing { container_id, .. } => {
                format!("Container '{container_id}' not found")
            }
            Self::Embedding { message, .. } => format!("Dashboard embedding failed: {message}"),
            Self::Transport { message, .. } => format!("Guest token transport error: {message}"),
        }
    }

    /// Whether a manual reload has a reasonable chance of succeeding.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::TokenFetch { status, .. } => *status >= 500 || *status == 429,
            Self::Transport { .. } => true,
            Self::TokenFormat { .. } | Self::ContainerMissing { .. } | Self::Embedding { .. } => {
                false
            }
        }
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::TokenFetch { status, .. } if *status == 401 || *status == 403 => {
                "The token service refused this user. \
                   Pick another user or check the service's user mapping."
            }
            Self::TokenFetch { .. } | Self::Transport { .. } => {
                "The guest token service is unavailable. \
                   Check that it is running and press reload."
            }
            Self::TokenFormat { .. } => {
                "The guest token service returned an unexpected response. \
                   Check its version and configuration."
            }
            Self::ContainerMissing { .. } => {
                "The dashboard container is not on the page. \
                   Make sure the view is attached before loading."
            }
            Self::Embedding { .. } => {
                "The dashboard could not be rendered. \
                   Check the dashboard id and domain, then press reload."
            }
        }
    }
}

impl From<reqwest::Error> for EmbedError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Transport {
            message: source.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type EmbedResult<T> = std::result::Result<T, EmbedError>;
