//! Error types for loading and playing the deck.
//!
//! Every error here is caught at the command boundary and turned into
//! something the user can read. Nothing is retried.

use thiserror::Error;

/// Required environment configuration is missing or malformed.
///
/// Always reported before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// The database query could not be completed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not reach the Notion API: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Notion API Error: {status} {message}")]
    Status { status: u16, message: String },

    /// The database does not have the columns the deck reads from.
    #[error("Notion API Error: {message}")]
    Schema { message: String, hint: String },

    #[error("unexpected response from the Notion API: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Network(err) => err.status().map(|s| s.as_u16()),
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Schema { .. } => Some(400),
            FetchError::Decode(_) => None,
        }
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, FetchError::Schema { .. })
    }

    /// Extra guidance printed below the error message.
    pub fn hint(&self) -> &str {
        match self {
            FetchError::Schema { hint, .. } => hint,
            _ => "Check NOTION_DB_ID and NOTION_API_KEY, and that the integration can access the database.",
        }
    }
}

/// Why the deck has no records to show.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl LoadError {
    pub fn title(&self) -> &'static str {
        match self {
            LoadError::Config(_) => "Environment is not configured",
            LoadError::Fetch(_) => "Connection error",
        }
    }

    pub fn hint(&self) -> &str {
        match self {
            LoadError::Config(_) => {
                "Set NOTION_API_KEY and NOTION_DB_ID in the environment or in the vocadeck .env file."
            }
            LoadError::Fetch(err) => err.hint(),
        }
    }
}

/// Audio could not be played.
///
/// The two variants differ only in the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("Audio could not be played. Check the file's sharing permissions. ({0})")]
    Access(String),

    #[error("Audio could not be played. ({0})")]
    Failed(String),
}
