//! Error types for tbs-server.
//!
//! Every rendered message begins with `ERROR`; string-only callers treat that
//! prefix as the failure signal.

use std::path::PathBuf;

use thiserror::Error;

use tbs_core::BookingError;

/// All errors that can arise from registry operations.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Entity-level validation or seat conflict.
    #[error(transparent)]
    Booking(#[from] BookingError),

    /// A required identifier argument was empty.
    #[error("ERROR {field} is empty")]
    EmptyField { field: &'static str },

    /// Case-insensitive match against an existing artist name.
    #[error("ERROR artist already exists: {name}")]
    DuplicateArtist { name: String },

    #[error("ERROR artistID not found: {id}")]
    ArtistNotFound { id: String },

    #[error("ERROR actID not found: {id}")]
    ActNotFound { id: String },

    #[error("ERROR theatreID not found: {id}")]
    TheatreNotFound { id: String },

    #[error("ERROR performanceID not found: {id}")]
    PerformanceNotFound { id: String },

    /// Start time is not a strict `yyyy-MM-ddTHH:mm` local date-time.
    #[error("ERROR not valid start time '{input}'. Format should be ISO-8601 yyyy-MM-ddTHH:mm")]
    InvalidStartTime { input: String },

    /// Price is not `$` followed by a non-negative integer.
    #[error("ERROR not a valid pricing format \"$d\": '{input}'")]
    InvalidPrice { input: String },

    /// The initialization source could not be opened or read.
    #[error("ERROR incorrect file {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record in the initialization source is malformed.
    #[error("ERROR incorrect input format at line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// Config file exists but could not be read.
    #[error("ERROR cannot read config at {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for [`RegistryConfig`](crate::RegistryConfig).
    #[error("ERROR failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None`.
    #[error("ERROR cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

/// Convenience constructor for [`ServerError::Format`].
pub(crate) fn format_err(line: usize, reason: impl Into<String>) -> ServerError {
    ServerError::Format {
        line,
        reason: reason.into(),
    }
}
