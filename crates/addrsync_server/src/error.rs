//! Error types for the feed server.

use thiserror::Error;

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that can occur while serving the feed.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Caller requested a sort field outside the whitelist.
    #[error("unsupported sort field: {0}")]
    UnsupportedSortField(String),

    /// Malformed pagination parameters.
    #[error("invalid page request: {0}")]
    InvalidPageRequest(String),

    /// Requested page size exceeds the configured maximum.
    #[error("page size {requested} exceeds maximum {max}")]
    PageSizeTooLarge {
        /// Requested page size.
        requested: u32,
        /// Configured maximum.
        max: u32,
    },

    /// The record source failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl FeedError {
    /// Returns true if this is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FeedError::UnsupportedSortField(_)
                | FeedError::InvalidPageRequest(_)
                | FeedError::PageSizeTooLarge { .. }
        )
    }

    /// Returns true if this is a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        matches!(self, FeedError::Source(_))
    }
}

/// Errors raised by a record source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The backing store could not be reached.
    #[error("record source unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised when appending to the change log.
#[derive(Error, Debug)]
pub enum AppendError {
    /// Explicit position does not advance the log.
    #[error("position {position} is not after latest position {latest}")]
    NonMonotonic {
        /// Rejected position.
        position: u64,
        /// Latest position in the log.
        latest: u64,
    },
}
