//! Core error types for the searchset library.
//!
//! This module provides the [`SearchError`] enum covering the three failure
//! classes of the search layer: bad client tokens, unknown field names, and
//! collaborator (backend) failures. Each variant maps to an HTTP-style status
//! code via [`SearchError::status_code`] so callers can translate errors into
//! responses uniformly.

use thiserror::Error;

/// The primary error type for the searchset library.
///
/// Cast and unknown-field errors are client errors: the search request is
/// malformed and should be reported as such, not retried. Backend errors are
/// propagated unmodified from the collaborator; this layer performs no retry,
/// no fallback, and no partial results.
#[derive(Error, Debug)]
pub enum SearchError {
    // ── Client errors ────────────────────────────────────────────────

    /// A raw input token could not be converted to the field's declared type.
    #[error("cannot cast value `{value}` for field `{field}`: expected {expected}")]
    Cast {
        /// The field the token was supplied for.
        field: String,
        /// The raw token as received.
        value: String,
        /// A short description of the expected type (e.g. "integer").
        expected: &'static str,
    },

    /// A suggestion or translation was requested for a name absent from the
    /// assembled mapping.
    #[error("unknown search field: {0}")]
    UnknownField(String),

    // ── Collaborator errors ──────────────────────────────────────────

    /// The backend storage collaborator failed or is unreachable.
    #[error("search backend unavailable: {0}")]
    BackendUnavailable(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl SearchError {
    /// Creates a cast error for the given field, token, and expected type.
    pub fn cast(field: impl Into<String>, value: impl Into<String>, expected: &'static str) -> Self {
        Self::Cast {
            field: field.into(),
            value: value.into(),
            expected,
        }
    }

    /// Returns the HTTP status code associated with this error.
    ///
    /// - `Cast`, `UnknownField` -> 400 (the query is malformed)
    /// - `BackendUnavailable` -> 503
    /// - `Configuration` -> 500
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Cast { .. } | Self::UnknownField(_) => 400,
            Self::BackendUnavailable(_) => 503,
            Self::Configuration(_) => 500,
        }
    }

    /// Returns `true` if this error indicates a malformed client request.
    pub const fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

impl From<std::io::Error> for SearchError {
    fn from(err: std::io::Error) -> Self {
        Self::BackendUnavailable(err.to_string())
    }
}

/// A convenience type alias for `Result<T, SearchError>`.
pub type SearchResult<T> = Result<T, SearchError>;
