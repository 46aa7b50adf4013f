//! Unified error type for the menagerie services.
//!
//! Storage and request-decoding failures all funnel into [`Error`], which
//! carries enough context for handlers to pick an HTTP status via
//! [`Error::http_status`] and a public message without leaking the cause.

/// Boxed source error stored by the storage variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Unified error type covering all failure modes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A request body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An I/O operation failed (body read, database directory creation).
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A SQL statement could not be prepared.
    #[error("Statement error: {source}")]
    Statement {
        /// The underlying driver error.
        source: BoxError,
    },

    /// A database operation (connect, query, execute) failed.
    #[error("Database error: {source}")]
    Database {
        /// The underlying database error.
        source: BoxError,
    },

    /// A result row could not be mapped onto its model.
    #[error("Row decode error: {source}")]
    RowDecode {
        /// The underlying column conversion error.
        source: BoxError,
    },

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map this error to an appropriate HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::Validation(_) | Error::Parse(_) => 400,
            Error::Io { .. }
            | Error::Statement { .. }
            | Error::Database { .. }
            | Error::RowDecode { .. }
            | Error::Internal(_) => 500,
        }
    }

    /// Convenience constructor for [`Error::Database`].
    pub fn database(source: impl Into<BoxError>) -> Self {
        Error::Database {
            source: source.into(),
        }
    }

    /// Convenience constructor for [`Error::Statement`].
    pub fn statement(source: impl Into<BoxError>) -> Self {
        Error::Statement {
            source: source.into(),
        }
    }

    /// Convenience constructor for [`Error::RowDecode`].
    pub fn row_decode(source: impl Into<BoxError>) -> Self {
        Error::RowDecode {
            source: source.into(),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display() {
        let err = Error::Validation("name is required".into());
        assert_eq!(err.to_string(), "Validation error: name is required");
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn parse_is_client_error() {
        let err = Error::Parse("expected value at line 1".into());
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn database_display() {
        let err = Error::database("connection refused");
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn statement_display() {
        let err = Error::statement("no such table: cats");
        assert_eq!(err.to_string(), "Statement error: no such table: cats");
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn row_decode_display() {
        let err = Error::row_decode("invalid column type");
        assert!(err.to_string().starts_with("Row decode error"));
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn io_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "body truncated");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn internal_display() {
        let err = Error::Internal("unexpected state".into());
        assert_eq!(err.to_string(), "Internal error: unexpected state");
        assert_eq!(err.http_status(), 500);
    }
}
