//! Error types for the contacts web application.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ContactId;
use thiserror::Error;

/// Errors that can occur when writing to the contact store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The email belongs to another contact; nothing was written
    #[error("email already assigned: {email} belongs to contact {existing}")]
    EmailConflict { email: String, existing: ContactId },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised while assembling the HTTP routes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathsError {
    /// Two resources were mapped to the same path
    #[error("path elements must be unique, {path:?} is used more than once")]
    Duplicate { path: String },

    /// Route paths must start with '/'
    #[error("path {path:?} must start with '/'")]
    NotAbsolute { path: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let existing = ContactId::parse("0b7d2a52-3c4e-4f6a-9d1b-8e2f3a4b5c6d").unwrap();
        let err = StoreError::EmailConflict {
            email: "joe@x.com".to_string(),
            existing,
        };
        assert_eq!(
            err.to_string(),
            "email already assigned: joe@x.com belongs to contact 0b7d2a52-3c4e-4f6a-9d1b-8e2f3a4b5c6d"
        );

        let err = PathsError::Duplicate {
            path: "/contact/".to_string(),
        };
        assert!(err.to_string().contains("\"/contact/\""));
    }

    #[test]
    fn test_config_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            var: "PORT".to_string(),
            reason: "Must be a port number".to_string(),
        };
        assert!(err.to_string().contains("PORT"));
        assert!(err.to_string().contains("Must be a port number"));
    }
}
