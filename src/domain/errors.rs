//! Domain validation errors.

use std::fmt;

/// Errors that can occur while building domain values from external text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided text is not a UUID.
    MalformedId(String),

    /// A required field was blank after trimming.
    BlankField(&'static str),

    /// The provided name contains characters outside the allowed set.
    InvalidName(String),

    /// A numeric field could not be parsed.
    InvalidNumber { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedId(id) => write!(f, "Malformed contact id: {:?}", id),
            Self::BlankField(field) => write!(f, "{} is blank", field),
            Self::InvalidName(name) => write!(f, "Invalid name: {:?}", name),
            Self::InvalidNumber { field, value } => {
                write!(f, "Invalid number for {}: {:?}", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::MalformedId("abc".to_string());
        assert_eq!(err.to_string(), "Malformed contact id: \"abc\"");

        let err = ValidationError::BlankField("LastName");
        assert_eq!(err.to_string(), "LastName is blank");
    }
}
