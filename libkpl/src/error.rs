//! Error types for management-object names.
//!
//! Extracting values never fails. Errors only come from splitting a whole
//! name into its domain and key-property list.

use thiserror::Error;

/// Result type for object-name operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for object-name operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The name has no `:` between domain and key-property list.
    #[error("Missing domain separator ':' in \"{0}\"")]
    MissingDomainSeparator(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_separator_message() {
        let err = Error::MissingDomainSeparator("type=Cat".to_string());
        assert_eq!(
            err.to_string(),
            "Missing domain separator ':' in \"type=Cat\""
        );
    }
}
