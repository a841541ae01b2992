//! Result and error types for xpath-attrs.

use thiserror::Error;

/// Result type for locator operations
pub type LocatorResult<T> = Result<T, LocatorError>;

/// Errors that can occur while building XPath locators
#[derive(Debug, Error)]
pub enum LocatorError {
    /// An attribute value was neither a string nor a pattern
    #[error("{name} value must be a pattern or string, not {found}")]
    UnsupportedAttributeType {
        /// Attribute name
        name: String,
        /// Type that was supplied instead
        found: String,
    },

    /// Pattern content falls outside `[A-Za-z0-9_\-\s]+` between the anchors
    #[error("Unsupported pattern {pattern}: content must be letters, digits, '-', '_' or whitespace")]
    UnparsablePatternContent {
        /// Offending pattern in `/source/flags` notation
        pattern: String,
    },

    /// Literal is not of the form `/source/flags`
    #[error("Malformed pattern literal {literal:?}: expected /source/flags")]
    MalformedPatternLiteral {
        /// Literal as supplied
        literal: String,
    },

    /// Unknown or repeated flag letters
    #[error("Invalid pattern flags {flags:?}")]
    InvalidPatternFlags {
        /// Flags as supplied
        flags: String,
    },

    /// Pattern source is not a valid regular expression
    #[error("Invalid regular expression {pattern}: {message}")]
    InvalidRegex {
        /// Offending pattern in `/source/flags` notation
        pattern: String,
        /// Error message from the regex engine
        message: String,
    },

    /// An object attribute value that is not a well-formed pattern
    #[error("{name} value is not a valid pattern object: {message}")]
    InvalidAttributeObject {
        /// Attribute name
        name: String,
        /// Error message
        message: String,
    },

    /// Attribute specification document has the wrong shape
    #[error("Invalid attribute specification: {message}")]
    InvalidSpecification {
        /// Error message
        message: String,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_names_attribute_and_type() {
        let err = LocatorError::UnsupportedAttributeType {
            name: "id".to_string(),
            found: "number".to_string(),
        };
        assert_eq!(err.to_string(), "id value must be a pattern or string, not number");
    }

    #[test]
    fn test_unparsable_content_names_pattern() {
        let err = LocatorError::UnparsablePatternContent {
            pattern: "/a.b/i".to_string(),
        };
        assert!(err.to_string().contains("/a.b/i"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LocatorError = json_err.into();
        assert!(matches!(err, LocatorError::Json(_)));
    }
}
