//! Validation error types
//!
//! The `Display` text of each variant is the message returned to the client.

use std::fmt;

/// Validation error for registration payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is not a JSON object with string fields
    MalformedInput,

    /// `name` or `email` is absent, null, empty, or all whitespace
    MissingField,

    /// `name` is not a single word of ASCII letters
    InvalidName,

    /// `email` is not shaped like `local@domain.tld`
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::MalformedInput => "Invalid JSON format",
            Self::MissingField => "Name and email are required",
            Self::InvalidName => "Invalid name: please enter a single word with letters only.",
            Self::InvalidEmail => "Invalid email: please enter a valid email address.",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ValidationError {}
