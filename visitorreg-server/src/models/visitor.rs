//! Visitor name and email validation
//!
//! Name: a single word of ASCII letters.
//! Email: `local@domain.tld` shape, stored lower-cased.

use std::fmt;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Letters only, one token
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("invalid name regex"));

/// One `@`, no whitespace, at least one `.` in the domain part
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

/// Validated visitor name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisitorName(String);

impl VisitorName {
    /// Create a visitor name, validating the letters-only rule.
    ///
    /// # Example
    /// ```
    /// use visitorreg_server::models::VisitorName;
    ///
    /// assert!(VisitorName::new("Alice").is_ok());
    /// assert!(VisitorName::new("Bob2").is_err());      // digit
    /// assert!(VisitorName::new("Mary Ann").is_err());  // space
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::MissingField);
        }

        if !NAME_RE.is_match(s) {
            return Err(ValidationError::InvalidName);
        }

        Ok(Self(s.trim().to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisitorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated, lower-cased visitor email
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisitorEmail(String);

impl VisitorEmail {
    /// Create a visitor email, validating shape and normalizing case.
    ///
    /// # Example
    /// ```
    /// use visitorreg_server::models::VisitorEmail;
    ///
    /// let email = VisitorEmail::new("Alice@Example.COM").unwrap();
    /// assert_eq!(email.as_str(), "alice@example.com");
    /// assert!(VisitorEmail::new("not-an-email").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::MissingField);
        }

        if !EMAIL_RE.is_match(s) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self(s.trim().to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisitorEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated registration, not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisitor {
    pub name: VisitorName,
    pub email: VisitorEmail,
}

/// A persisted visitor row
#[derive(Debug, Clone)]
pub struct Visitor {
    pub name: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

impl Visitor {
    /// Stamp a validated registration with its insertion time.
    pub fn registered(visitor: &NewVisitor, registered_at: DateTime<Utc>) -> Self {
        Self {
            name: visitor.name.as_str().to_owned(),
            email: visitor.email.as_str().to_owned(),
            registered_at,
        }
    }
}
