//! Registration payload decoding and validation
//!
//! The body is decoded into a typed object with two optional string fields,
//! then presence and format are checked in order: both fields present,
//! name format, email format.

use serde::Deserialize;
use serde_json::Value;

use super::{NewVisitor, ValidationError, VisitorEmail, VisitorName};

/// Raw registration body; unknown members are ignored
#[derive(Debug, Default, Deserialize)]
struct RegistrationPayload {
    name: Option<String>,
    email: Option<String>,
}

/// Validate a raw request body into a registration.
///
/// Pure: no I/O and no logging.
///
/// # Example
/// ```
/// use visitorreg_server::models::{validate, ValidationError};
///
/// let visitor = validate(br#"{"name":"Alice","email":"Alice@Example.com"}"#).unwrap();
/// assert_eq!(visitor.email.as_str(), "alice@example.com");
///
/// assert_eq!(validate(b"{oops").unwrap_err(), ValidationError::MalformedInput);
/// ```
pub fn validate(raw_body: &[u8]) -> Result<NewVisitor, ValidationError> {
    let payload = decode(raw_body)?;

    let (name, email) = match (payload.name.as_deref(), payload.email.as_deref()) {
        (Some(name), Some(email)) if !name.trim().is_empty() && !email.trim().is_empty() => {
            (name, email)
        }
        _ => return Err(ValidationError::MissingField),
    };

    Ok(NewVisitor {
        name: VisitorName::new(name)?,
        email: VisitorEmail::new(email)?,
    })
}

/// Decode the body. An empty body or a JSON `null` carries no fields.
fn decode(raw_body: &[u8]) -> Result<RegistrationPayload, ValidationError> {
    if raw_body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RegistrationPayload::default());
    }

    let value: Value =
        serde_json::from_slice(raw_body).map_err(|_| ValidationError::MalformedInput)?;

    match value {
        Value::Null => Ok(RegistrationPayload::default()),
        Value::Object(_) => {
            RegistrationPayload::deserialize(value).map_err(|_| ValidationError::MalformedInput)
        }
        _ => Err(ValidationError::MalformedInput),
    }
}
