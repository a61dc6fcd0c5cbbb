//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod payload;
pub mod validation;
pub mod visitor;

pub use payload::validate;
pub use validation::ValidationError;
pub use visitor::{NewVisitor, Visitor, VisitorEmail, VisitorName};
