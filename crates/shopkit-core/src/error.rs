//! # Error Types
//!
//! Domain-specific error types for shopkit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopkit-core errors (this file)                                       │
//! │  ├── CoreError        - Container and domain failures                  │
//! │  └── ValidationError  - Malformed input ("Invalid ...")                │
//! │                                                                         │
//! │  shopkit-storefront errors (separate crate)                            │
//! │  ├── StorefrontError  - Config and collaborator failures               │
//! │  └── FetchError       - Rejected data fetch, carries a `reason`        │
//! │                                                                         │
//! │  Validators return ValidationError directly; CoreError is the          │
//! │  container layer's error.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Validation messages always start with "Invalid" so callers can match them
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A stack operation needed a top element but the stack holds none.
    ///
    /// ## When This Occurs
    /// - `pop()` on an empty stack
    /// - `peek()` on an empty stack
    #[error("Cannot {operation}: stack is empty")]
    EmptyStack { operation: &'static str },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Every message names the offending field(s) prefixed with "Invalid".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A single field failed validation.
    #[error("Invalid {field}")]
    Invalid { field: String },

    /// Several fields failed validation at once.
    ///
    /// ## Example
    /// `fields = ["username", "age"]` renders as `"Invalid username, Invalid age"`.
    #[error("{}", render_fields(.fields))]
    InvalidFields { fields: Vec<String> },

    /// The value is not one of the supported codes (countries, currencies).
    #[error("Invalid {field} code: '{value}'")]
    UnknownCode { field: String, value: String },
}

impl ValidationError {
    /// Shorthand for a single invalid field.
    pub fn invalid(field: impl Into<String>) -> Self {
        ValidationError::Invalid {
            field: field.into(),
        }
    }

    /// Builds the error for a list of failed fields.
    ///
    /// A single field collapses to [`ValidationError::Invalid`].
    pub fn from_fields(mut fields: Vec<String>) -> Self {
        if fields.len() == 1 {
            ValidationError::Invalid {
                field: fields.remove(0),
            }
        } else {
            ValidationError::InvalidFields { fields }
        }
    }

    /// Returns the names of the fields that failed.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::Invalid { field } | ValidationError::UnknownCode { field, .. } => {
                vec![field.as_str()]
            }
            ValidationError::InvalidFields { fields } => fields.iter().map(String::as_str).collect(),
        }
    }
}

fn render_fields(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| format!("Invalid {}", field))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stack_message() {
        let err = CoreError::EmptyStack { operation: "pop" };
        assert_eq!(err.to_string(), "Cannot pop: stack is empty");
        assert!(err.to_string().to_lowercase().contains("empty"));
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::invalid("price").to_string(), "Invalid price");

        let err = ValidationError::from_fields(vec!["username".into(), "age".into()]);
        assert_eq!(err.to_string(), "Invalid username, Invalid age");
        assert_eq!(err.fields(), vec!["username", "age"]);

        let err = ValidationError::UnknownCode {
            field: "country".to_string(),
            value: "FR".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid country code: 'FR'");
    }

    #[test]
    fn test_single_field_collapses() {
        let err = ValidationError::from_fields(vec!["age".into()]);
        assert_eq!(err, ValidationError::invalid("age"));
    }
}
