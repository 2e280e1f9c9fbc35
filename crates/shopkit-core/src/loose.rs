//! # Loosely Typed Inputs
//!
//! Entry points for values that arrive as untyped JSON (form posts, IPC
//! payloads). Type mismatches are reported the same way rule violations are:
//! as a [`ValidationError`] naming the field.
//!
//! ## Mapping
//! ```text
//! ┌──────────────────────────┬───────────────────────────────────────────┐
//! │  JSON input              │  Outcome                                  │
//! ├──────────────────────────┼───────────────────────────────────────────┤
//! │  "10" for a price        │  Invalid price                            │
//! │  10 for a code           │  Invalid discount code                    │
//! │  69 for a username       │  Invalid username (or `false`)            │
//! │  "13" for an age         │  Invalid age                              │
//! │  16.0 / -1 for an age    │  compared numerically                     │
//! │  NaN / ±Infinity         │  cannot be represented in JSON → rejected │
//! └──────────────────────────┴───────────────────────────────────────────┘
//! ```

use serde_json::Value;

use crate::coupon::calculate_discount;
use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{self, ValidationResult, VALIDATION_SUCCESS};
use crate::MIN_ADULT_AGE;

/// Reads any finite JSON number as an age; fractional and negative ages are
/// compared like any other number.
fn as_age(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

/// [`calculate_discount`] for a JSON price (in dollars) and code.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use shopkit_core::loose::calculate_discount_value;
/// use shopkit_core::money::Money;
///
/// assert_eq!(calculate_discount_value(&json!(10), &json!("SAVE10")).unwrap(), Money::from_cents(900));
/// assert!(calculate_discount_value(&json!("10"), &json!("SAVE10")).is_err());
/// ```
pub fn calculate_discount_value(price: &Value, code: &Value) -> ValidationResult<Money> {
    let price = price
        .as_f64()
        .and_then(Money::from_decimal)
        .ok_or_else(|| ValidationError::invalid("price"))?;
    let code = code
        .as_str()
        .ok_or_else(|| ValidationError::invalid("discount code"))?;

    calculate_discount(price, code)
}

/// [`validate_user_input`](validation::validate_user_input) for JSON fields.
///
/// A wrong type fails the same way a rule violation does, and both fields
/// are always checked.
pub fn validate_user_input_value(username: &Value, age: &Value) -> ValidationResult<&'static str> {
    let mut failed = Vec::new();

    if !username.as_str().is_some_and(validation::is_acceptable_username) {
        failed.push("username".to_string());
    }

    if !as_age(age).is_some_and(|age| age >= f64::from(MIN_ADULT_AGE)) {
        failed.push("age".to_string());
    }

    if failed.is_empty() {
        Ok(VALIDATION_SUCCESS)
    } else {
        Err(ValidationError::from_fields(failed))
    }
}

/// [`is_valid_username`](validation::is_valid_username); non-strings are never valid.
pub fn is_valid_username_value(name: &Value) -> bool {
    name.as_str().is_some_and(validation::is_valid_username)
}

/// [`can_drive`](validation::can_drive) for JSON fields.
///
/// The country is checked first, so an unknown country is reported even
/// when the age is also malformed. Only a non-number age is invalid.
pub fn can_drive_value(age: &Value, country: &Value) -> ValidationResult<bool> {
    let country = country.as_str().ok_or_else(|| ValidationError::UnknownCode {
        field: "country".to_string(),
        value: country.to_string(),
    })?;
    let minimum = validation::legal_driving_age(country).ok_or_else(|| {
        ValidationError::UnknownCode {
            field: "country".to_string(),
            value: country.to_string(),
        }
    })?;

    let age = as_age(age).ok_or_else(|| ValidationError::invalid("age"))?;
    Ok(age >= f64::from(minimum))
}

// =============================================================================
// Unit Tests
// =============================================================================
