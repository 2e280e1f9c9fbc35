//! # Validation Module
//!
//! Input validation rules for shopkit.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Untyped input (JSON)                                         │
//! │  └── loose module: wrong types become "Invalid <field>"                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Typed rules (THIS MODULE)                                    │
//! │  ├── Lengths, minimum ages, inclusive ranges                           │
//! │  └── Country tables, e-mail shape                                      │
//! │                                                                         │
//! │  Malformed input → ValidationError ("Invalid ...")                     │
//! │  Well-formed input that fails a rule → Ok(false)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopkit_core::validation::{can_drive, is_valid_username};
//!
//! assert!(is_valid_username("abcde"));
//! assert_eq!(can_drive(16, "US").unwrap(), true);
//! assert!(can_drive(16, "FR").is_err());
//! ```

use regex::Regex;
use std::sync::OnceLock;

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_USERNAME_LENGTH, MIN_ADULT_AGE, MIN_USERNAME_LENGTH, MIN_USER_INPUT_NAME_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Message returned when [`validate_user_input`] accepts both fields.
pub const VALIDATION_SUCCESS: &str = "Validation successful";

/// Minimum legal driving age per country code.
pub const DRIVING_AGES: &[(&str, u32)] = &[("US", 16), ("UK", 17)];

// =============================================================================
// User Input
// =============================================================================

/// Validates a sign-up form's username and age.
///
/// ## Rules
/// - Username must have at least 3 characters
/// - Age must be at least 18
///
/// Both fields are checked; the error names every field that failed.
///
/// ## Example
/// ```rust
/// use shopkit_core::validation::validate_user_input;
///
/// assert!(validate_user_input("Ayat", 25).is_ok());
///
/// let err = validate_user_input("", 13).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid username, Invalid age");
/// ```
pub fn validate_user_input(username: &str, age: u32) -> ValidationResult<&'static str> {
    let mut failed = Vec::new();

    if !is_acceptable_username(username) {
        failed.push("username".to_string());
    }

    if !is_adult(age) {
        failed.push("age".to_string());
    }

    if failed.is_empty() {
        Ok(VALIDATION_SUCCESS)
    } else {
        Err(ValidationError::from_fields(failed))
    }
}

pub(crate) fn is_acceptable_username(username: &str) -> bool {
    username.chars().count() >= MIN_USER_INPUT_NAME_LENGTH
}

pub(crate) fn is_adult(age: u32) -> bool {
    age >= MIN_ADULT_AGE
}

// =============================================================================
// Predicates
// =============================================================================

/// Returns true if `min <= price <= max`.
///
/// ## Example
/// ```rust
/// use shopkit_core::money::Money;
/// use shopkit_core::validation::is_price_in_range;
///
/// let (min, max) = (Money::zero(), Money::from_major_minor(100, 0));
/// assert!(is_price_in_range(Money::zero(), min, max));
/// assert!(!is_price_in_range(Money::from_major_minor(-10, 0), min, max));
/// ```
pub fn is_price_in_range(price: Money, min: Money, max: Money) -> bool {
    price >= min && price <= max
}

/// Returns true if the username has between 5 and 15 characters (inclusive).
pub fn is_valid_username(name: &str) -> bool {
    (MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&name.chars().count())
}

/// Returns the minimum driving age for a country code, if known.
pub fn legal_driving_age(country: &str) -> Option<u32> {
    DRIVING_AGES
        .iter()
        .find(|(code, _)| *code == country)
        .map(|&(_, age)| age)
}

/// Checks whether someone of `age` may drive in `country`.
///
/// ## Errors
/// [`ValidationError::UnknownCode`] for country codes outside [`DRIVING_AGES`].
pub fn can_drive(age: u32, country: &str) -> ValidationResult<bool> {
    let minimum = legal_driving_age(country).ok_or_else(|| ValidationError::UnknownCode {
        field: "country".to_string(),
        value: country.to_string(),
    })?;

    Ok(age >= minimum)
}

/// Returns true for addresses shaped like `local@domain.tld`.
///
/// No whitespace, exactly one `@`, and a dot somewhere after it.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
        })
        .is_match(email)
}

// =============================================================================
// Unit Tests
// =============================================================================
