//! # Coupons
//!
//! The coupon catalog and discount calculation.
//!
//! ## Checkout Flow
//! ```text
//! Price: $10.00, Code: "SAVE10"
//!      │
//!      ▼
//! calculate_discount() ── price < 0? ──► Err("Invalid price")
//!      │
//!      ├── code unknown? ──► $10.00 (unchanged)
//!      │
//!      ▼
//! $10.00 × (1 − 0.10) = $9.00
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::DiscountRate;
use crate::validation::ValidationResult;

/// A discount code and the fraction it takes off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coupon {
    /// Code the customer types at checkout (case-sensitive).
    pub code: String,
    /// Discount in the open interval (0, 1).
    pub discount: DiscountRate,
}

impl Coupon {
    pub fn new(code: impl Into<String>, discount: DiscountRate) -> Self {
        Coupon {
            code: code.into(),
            discount,
        }
    }
}

/// Codes accepted at checkout, in display order.
const CATALOG: &[(&str, u32)] = &[("SAVE20", 2000), ("SAVE10", 1000)];

/// Returns the active coupons.
///
/// ## Example
/// ```rust
/// use shopkit_core::coupon::get_coupons;
///
/// let coupons = get_coupons();
/// assert!(!coupons.is_empty());
/// assert!(coupons.iter().all(|c| c.discount.fraction() > 0.0 && c.discount.fraction() < 1.0));
/// ```
pub fn get_coupons() -> Vec<Coupon> {
    CATALOG
        .iter()
        .map(|&(code, bps)| Coupon::new(code, DiscountRate::from_bps(bps)))
        .collect()
}

/// Looks up a coupon by its exact code.
pub fn find_coupon(code: &str) -> Option<Coupon> {
    get_coupons().into_iter().find(|coupon| coupon.code == code)
}

/// Applies the coupon named by `code` to `price`.
///
/// ## Rules
/// - Negative prices are rejected with "Invalid price"
/// - Unknown codes leave the price unchanged
///
/// ## Example
/// ```rust
/// use shopkit_core::coupon::calculate_discount;
/// use shopkit_core::money::Money;
///
/// let price = Money::from_major_minor(10, 0);
/// assert_eq!(calculate_discount(price, "SAVE10").unwrap(), Money::from_major_minor(9, 0));
/// assert_eq!(calculate_discount(price, "INVALID").unwrap(), price);
/// ```
pub fn calculate_discount(price: Money, code: &str) -> ValidationResult<Money> {
    if price.is_negative() {
        return Err(ValidationError::invalid("price"));
    }

    Ok(match find_coupon(code) {
        Some(coupon) => price.apply_discount(coupon.discount),
        None => price,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
