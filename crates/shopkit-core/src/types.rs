//! # Domain Types
//!
//! Core domain types used throughout shopkit.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DiscountRate   │   │  ShippingQuote  │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  cost (Money)   │   │  total_amount   │       │
//! │  │  1000 = 10%     │   │  estimated_days │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ChargeResult   │   │  OrderOutcome   │   │  OpeningHours   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  Holiday        │       │
//! │  │  Success        │   │  success        │   │  ─────────────  │       │
//! │  │  Failed         │   │  error          │   │  calendar rules │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 1000 bps = 10% exactly,
/// with no float drift when applied to integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction in [0, 1].
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 10000.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// A shipping quote for one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuote {
    /// Shipping cost.
    pub cost: Money,
    /// Estimated delivery time in days.
    pub estimated_days: u32,
}

// =============================================================================
// Orders & Payments
// =============================================================================

/// An order awaiting payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub total_amount: Money,
}

/// Card details passed through to the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub credit_card_number: String,
}

impl CreditCard {
    /// Last four digits, for logs.
    pub fn masked(&self) -> String {
        let digits: Vec<char> = self.credit_card_number.chars().collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("****{}", tail)
    }
}

/// Outcome reported by the payment gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Success,
    Failed,
}

/// A gateway's answer to a charge request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeResult {
    pub status: ChargeStatus,
}

impl ChargeResult {
    pub const fn success() -> Self {
        ChargeResult {
            status: ChargeStatus::Success,
        }
    }

    pub const fn failed() -> Self {
        ChargeResult {
            status: ChargeStatus::Failed,
        }
    }
}

/// Error code returned to callers when the charge is declined.
pub const PAYMENT_ERROR: &str = "payment_error";

/// The result of submitting an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OrderOutcome {
    pub fn succeeded() -> Self {
        OrderOutcome {
            success: true,
            error: None,
        }
    }

    pub fn payment_error() -> Self {
        OrderOutcome {
            success: false,
            error: Some(PAYMENT_ERROR.to_string()),
        }
    }
}

// =============================================================================
// Calendar Configuration Types
// =============================================================================

/// Daily opening hours as a half-open range `[open, close)` of hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// First hour the store is open (0-23).
    pub open: u32,
    /// First hour the store is closed again (1-24).
    pub close: u32,
}

impl Default for OpeningHours {
    fn default() -> Self {
        OpeningHours { open: 8, close: 20 }
    }
}

/// A yearly holiday with its storewide discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Month of the year (1-12).
    pub month: u32,
    /// Day of the month (1-31).
    pub day: u32,
    /// Discount applied on that day.
    #[serde(rename = "discount_bps")]
    pub discount: DiscountRate,
}

impl Default for Holiday {
    /// Christmas Day, 20% off.
    fn default() -> Self {
        Holiday {
            month: 12,
            day: 25,
            discount: DiscountRate::from_bps(2000),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
