//! # shopkit-core: Pure Logic for shopkit
//!
//! This crate contains the stateless rules and the one stateful container of
//! shopkit as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        shopkit Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/demo (shopkit-demo)                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │           shopkit-storefront (ports, adapters, flows)           │   │
//! │  │    Clock, PaymentGateway, Mailer ... ──► Storefront             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shopkit-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌───────────┐ ┌────────┐  │   │
//! │  │   │  stack  │ │  money  │ │ coupon  │ │ validation│ │calendar│  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └───────────┘ └────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK READS • NO NETWORK • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`stack`] - Generic LIFO container
//! - [`money`] - Money type with integer arithmetic
//! - [`types`] - Domain types (DiscountRate, Order, ShippingQuote, ...)
//! - [`coupon`] - Coupon catalog and discount calculation
//! - [`validation`] - Typed input rules
//! - [`loose`] - The same rules for untyped JSON input
//! - [`calendar`] - Opening hours and holiday rules for a given instant
//! - [`intro`] - Small numeric helpers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopkit_core::coupon::calculate_discount;
//! use shopkit_core::Money;
//!
//! let price = Money::from_major_minor(10, 0);
//! assert_eq!(calculate_discount(price, "SAVE10").unwrap().to_string(), "$9.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calendar;
pub mod coupon;
pub mod error;
pub mod intro;
pub mod loose;
pub mod money;
pub mod stack;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use coupon::Coupon;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use stack::Stack;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum username length accepted by the sign-up form check.
pub const MIN_USER_INPUT_NAME_LENGTH: usize = 3;

/// Minimum age accepted by the sign-up form check.
pub const MIN_ADULT_AGE: u32 = 18;

/// Shortest valid account username.
pub const MIN_USERNAME_LENGTH: usize = 5;

/// Longest valid account username.
pub const MAX_USERNAME_LENGTH: usize = 15;
