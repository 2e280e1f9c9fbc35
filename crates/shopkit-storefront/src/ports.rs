//! # Collaborator Ports
//!
//! Every external service the storefront talks to sits behind one of these
//! traits. Production code wires in the adapters from [`crate::adapters`];
//! tests substitute mocks.
//!
//! ```text
//! ┌──────────────────┬─────────────────────────────┬─────────────────────┐
//! │  Port            │  Call                       │  Answer             │
//! ├──────────────────┼─────────────────────────────┼─────────────────────┤
//! │  ExchangeRates   │  exchange_rate(from, to)    │  f64                │
//! │  ShippingQuotes  │  quote(destination)         │  Option<Quote>      │
//! │  Analytics       │  track_page_view(path)      │  ()        (async)  │
//! │  PaymentGateway  │  charge(card, amount)       │  ChargeResult       │
//! │  Mailer          │  send_email(to, message)    │  Result<()> (async) │
//! │  CodeGenerator   │  generate_code()            │  u32                │
//! │  Clock           │  now()                      │  NaiveDateTime      │
//! │  NumberFeed      │  numbers()                  │  Result<Vec> (async)│
//! └──────────────────┴─────────────────────────────┴─────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::NaiveDateTime;

use shopkit_core::{ChargeResult, CreditCard, Money, ShippingQuote};

use crate::error::StorefrontResult;

/// Currency exchange rate lookup.
#[cfg_attr(test, mockall::automock)]
pub trait ExchangeRates: Send + Sync {
    /// Units of `to` per unit of `from`.
    fn exchange_rate(&self, from: &str, to: &str) -> f64;
}

/// Shipping quote lookup.
#[cfg_attr(test, mockall::automock)]
pub trait ShippingQuotes: Send + Sync {
    /// Returns `None` when `destination` cannot be served.
    fn quote(&self, destination: &str) -> Option<ShippingQuote>;
}

/// Page-view tracking.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Analytics: Send + Sync {
    async fn track_page_view(&self, path: &str);
}

/// Card payment processing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, card: &CreditCard, amount: Money) -> ChargeResult;
}

/// Outgoing e-mail.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_email(&self, to: &str, message: &str) -> StorefrontResult<()>;
}

/// One-time security code source.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a code in `0..1_000_000`.
    fn generate_code(&self) -> u32;
}

/// Wall-clock time in the store's local time zone.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Source of the numeric series behind `fetch_data`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NumberFeed: Send + Sync {
    /// Returns the series, or a short description of why it is unavailable.
    async fn numbers(&self) -> Result<Vec<i64>, String>;
}
