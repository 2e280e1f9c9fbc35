//! # shopkit-storefront: Storefront Flows for shopkit
//!
//! The async half of shopkit. Every flow here depends on something outside the
//! process (a rate provider, a mailer, the wall clock) and reaches it through a
//! port trait so tests can swap in mocks.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        shopkit-storefront                               │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Storefront                                  │  │
//! │  │  price_in_currency · shipping_info · render_page · submit_order  │  │
//! │  │  sign_up · login · is_online · get_discount                      │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │ Arc<dyn Port>                           │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │ ports          │  │ adapters       │  │ config                 │    │
//! │  │ ExchangeRates  │◄─│ ConfiguredRates│◄─│ storefront.toml        │    │
//! │  │ Mailer, Clock  │  │ LogMailer      │  │ + SHOPKIT_* env vars   │    │
//! │  │ ...            │  │ SystemClock    │  │                        │    │
//! │  └────────────────┘  └────────────────┘  └────────────────────────┘    │
//! │                                                                         │
//! │  fetch_data ──► NumberFeed (simulated latency, may fail)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`adapters`] - In-process port implementations
//! - [`config`] - Storefront configuration (TOML file + environment)
//! - [`error`] - Storefront and fetch error types
//! - [`fetch`] - Async numeric fetch with failure path
//! - [`ports`] - Collaborator traits
//! - [`storefront`] - The flows themselves
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopkit_storefront::{Storefront, StorefrontConfig};
//!
//! let config = StorefrontConfig::load_or_default(None);
//! let shop = Storefront::with_defaults(config);
//!
//! println!("{}", shop.shipping_info("London"));
//! shop.sign_up("name@domain.com").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod adapters;
pub mod config;
pub mod error;
pub mod fetch;
pub mod ports;
pub mod storefront;

// =============================================================================
// Re-exports
// =============================================================================

pub use adapters::{
    ConfiguredRates, FixedClock, FlatRateShipping, LogMailer, RandomCodeGenerator,
    SandboxGateway, SystemClock, TracingAnalytics,
};
pub use config::{PaymentSettings, ShippingSettings, StoreSettings, StorefrontConfig};
pub use error::{FetchError, StorefrontError, StorefrontResult};
pub use fetch::{fetch_data, fetch_data_from, SimulatedFeed};
pub use ports::{
    Analytics, Clock, CodeGenerator, ExchangeRates, Mailer, NumberFeed, PaymentGateway,
    ShippingQuotes,
};
pub use storefront::{Collaborators, Storefront};
