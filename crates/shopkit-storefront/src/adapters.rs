//! # Default Adapters
//!
//! In-process implementations of the collaborator ports. None of them talk
//! to a real provider; they let the storefront run end to end from config.

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shopkit_core::{ChargeResult, CreditCard, Money, ShippingQuote};

use crate::config::StorefrontConfig;
use crate::error::StorefrontResult;
use crate::ports::{
    Analytics, Clock, CodeGenerator, ExchangeRates, Mailer, PaymentGateway, ShippingQuotes,
};

// =============================================================================
// Exchange Rates
// =============================================================================

/// Rates from the `[rates]` config table.
///
/// Same-currency lookups are 1.0. Unknown pairs fall back to 1.0 with a warning.
#[derive(Debug, Clone)]
pub struct ConfiguredRates {
    config: Arc<StorefrontConfig>,
}

impl ConfiguredRates {
    pub fn new(config: Arc<StorefrontConfig>) -> Self {
        ConfiguredRates { config }
    }
}

impl ExchangeRates for ConfiguredRates {
    fn exchange_rate(&self, from: &str, to: &str) -> f64 {
        if from == to {
            return 1.0;
        }

        let base = self.config.store.base_currency.as_str();
        let rate = if from == base {
            self.config.rate_to(to)
        } else if to == base {
            self.config.rate_to(from).map(|r| 1.0 / r)
        } else {
            self.config
                .rate_to(from)
                .zip(self.config.rate_to(to))
                .map(|(f, t)| t / f)
        };

        rate.unwrap_or_else(|| {
            warn!(from = %from, to = %to, "No exchange rate configured, using 1.0");
            1.0
        })
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// One flat quote for every destination except the configured exclusions.
#[derive(Debug, Clone)]
pub struct FlatRateShipping {
    quote: ShippingQuote,
    unavailable: Vec<String>,
}

impl FlatRateShipping {
    pub fn new(quote: ShippingQuote, unavailable: Vec<String>) -> Self {
        FlatRateShipping { quote, unavailable }
    }

    pub fn from_config(config: &StorefrontConfig) -> Self {
        FlatRateShipping::new(
            ShippingQuote {
                cost: config.shipping.cost(),
                estimated_days: config.shipping.estimated_days,
            },
            config.shipping.unavailable.clone(),
        )
    }
}

impl ShippingQuotes for FlatRateShipping {
    fn quote(&self, destination: &str) -> Option<ShippingQuote> {
        let blocked = self
            .unavailable
            .iter()
            .any(|d| d.eq_ignore_ascii_case(destination.trim()));
        (!blocked).then_some(self.quote)
    }
}

// =============================================================================
// Analytics
// =============================================================================

/// Records page views as tracing events.
#[derive(Debug, Clone, Default)]
pub struct TracingAnalytics;

#[async_trait]
impl Analytics for TracingAnalytics {
    async fn track_page_view(&self, path: &str) {
        info!(path = %path, "page view");
    }
}

// =============================================================================
// Payments
// =============================================================================

/// Approves every charge up to a limit and declines the rest.
#[derive(Debug, Clone)]
pub struct SandboxGateway {
    approval_limit: Money,
}

impl SandboxGateway {
    pub fn new(approval_limit: Money) -> Self {
        SandboxGateway { approval_limit }
    }
}

#[async_trait]
impl PaymentGateway for SandboxGateway {
    async fn charge(&self, card: &CreditCard, amount: Money) -> ChargeResult {
        if amount.is_negative() || amount > self.approval_limit {
            debug!(card = %card.masked(), amount = %amount, "sandbox charge declined");
            return ChargeResult::failed();
        }
        debug!(card = %card.masked(), amount = %amount, "sandbox charge approved");
        ChargeResult::success()
    }
}

// =============================================================================
// Mail
// =============================================================================

/// Writes outgoing mail to the log instead of delivering it.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_email(&self, to: &str, message: &str) -> StorefrontResult<()> {
        info!(to = %to, len = message.len(), "email queued");
        Ok(())
    }
}

// =============================================================================
// Security Codes
// =============================================================================

/// Six-digit codes drawn from a v4 UUID's random bits.
#[derive(Debug, Clone, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate_code(&self) -> u32 {
        (Uuid::new_v4().as_u128() % 1_000_000) as u32
    }
}

// =============================================================================
// Clocks
// =============================================================================

/// The machine's local time.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config_with_rates() -> Arc<StorefrontConfig> {
        let mut config = StorefrontConfig::default();
        config.rates.insert("AUD".to_string(), 1.5);
        config.rates.insert("EUR".to_string(), 0.5);
        Arc::new(config)
    }

    #[test]
    fn test_configured_rates() {
        let rates = ConfiguredRates::new(config_with_rates());
        assert_eq!(rates.exchange_rate("USD", "USD"), 1.0);
        assert_eq!(rates.exchange_rate("USD", "AUD"), 1.5);
        assert_eq!(rates.exchange_rate("EUR", "USD"), 2.0);
        assert_eq!(rates.exchange_rate("EUR", "AUD"), 3.0);
        assert_eq!(rates.exchange_rate("USD", "JPY"), 1.0);
    }

    #[test]
    fn test_flat_rate_shipping() {
        let mut config = StorefrontConfig::default();
        config.shipping.unavailable.push("Antarctica".to_string());
        let shipping = FlatRateShipping::from_config(&config);

        let quote = shipping.quote("London").unwrap();
        assert_eq!(quote.cost, Money::from_cents(1000));
        assert_eq!(quote.estimated_days, 2);
        assert!(shipping.quote("antarctica").is_none());
    }

    #[tokio::test]
    async fn test_sandbox_gateway_limit() {
        let gateway = SandboxGateway::new(Money::from_cents(5000));
        let card = CreditCard {
            credit_card_number: "1234".to_string(),
        };

        assert_eq!(gateway.charge(&card, Money::from_cents(5000)).await, ChargeResult::success());
        assert_eq!(gateway.charge(&card, Money::from_cents(5001)).await, ChargeResult::failed());
        assert_eq!(gateway.charge(&card, Money::from_cents(-1)).await, ChargeResult::failed());
    }

    #[tokio::test]
    async fn test_log_mailer_accepts_mail() {
        assert!(LogMailer.send_email("name@domain.com", "hi").await.is_ok());
        TracingAnalytics.track_page_view("/home").await;
    }

    #[test]
    fn test_random_codes_are_six_digits() {
        let generator = RandomCodeGenerator;
        for _ in 0..100 {
            assert!(generator.generate_code() < 1_000_000);
        }
    }

    #[test]
    fn test_fixed_clock() {
        let instant = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(7, 59, 0)
            .unwrap();
        assert_eq!(FixedClock(instant).now(), instant);
    }
}
