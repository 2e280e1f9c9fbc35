//! # Storefront
//!
//! Customer-facing flows that lean on external collaborators.
//!
//! ## Flow Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Storefront                                     │
//! │                                                                         │
//! │  price_in_currency ──► ExchangeRates                                   │
//! │  shipping_info     ──► ShippingQuotes                                  │
//! │  render_page       ──► Analytics                                       │
//! │  submit_order      ──► PaymentGateway                                  │
//! │  sign_up           ──► validation::is_valid_email ──► Mailer           │
//! │  login             ──► CodeGenerator ──► Mailer                        │
//! │  is_online         ──► Clock ──► calendar::is_within_hours             │
//! │  get_discount      ──► Clock ──► calendar::holiday_discount            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use tracing::{debug, warn};

use shopkit_core::calendar::{holiday_discount, is_within_hours};
use shopkit_core::validation::is_valid_email;
use shopkit_core::{ChargeStatus, CreditCard, Money, Order, OrderOutcome};

use crate::adapters::{
    ConfiguredRates, FlatRateShipping, LogMailer, RandomCodeGenerator, SandboxGateway,
    SystemClock, TracingAnalytics,
};
use crate::config::StorefrontConfig;
use crate::error::StorefrontResult;
use crate::ports::{
    Analytics, Clock, CodeGenerator, ExchangeRates, Mailer, PaymentGateway, ShippingQuotes,
};

/// Markup returned by [`Storefront::render_page`].
pub const PAGE_CONTENT: &str = "<div>content</div>";

/// Text returned by [`Storefront::shipping_info`] when no quote exists.
pub const SHIPPING_UNAVAILABLE: &str = "Shipping Unavailable";

/// Body of the sign-up e-mail.
pub const WELCOME_MESSAGE: &str = "Welcome aboard!";

// =============================================================================
// Collaborators
// =============================================================================

/// The set of collaborators a [`Storefront`] calls through.
#[derive(Clone)]
pub struct Collaborators {
    pub rates: Arc<dyn ExchangeRates>,
    pub shipping: Arc<dyn ShippingQuotes>,
    pub analytics: Arc<dyn Analytics>,
    pub payments: Arc<dyn PaymentGateway>,
    pub mailer: Arc<dyn Mailer>,
    pub codes: Arc<dyn CodeGenerator>,
    pub clock: Arc<dyn Clock>,
}

impl Collaborators {
    /// The in-process adapters, configured from `config`.
    pub fn from_config(config: Arc<StorefrontConfig>) -> Self {
        Collaborators {
            rates: Arc::new(ConfiguredRates::new(Arc::clone(&config))),
            shipping: Arc::new(FlatRateShipping::from_config(&config)),
            analytics: Arc::new(TracingAnalytics),
            payments: Arc::new(SandboxGateway::new(Money::from_cents(
                config.payments.approval_limit_cents,
            ))),
            mailer: Arc::new(LogMailer),
            codes: Arc::new(RandomCodeGenerator),
            clock: Arc::new(SystemClock),
        }
    }
}

// =============================================================================
// Storefront
// =============================================================================

/// Storefront flows over injected collaborators.
#[derive(Clone)]
pub struct Storefront {
    config: Arc<StorefrontConfig>,
    deps: Collaborators,
}

impl Storefront {
    pub fn new(config: Arc<StorefrontConfig>, deps: Collaborators) -> Self {
        Storefront { config, deps }
    }

    /// A storefront wired to the default adapters.
    pub fn with_defaults(config: StorefrontConfig) -> Self {
        let config = Arc::new(config);
        let deps = Collaborators::from_config(Arc::clone(&config));
        Storefront::new(config, deps)
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Converts a base-currency price into `currency`.
    pub fn price_in_currency(&self, price: f64, currency: &str) -> f64 {
        let rate = self
            .deps
            .rates
            .exchange_rate(&self.config.store.base_currency, currency);
        debug!(price, currency = %currency, rate, "price_in_currency");
        price * rate
    }

    /// Describes shipping to `destination`.
    ///
    /// ## Format
    /// `"Shipping Cost: $10 (2 Days)"`, or `"Shipping Unavailable"`.
    pub fn shipping_info(&self, destination: &str) -> String {
        match self.deps.shipping.quote(destination) {
            Some(quote) => format!(
                "Shipping Cost: {} ({} Days)",
                quote.cost.to_compact_string(),
                quote.estimated_days
            ),
            None => {
                debug!(destination = %destination, "no shipping quote");
                SHIPPING_UNAVAILABLE.to_string()
            }
        }
    }

    /// Renders the landing page and records the view.
    pub async fn render_page(&self) -> String {
        self.deps
            .analytics
            .track_page_view(&self.config.store.home_page)
            .await;
        PAGE_CONTENT.to_string()
    }

    /// Charges `card` for the order total.
    pub async fn submit_order(&self, order: &Order, card: &CreditCard) -> OrderOutcome {
        let result = self.deps.payments.charge(card, order.total_amount).await;

        match result.status {
            ChargeStatus::Success => OrderOutcome::succeeded(),
            ChargeStatus::Failed => {
                warn!(card = %card.masked(), amount = %order.total_amount, "payment declined");
                OrderOutcome::payment_error()
            }
        }
    }

    /// Registers `email` and sends the welcome mail.
    ///
    /// Returns `Ok(false)` without sending anything when the address is malformed.
    pub async fn sign_up(&self, email: &str) -> StorefrontResult<bool> {
        if !is_valid_email(email) {
            debug!(email = %email, "sign_up rejected malformed email");
            return Ok(false);
        }

        self.deps.mailer.send_email(email, WELCOME_MESSAGE).await?;
        Ok(true)
    }

    /// Mails a fresh one-time login code to `email`.
    pub async fn login(&self, email: &str) -> StorefrontResult<()> {
        let code = self.deps.codes.generate_code();
        self.deps.mailer.send_email(email, &code.to_string()).await
    }

    /// Returns true during opening hours.
    pub fn is_online(&self) -> bool {
        is_within_hours(self.deps.clock.now().time(), self.config.hours)
    }

    /// Today's storewide discount as a fraction (0.2 on the holiday, else 0).
    pub fn get_discount(&self) -> f64 {
        holiday_discount(self.deps.clock.now().date(), &self.config.holiday).fraction()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixedClock;
    use crate::error::StorefrontError;
    use crate::ports::{
        MockAnalytics, MockClock, MockCodeGenerator, MockExchangeRates, MockMailer,
        MockPaymentGateway, MockShippingQuotes,
    };
    use chrono::{NaiveDate, NaiveDateTime};
    use mockall::predicate::eq;
    use shopkit_core::{ChargeResult, Money, ShippingQuote};
    use std::sync::Mutex;

    /// Collaborators with no expectations: any unexpected call fails the test.
    fn strict() -> Collaborators {
        Collaborators {
            rates: Arc::new(MockExchangeRates::new()),
            shipping: Arc::new(MockShippingQuotes::new()),
            analytics: Arc::new(MockAnalytics::new()),
            payments: Arc::new(MockPaymentGateway::new()),
            mailer: Arc::new(MockMailer::new()),
            codes: Arc::new(MockCodeGenerator::new()),
            clock: Arc::new(MockClock::new()),
        }
    }

    fn storefront(deps: Collaborators) -> Storefront {
        Storefront::new(Arc::new(StorefrontConfig::default()), deps)
    }

    fn at(date: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M").unwrap()
    }

    fn on_day(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn with_clock(instant: NaiveDateTime) -> Storefront {
        storefront(Collaborators {
            clock: Arc::new(FixedClock(instant)),
            ..strict()
        })
    }

    // -------------------------------------------------------------------------
    // price_in_currency
    // -------------------------------------------------------------------------

    #[test]
    fn test_price_in_currency() {
        let mut rates = MockExchangeRates::new();
        rates
            .expect_exchange_rate()
            .with(eq("USD"), eq("AUD"))
            .return_const(1.5);

        let shop = storefront(Collaborators {
            rates: Arc::new(rates),
            ..strict()
        });

        assert_eq!(shop.price_in_currency(10.0, "AUD"), 15.0);
    }

    // -------------------------------------------------------------------------
    // shipping_info
    // -------------------------------------------------------------------------

    #[test]
    fn test_shipping_info_with_quote() {
        let mut shipping = MockShippingQuotes::new();
        shipping.expect_quote().with(eq("London")).returning(|_| {
            Some(ShippingQuote {
                cost: Money::from_cents(1000),
                estimated_days: 2,
            })
        });

        let shop = storefront(Collaborators {
            shipping: Arc::new(shipping),
            ..strict()
        });
        let info = shop.shipping_info("London");

        assert!(info.contains("$10"));
        assert!(info.to_lowercase().contains("2 days"));
        assert_eq!(info, "Shipping Cost: $10 (2 Days)");
    }

    #[test]
    fn test_shipping_info_without_quote() {
        let mut shipping = MockShippingQuotes::new();
        shipping.expect_quote().returning(|_| None);

        let shop = storefront(Collaborators {
            shipping: Arc::new(shipping),
            ..strict()
        });

        assert!(shop.shipping_info("London").to_lowercase().contains("unavailable"));
    }

    // -------------------------------------------------------------------------
    // render_page
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_render_page_returns_content() {
        let mut analytics = MockAnalytics::new();
        analytics.expect_track_page_view().return_const(());

        let shop = storefront(Collaborators {
            analytics: Arc::new(analytics),
            ..strict()
        });

        assert!(shop.render_page().await.contains("content"));
    }

    #[tokio::test]
    async fn test_render_page_tracks_home() {
        let mut analytics = MockAnalytics::new();
        analytics
            .expect_track_page_view()
            .with(eq("/home"))
            .times(1)
            .return_const(());

        let shop = storefront(Collaborators {
            analytics: Arc::new(analytics),
            ..strict()
        });

        shop.render_page().await;
    }

    // -------------------------------------------------------------------------
    // submit_order
    // -------------------------------------------------------------------------

    fn order() -> Order {
        Order {
            total_amount: Money::from_cents(1000),
        }
    }

    fn card() -> CreditCard {
        CreditCard {
            credit_card_number: "1234".to_string(),
        }
    }

    fn gateway_returning(result: ChargeResult) -> MockPaymentGateway {
        let mut payments = MockPaymentGateway::new();
        payments.expect_charge().returning(move |_, _| result);
        payments
    }

    #[tokio::test]
    async fn test_submit_order_charges_customer() {
        let mut payments = MockPaymentGateway::new();
        payments
            .expect_charge()
            .with(eq(card()), eq(Money::from_cents(1000)))
            .times(1)
            .returning(|_, _| ChargeResult::success());

        let shop = storefront(Collaborators {
            payments: Arc::new(payments),
            ..strict()
        });

        shop.submit_order(&order(), &card()).await;
    }

    #[tokio::test]
    async fn test_submit_order_success() {
        let shop = storefront(Collaborators {
            payments: Arc::new(gateway_returning(ChargeResult::success())),
            ..strict()
        });

        let outcome = shop.submit_order(&order(), &card()).await;
        assert_eq!(outcome, OrderOutcome { success: true, error: None });
    }

    #[tokio::test]
    async fn test_submit_order_payment_failed() {
        let shop = storefront(Collaborators {
            payments: Arc::new(gateway_returning(ChargeResult::failed())),
            ..strict()
        });

        let outcome = shop.submit_order(&order(), &card()).await;
        assert_eq!(
            outcome,
            OrderOutcome {
                success: false,
                error: Some("payment_error".to_string())
            }
        );
    }

    // -------------------------------------------------------------------------
    // sign_up
    // -------------------------------------------------------------------------

    const EMAIL: &str = "name@domain.com";

    #[tokio::test]
    async fn test_sign_up_rejects_invalid_email() {
        // strict mailer: any send would panic
        let shop = storefront(strict());
        assert!(!shop.sign_up("a").await.unwrap());
    }

    #[tokio::test]
    async fn test_sign_up_accepts_valid_email() {
        let mut mailer = MockMailer::new();
        mailer.expect_send_email().returning(|_, _| Ok(()));

        let shop = storefront(Collaborators {
            mailer: Arc::new(mailer),
            ..strict()
        });

        assert!(shop.sign_up(EMAIL).await.unwrap());
    }

    #[tokio::test]
    async fn test_sign_up_sends_welcome_email_once() {
        let sent: Arc<Mutex<Vec<(String, String)>>> = Arc::default();
        let log = Arc::clone(&sent);

        let mut mailer = MockMailer::new();
        mailer.expect_send_email().times(1).returning(move |to, message| {
            log.lock().unwrap().push((to.to_string(), message.to_string()));
            Ok(())
        });

        let shop = storefront(Collaborators {
            mailer: Arc::new(mailer),
            ..strict()
        });
        shop.sign_up(EMAIL).await.unwrap();

        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, EMAIL);
        assert!(sent[0].1.to_lowercase().contains("welcome"));
    }

    #[tokio::test]
    async fn test_sign_up_propagates_delivery_failure() {
        let mut mailer = MockMailer::new();
        mailer.expect_send_email().returning(|to, _| {
            Err(StorefrontError::DeliveryFailed {
                to: to.to_string(),
                reason: "smtp down".to_string(),
            })
        });

        let shop = storefront(Collaborators {
            mailer: Arc::new(mailer),
            ..strict()
        });

        assert!(matches!(
            shop.sign_up(EMAIL).await,
            Err(StorefrontError::DeliveryFailed { .. })
        ));
    }

    // -------------------------------------------------------------------------
    // login
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_login_emails_generated_code() {
        let mut codes = MockCodeGenerator::new();
        codes.expect_generate_code().times(1).return_const(123456u32);

        let mut mailer = MockMailer::new();
        mailer
            .expect_send_email()
            .with(eq(EMAIL), eq("123456"))
            .times(1)
            .returning(|_, _| Ok(()));

        let shop = storefront(Collaborators {
            codes: Arc::new(codes),
            mailer: Arc::new(mailer),
            ..strict()
        });

        shop.login(EMAIL).await.unwrap();
    }

    // -------------------------------------------------------------------------
    // is_online / get_discount
    // -------------------------------------------------------------------------

    #[test]
    fn test_is_online_outside_opening_hours() {
        assert!(!with_clock(at("2024-01-01 07:59")).is_online());
        assert!(!with_clock(at("2024-01-01 20:01")).is_online());
    }

    #[test]
    fn test_is_online_within_opening_hours() {
        assert!(with_clock(at("2024-01-01 08:00")).is_online());
        assert!(with_clock(at("2024-01-01 19:59")).is_online());
    }

    #[test]
    fn test_is_online_reads_clock_each_call() {
        let mut clock = MockClock::new();
        clock.expect_now().times(2).return_const(at("2024-01-01 12:00"));

        let shop = storefront(Collaborators {
            clock: Arc::new(clock),
            ..strict()
        });

        assert!(shop.is_online());
        assert!(shop.is_online());
    }

    #[test]
    fn test_discount_on_christmas() {
        assert_eq!(with_clock(on_day(2024, 12, 25)).get_discount(), 0.2);
    }

    #[test]
    fn test_no_discount_on_normal_day() {
        assert_eq!(with_clock(on_day(2024, 12, 24)).get_discount(), 0.0);
    }

    // -------------------------------------------------------------------------
    // default wiring
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_default_wiring_runs_end_to_end() {
        let mut config = StorefrontConfig::default();
        config.rates.insert("AUD".to_string(), 1.5);
        let shop = Storefront::with_defaults(config);

        assert_eq!(shop.price_in_currency(10.0, "AUD"), 15.0);
        assert_eq!(shop.shipping_info("London"), "Shipping Cost: $10 (2 Days)");
        assert_eq!(shop.render_page().await, PAGE_CONTENT);
        assert!(shop.submit_order(&order(), &card()).await.success);
        assert!(shop.sign_up(EMAIL).await.unwrap());
        assert!(shop.login(EMAIL).await.is_ok());
    }
}
