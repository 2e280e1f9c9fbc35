//! # Storefront Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPKIT_BASE_CURRENCY=EUR                                          │
//! │     SHOPKIT_OPEN_HOUR=9  SHOPKIT_CLOSE_HOUR=17                         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/shopkit/storefront.toml (Linux)                          │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     USD, 08:00-20:00, Christmas 20% off                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! base_currency = "USD"
//! home_page = "/home"
//!
//! [hours]
//! open = 8
//! close = 20
//!
//! [holiday]
//! month = 12
//! day = 25
//! discount_bps = 2000
//!
//! [rates]
//! AUD = 1.5
//! EUR = 0.92
//!
//! [shipping]
//! cost_cents = 1000
//! estimated_days = 2
//! unavailable = ["Antarctica"]
//!
//! [payments]
//! approval_limit_cents = 1000000
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use shopkit_core::{Holiday, Money, OpeningHours};

use crate::error::{StorefrontError, StorefrontResult};

// =============================================================================
// Store Settings
// =============================================================================

/// Store-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Currency prices are quoted in (ISO 4217 code).
    #[serde(default = "default_base_currency")]
    pub base_currency: String,

    /// Path reported to analytics when the landing page renders.
    #[serde(default = "default_home_page")]
    pub home_page: String,
}

fn default_base_currency() -> String {
    "USD".to_string()
}

fn default_home_page() -> String {
    "/home".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            base_currency: default_base_currency(),
            home_page: default_home_page(),
        }
    }
}

// =============================================================================
// Shipping Settings
// =============================================================================

/// Settings for the flat-rate shipping adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingSettings {
    /// Flat shipping cost in cents.
    #[serde(default = "default_shipping_cost")]
    pub cost_cents: i64,

    /// Delivery estimate in days.
    #[serde(default = "default_estimated_days")]
    pub estimated_days: u32,

    /// Destinations with no shipping service (matched case-insensitively).
    #[serde(default)]
    pub unavailable: Vec<String>,
}

fn default_shipping_cost() -> i64 {
    1000
}

fn default_estimated_days() -> u32 {
    2
}

impl Default for ShippingSettings {
    fn default() -> Self {
        ShippingSettings {
            cost_cents: default_shipping_cost(),
            estimated_days: default_estimated_days(),
            unavailable: Vec::new(),
        }
    }
}

impl ShippingSettings {
    /// Returns the flat cost as Money.
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }
}

// =============================================================================
// Payment Settings
// =============================================================================

/// Settings for the sandbox payment gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSettings {
    /// Largest charge the sandbox gateway approves, in cents.
    #[serde(default = "default_approval_limit")]
    pub approval_limit_cents: i64,
}

fn default_approval_limit() -> i64 {
    1_000_000
}

impl Default for PaymentSettings {
    fn default() -> Self {
        PaymentSettings {
            approval_limit_cents: default_approval_limit(),
        }
    }
}

// =============================================================================
// Main Storefront Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub store: StoreSettings,

    /// Opening hours checked by `is_online`.
    #[serde(default)]
    pub hours: OpeningHours,

    /// Yearly holiday checked by `get_discount`.
    #[serde(default)]
    pub holiday: Holiday,

    /// Exchange rates from the base currency, keyed by target currency code.
    #[serde(default)]
    pub rates: BTreeMap<String, f64>,

    #[serde(default)]
    pub shipping: ShippingSettings,

    #[serde(default)]
    pub payments: PaymentSettings,
}

impl StorefrontConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document; missing sections fall back to defaults.
    pub fn from_toml_str(contents: &str) -> StorefrontResult<Self> {
        let config: StorefrontConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StorefrontResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> StorefrontResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| StorefrontError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorefrontError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| StorefrontError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StorefrontResult<()> {
        let currency = &self.store.base_currency;
        if !is_currency_code(currency) {
            return Err(StorefrontError::InvalidConfig(format!(
                "base_currency must be a three-letter uppercase code, got: '{}'",
                currency
            )));
        }

        if !self.store.home_page.starts_with('/') {
            return Err(StorefrontError::InvalidConfig(format!(
                "home_page must start with '/', got: '{}'",
                self.store.home_page
            )));
        }

        if self.hours.open >= self.hours.close || self.hours.close > 24 {
            return Err(StorefrontError::InvalidConfig(format!(
                "opening hours must satisfy open < close <= 24, got {}-{}",
                self.hours.open, self.hours.close
            )));
        }

        // 2024 is a leap year, so Feb 29 holidays are accepted
        if NaiveDate::from_ymd_opt(2024, self.holiday.month, self.holiday.day).is_none() {
            return Err(StorefrontError::InvalidConfig(format!(
                "holiday {}-{} is not a calendar date",
                self.holiday.month, self.holiday.day
            )));
        }

        if self.holiday.discount.bps() > 10000 {
            return Err(StorefrontError::InvalidConfig(
                "holiday discount_bps must be at most 10000".into(),
            ));
        }

        for (code, rate) in &self.rates {
            if !is_currency_code(code) || !rate.is_finite() || *rate <= 0.0 {
                return Err(StorefrontError::InvalidConfig(format!(
                    "rate for '{}' must be a positive number keyed by a currency code",
                    code
                )));
            }
        }

        if self.shipping.cost_cents < 0 {
            return Err(StorefrontError::InvalidConfig(
                "shipping cost_cents must not be negative".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the process environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(currency) = lookup("SHOPKIT_BASE_CURRENCY") {
            debug!(currency = %currency, "Overriding base currency from environment");
            self.store.base_currency = currency.to_uppercase();
        }

        if let Some(page) = lookup("SHOPKIT_HOME_PAGE") {
            self.store.home_page = page;
        }

        if let Some(open) = lookup("SHOPKIT_OPEN_HOUR") {
            match open.parse::<u32>() {
                Ok(hour) => self.hours.open = hour,
                Err(_) => warn!(value = %open, "Ignoring non-numeric SHOPKIT_OPEN_HOUR"),
            }
        }

        if let Some(close) = lookup("SHOPKIT_CLOSE_HOUR") {
            match close.parse::<u32>() {
                Ok(hour) => self.hours.close = hour,
                Err(_) => warn!(value = %close, "Ignoring non-numeric SHOPKIT_CLOSE_HOUR"),
            }
        }

        if let Some(limit) = lookup("SHOPKIT_APPROVAL_LIMIT_CENTS") {
            if let Ok(cents) = limit.parse::<i64>() {
                self.payments.approval_limit_cents = cents;
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "shopkit", "shopkit")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// Returns the configured rate to `currency`, if any.
    pub fn rate_to(&self, currency: &str) -> Option<f64> {
        if currency == self.store.base_currency {
            return Some(1.0);
        }
        self.rates.get(currency).copied()
    }
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}
