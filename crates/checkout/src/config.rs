//! Checkout configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CHECKOUT_CURRENCY` - ISO 4217 code for basket prices (default: USD)
//! - `CHECKOUT_DISCOUNT_PERCENT` - Basket discount, 0 to 100 (default: 10)

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use checkout_core::CurrencyCode;

use crate::basket::DEFAULT_DISCOUNT_PERCENT;

const CURRENCY_VAR: &str = "CHECKOUT_CURRENCY";
const DISCOUNT_VAR: &str = "CHECKOUT_DISCOUNT_PERCENT";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Checkout screen configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Currency the basket is priced in
    pub currency: CurrencyCode,
    /// Flat basket discount percentage
    pub discount_percent: Decimal,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            discount_percent: DEFAULT_DISCOUNT_PERCENT,
        }
    }
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let currency = lookup(CURRENCY_VAR)
            .map(|value| parse_var::<CurrencyCode>(CURRENCY_VAR, &value))
            .transpose()?
            .unwrap_or(defaults.currency);

        let discount_percent = lookup(DISCOUNT_VAR)
            .map(|value| parse_discount(&value))
            .transpose()?
            .unwrap_or(defaults.discount_percent);

        Ok(Self {
            currency,
            discount_percent,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable with its `FromStr` impl, keeping the variable name in the error.
fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse the discount percentage and check it is within `0..=100`.
fn parse_discount(value: &str) -> Result<Decimal, ConfigError> {
    let percent = parse_var::<Decimal>(DISCOUNT_VAR, value)?;
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(ConfigError::InvalidEnvVar(
            DISCOUNT_VAR.to_string(),
            format!("must be between 0 and 100 (got {percent})"),
        ));
    }
    Ok(percent)
}
