//! Basket price breakdown shown above the phone field.
//!
//! The checkout screen displays a fixed demo basket: items are hard-coded
//! and the discount is a flat percentage of the total.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use checkout_core::{CurrencyCode, Price};

/// Discount applied by [`Basket::sample`].
pub const DEFAULT_DISCOUNT_PERCENT: Decimal = Decimal::TEN;

/// One line in the basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasketItem {
    pub title: String,
    pub price: Price,
    pub quantity: u32,
}

impl BasketItem {
    /// Unit price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.amount * Decimal::from(self.quantity)
    }
}

/// A basket of items in a single currency with a percentage discount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basket {
    items: Vec<BasketItem>,
    discount_percent: Decimal,
    currency: CurrencyCode,
}

/// Totals displayed on the checkout screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BasketSummary {
    pub total_price: Price,
    pub discount_percent: Decimal,
    pub total_price_with_discount: Price,
}

impl BasketSummary {
    /// Discount formatted for display, e.g. `10%`.
    #[must_use]
    pub fn discount_label(&self) -> String {
        format!("{}%", self.discount_percent.normalize())
    }
}

impl Basket {
    /// Create an empty basket with no discount.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self {
            items: Vec::new(),
            discount_percent: Decimal::ZERO,
            currency,
        }
    }

    /// The hard-coded basket shown on the checkout screen.
    #[must_use]
    pub fn sample(currency: CurrencyCode) -> Self {
        Self::new(currency)
            .with_item("Wireless headphones", 8999, 1)
            .with_item("Phone case", 1450, 2)
            .with_item("USB-C cable", 999, 3)
            .with_discount_percent(DEFAULT_DISCOUNT_PERCENT)
    }

    /// Add an item priced in cents of the basket's currency.
    #[must_use]
    pub fn with_item(mut self, title: impl Into<String>, unit_cents: i64, quantity: u32) -> Self {
        self.items.push(BasketItem {
            title: title.into(),
            price: Price::from_cents(unit_cents, self.currency),
            quantity,
        });
        self
    }

    /// Set the discount percentage, clamped to `0..=100`.
    #[must_use]
    pub fn with_discount_percent(mut self, percent: Decimal) -> Self {
        self.discount_percent = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        self
    }

    #[must_use]
    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Sum of all line totals before discount.
    #[must_use]
    pub fn total_price(&self) -> Price {
        let amount = self.items.iter().map(BasketItem::line_total).sum();
        Price::new(amount, self.currency)
    }

    /// The discount as a percentage of the total.
    #[must_use]
    pub const fn total_discount(&self) -> Decimal {
        self.discount_percent
    }

    /// Total after discount, rounded to cents (half away from zero).
    #[must_use]
    pub fn total_price_with_discount(&self) -> Price {
        let total = self.total_price().amount;
        let remaining = (Decimal::ONE_HUNDRED - self.discount_percent) / Decimal::ONE_HUNDRED;
        let amount =
            (total * remaining).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Price::new(amount, self.currency)
    }

    /// All figures the screen displays.
    #[must_use]
    pub fn summary(&self) -> BasketSummary {
        BasketSummary {
            total_price: self.total_price(),
            discount_percent: self.total_discount(),
            total_price_with_discount: self.total_price_with_discount(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_totals() {
        let basket = Basket::sample(CurrencyCode::USD);
        assert_eq!(basket.items().len(), 3);
        // 89.99 + 2 * 14.50 + 3 * 9.99
        assert_eq!(basket.total_price().amount, Decimal::new(14896, 2));
        assert_eq!(basket.total_discount(), Decimal::TEN);
        // 148.96 * 0.9 = 134.064
        assert_eq!(
            basket.total_price_with_discount().amount,
            Decimal::new(13406, 2)
        );
    }

    #[test]
    fn test_summary_display() {
        let summary = Basket::sample(CurrencyCode::EUR).summary();
        assert_eq!(summary.total_price.to_string(), "€148.96");
        assert_eq!(summary.discount_label(), "10%");
        assert_eq!(summary.total_price_with_discount.to_string(), "€134.06");
    }

    #[test]
    fn test_empty_basket() {
        let basket = Basket::new(CurrencyCode::GBP);
        assert_eq!(basket.total_price(), Price::zero(CurrencyCode::GBP));
        assert_eq!(basket.total_price_with_discount().amount, Decimal::ZERO);
    }

    #[test]
    fn test_rounding_midpoint_away_from_zero() {
        // 0.05 * 0.5 = 0.025 -> 0.03
        let basket = Basket::new(CurrencyCode::USD)
            .with_item("Sticker", 5, 1)
            .with_discount_percent(Decimal::from(50));
        assert_eq!(
            basket.total_price_with_discount().amount,
            Decimal::new(3, 2)
        );
    }

    #[test]
    fn test_discount_is_clamped() {
        let basket = Basket::sample(CurrencyCode::USD).with_discount_percent(Decimal::from(150));
        assert_eq!(basket.total_discount(), Decimal::ONE_HUNDRED);
        assert_eq!(basket.total_price_with_discount().amount, Decimal::ZERO);

        let basket = Basket::sample(CurrencyCode::USD).with_discount_percent(Decimal::from(-5));
        assert_eq!(basket.total_discount(), Decimal::ZERO);
    }

    #[test]
    fn test_fractional_discount_label() {
        let summary = Basket::sample(CurrencyCode::USD)
            .with_discount_percent(Decimal::new(125, 1))
            .summary();
        assert_eq!(summary.discount_label(), "12.5%");
    }

    #[test]
    fn test_summary_serializes() {
        let summary = Basket::sample(CurrencyCode::USD).summary();
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["total_price"]["amount"], "148.96");
        assert_eq!(json["discount_percent"], "10");
        assert_eq!(json["total_price_with_discount"]["currency_code"], "USD");
    }
}
