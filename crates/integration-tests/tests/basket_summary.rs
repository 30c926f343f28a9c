//! Integration tests for the basket breakdown and its configuration.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rust_decimal::Decimal;

use checkout_core::CurrencyCode;
use checkout_screen::{Basket, CheckoutConfig};

#[test]
fn test_sample_basket_summary() {
    let summary = Basket::sample(CurrencyCode::USD).summary();
    assert_eq!(summary.total_price.to_string(), "$148.96");
    assert_eq!(summary.discount_label(), "10%");
    assert_eq!(summary.total_price_with_discount.to_string(), "$134.06");
}

#[test]
fn test_configured_basket() {
    let config = CheckoutConfig::from_lookup(|key| match key {
        "CHECKOUT_CURRENCY" => Some("eur".to_string()),
        "CHECKOUT_DISCOUNT_PERCENT" => Some("25".to_string()),
        _ => None,
    })
    .unwrap();

    let basket = Basket::sample(config.currency).with_discount_percent(config.discount_percent);
    let summary = basket.summary();

    assert_eq!(summary.total_price.currency_code, CurrencyCode::EUR);
    // 148.96 * 0.75
    assert_eq!(summary.total_price_with_discount.amount, Decimal::new(11172, 2));
}

#[test]
fn test_summary_json_shape() {
    let summary = Basket::sample(CurrencyCode::CAD).summary();
    let value = serde_json::to_value(summary).unwrap();

    assert_eq!(value["total_price"]["amount"], "148.96");
    assert_eq!(value["total_price"]["currency_code"], "CAD");
    assert_eq!(value["discount_percent"], "10");
}
