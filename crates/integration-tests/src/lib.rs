//! Integration tests for the checkout screen.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p checkout-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `phone_validation` - The documented phone grammar end to end
//! - `checkout_presenter` - Presenter and screen lifecycle against a recording view
//! - `basket_summary` - Basket figures and configuration
//!
//! Shared test doubles live here so every test file drives the presenter
//! the same way.

use std::cell::RefCell;

use checkout_screen::CheckoutView;

/// A view that records every indicator update it receives.
#[derive(Debug, Default)]
pub struct RecordingView {
    calls: RefCell<Vec<bool>>,
}

impl RecordingView {
    /// Every `show_error_for_phone` argument, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<bool> {
        self.calls.borrow().clone()
    }

    /// The indicator state after the last call, if any call was made.
    #[must_use]
    pub fn last(&self) -> Option<bool> {
        self.calls.borrow().last().copied()
    }
}

impl CheckoutView for RecordingView {
    fn show_error_for_phone(&self, visible: bool) {
        self.calls.borrow_mut().push(visible);
    }
}
