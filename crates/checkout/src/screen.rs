//! Hosting screen for the checkout presenter.
//!
//! A [`CheckoutScreen`] ties one view to one presenter for the lifetime of
//! the screen: opening attaches the view, every phone field change is
//! forwarded as the complete current text, and closing (or dropping) detaches.

use std::rc::Rc;

use tracing::debug;

use crate::basket::{Basket, BasketSummary};
use crate::presenter::CheckoutPresenter;
use crate::view::CheckoutView;

/// One open checkout screen.
pub struct CheckoutScreen<V: CheckoutView + ?Sized = dyn CheckoutView> {
    view: Rc<V>,
    presenter: CheckoutPresenter<V>,
    summary: BasketSummary,
}

impl<V: CheckoutView + ?Sized> CheckoutScreen<V> {
    /// Open the screen: attach `view` to a fresh presenter and compute the
    /// basket figures to display.
    #[must_use]
    pub fn open(view: Rc<V>, basket: &Basket) -> Self {
        let mut presenter = CheckoutPresenter::new();
        presenter.attach_view(&view);
        let summary = basket.summary();
        debug!(
            currency = %basket.currency(),
            items = basket.items().len(),
            "Checkout screen opened"
        );
        Self {
            view,
            presenter,
            summary,
        }
    }

    /// The phone field changed; `full_text` is its complete current value.
    pub fn phone_changed(&mut self, full_text: &str) {
        self.presenter.check_phone_number(full_text);
    }

    /// Basket figures computed when the screen opened.
    #[must_use]
    pub const fn summary(&self) -> &BasketSummary {
        &self.summary
    }

    /// The view this screen renders into.
    #[must_use]
    pub const fn view(&self) -> &Rc<V> {
        &self.view
    }

    /// Whether the presenter is still driving the view.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.presenter.is_attached()
    }

    /// Tear the screen down, detaching the view from the presenter.
    pub fn close(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if self.presenter.is_attached() {
            self.presenter.detach_view();
            debug!("Checkout screen closed");
        }
    }
}

impl<V: CheckoutView + ?Sized> Drop for CheckoutScreen<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use checkout_core::CurrencyCode;

    use super::*;

    #[derive(Default)]
    struct IndicatorView {
        error_visible: Cell<bool>,
        updates: Cell<usize>,
    }

    impl CheckoutView for IndicatorView {
        fn show_error_for_phone(&self, visible: bool) {
            self.error_visible.set(visible);
            self.updates.set(self.updates.get() + 1);
        }
    }

    #[test]
    fn test_open_attaches_without_touching_view() {
        let view = Rc::new(IndicatorView::default());
        let screen = CheckoutScreen::open(Rc::clone(&view), &Basket::sample(CurrencyCode::USD));
        assert!(screen.is_open());
        assert_eq!(view.updates.get(), 0);
    }

    #[test]
    fn test_typing_toggles_indicator() {
        let view = Rc::new(IndicatorView::default());
        let mut screen =
            CheckoutScreen::open(Rc::clone(&view), &Basket::sample(CurrencyCode::USD));

        screen.phone_changed("+123");
        assert!(view.error_visible.get());

        screen.phone_changed("+1234567890");
        assert!(!view.error_visible.get());

        screen.phone_changed("+123456789");
        assert!(view.error_visible.get());
        assert_eq!(view.updates.get(), 3);
    }

    #[test]
    fn test_teardown_detaches() {
        let view = Rc::new(IndicatorView::default());
        let mut screen =
            CheckoutScreen::open(Rc::clone(&view), &Basket::sample(CurrencyCode::USD));
        screen.phone_changed("12345");
        assert_eq!(view.updates.get(), 1);

        // Shared by `close` and `Drop`
        screen.teardown();
        assert!(!screen.presenter.is_attached());
        assert!(!screen.is_open());

        screen.phone_changed("12345");
        screen.phone_changed("+1234567890");
        assert_eq!(view.updates.get(), 1);
        assert!(view.error_visible.get());
    }

    #[test]
    fn test_teardown_twice_is_harmless() {
        let view = Rc::new(IndicatorView::default());
        let mut screen =
            CheckoutScreen::open(Rc::clone(&view), &Basket::sample(CurrencyCode::USD));
        screen.teardown();
        screen.teardown();
        assert!(!screen.is_open());
        screen.close();
        assert_eq!(view.updates.get(), 0);
    }

    #[test]
    fn test_summary_matches_basket() {
        let basket = Basket::sample(CurrencyCode::AUD);
        let view = Rc::new(IndicatorView::default());
        let screen = CheckoutScreen::open(view, &basket);
        assert_eq!(*screen.summary(), basket.summary());
    }
}
