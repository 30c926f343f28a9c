//! Checkout presenter.
//!
//! Mediates between raw phone field input and the error indicator on the
//! view. The presenter owns no view: it holds a [`Weak`] back-reference that
//! is set by [`CheckoutPresenter::attach_view`] and cleared by
//! [`CheckoutPresenter::detach_view`].
//!
//! # State machine
//!
//! ```text
//!            attach_view            attach_view (replaces)
//! Detached ─────────────> Attached ──────┐
//!    ^                      │  ^         │
//!    │  detach_view /       │  └─────────┘
//!    └── view dropped ──────┘
//! ```

use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::validator::PhoneValidator;
use crate::view::CheckoutView;

/// Whether the presenter currently has a live view to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenterState {
    /// No view, or the attached view has been dropped.
    Detached,
    /// A live view is attached.
    Attached,
}

/// Presenter for the checkout screen.
///
/// Generic over the view type so callers can keep a concrete `Rc<MyView>`;
/// defaults to `dyn CheckoutView` for hosts that mix view implementations.
///
/// None of the operations fail. Input arriving while detached is ignored.
pub struct CheckoutPresenter<V: CheckoutView + ?Sized = dyn CheckoutView> {
    view: Option<Weak<V>>,
}

impl<V: CheckoutView + ?Sized> CheckoutPresenter<V> {
    /// Create a detached presenter.
    #[must_use]
    pub const fn new() -> Self {
        Self { view: None }
    }

    /// Attach `view`, replacing any previously attached view.
    ///
    /// Only a weak reference is kept; the presenter never extends the view's
    /// lifetime.
    pub fn attach_view(&mut self, view: &Rc<V>) {
        if self.view.take().is_some() {
            debug!("Replacing attached checkout view");
        } else {
            debug!("Attaching checkout view");
        }
        self.view = Some(Rc::downgrade(view));
    }

    /// Detach the current view. No-op when already detached.
    pub fn detach_view(&mut self) {
        if self.view.take().is_some() {
            debug!("Detached checkout view");
        }
    }

    /// Current lifecycle state.
    ///
    /// A view that was dropped without being detached reports
    /// [`PresenterState::Detached`].
    #[must_use]
    pub fn state(&self) -> PresenterState {
        match &self.view {
            Some(weak) if weak.strong_count() > 0 => PresenterState::Attached,
            _ => PresenterState::Detached,
        }
    }

    /// Shorthand for `state() == PresenterState::Attached`.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.state() == PresenterState::Attached
    }

    /// Validate the full current text of the phone field and update the view.
    ///
    /// Calls [`CheckoutView::show_error_for_phone`] exactly once with
    /// `!valid` when a live view is attached. Otherwise does nothing. A view
    /// that was dropped without detaching is forgotten here.
    pub fn check_phone_number(&mut self, candidate: &str) {
        let Some(weak) = &self.view else {
            trace!("Phone changed with no view attached");
            return;
        };

        let Some(view) = weak.upgrade() else {
            debug!("Checkout view dropped without detaching, clearing reference");
            self.view = None;
            return;
        };

        let valid = PhoneValidator::is_valid(candidate);
        trace!(valid, len = candidate.chars().count(), "Phone number checked");
        view.show_error_for_phone(!valid);
    }
}

impl<V: CheckoutView + ?Sized> Default for CheckoutPresenter<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: CheckoutView + ?Sized> fmt::Debug for CheckoutPresenter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutPresenter")
            .field("state", &self.state())
            .finish()
    }
}
