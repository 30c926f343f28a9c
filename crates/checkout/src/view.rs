//! The display contract the checkout presenter drives.

/// A display surface for the checkout screen.
///
/// Implementors are whatever actually renders the screen (a terminal, a
/// widget toolkit, a test double). The presenter never owns a view; it only
/// keeps a weak back-reference while the view is attached.
///
/// Methods take `&self` because the presenter reaches the view through an
/// [`std::rc::Rc`]; use `Cell` or `RefCell` for any state that changes.
pub trait CheckoutView {
    /// Show (`true`) or hide (`false`) the error indicator next to the phone
    /// field.
    ///
    /// Must be idempotent: calling it twice with the same value leaves the
    /// same visible state.
    fn show_error_for_phone(&self, visible: bool);
}
