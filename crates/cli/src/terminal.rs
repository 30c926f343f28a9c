//! Terminal implementation of the checkout view.

use std::cell::Cell;

use checkout_screen::CheckoutView;

/// Error indicator state for a line-oriented terminal.
///
/// The presenter only flips the flag; the session loop renders it after each
/// input line.
#[derive(Debug, Default)]
pub struct TerminalView {
    error_visible: Cell<bool>,
}

impl TerminalView {
    /// Whether the phone error indicator is currently shown.
    pub const fn error_visible(&self) -> bool {
        self.error_visible.get()
    }

    /// Text rendered next to the phone field.
    pub const fn indicator(&self) -> &'static str {
        if self.error_visible() {
            "[!] invalid phone number"
        } else {
            "[ok]"
        }
    }
}

impl CheckoutView for TerminalView {
    fn show_error_for_phone(&self, visible: bool) {
        self.error_visible.set(visible);
    }
}
