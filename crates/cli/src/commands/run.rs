//! Interactive checkout screen.
//!
//! Each input line is treated as the complete current value of the phone
//! field, the same way a text-change listener would deliver it.

use std::io::{BufRead, Write};
use std::rc::Rc;

use checkout_screen::{Basket, CheckoutScreen, PhoneValidator};
use tracing::info;

use super::CommandError;
use super::basket::write_summary;
use crate::terminal::TerminalView;

/// Run one screen session until `input` is exhausted.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn session<R, W>(
    input: R,
    out: &mut W,
    basket: &Basket,
    explain: bool,
) -> Result<(), CommandError>
where
    R: BufRead,
    W: Write,
{
    let view = Rc::new(TerminalView::default());
    let mut screen = CheckoutScreen::open(Rc::clone(&view), basket);

    write_summary(screen.summary(), out)?;
    writeln!(out, "Phone number (one value per line, Ctrl-D to finish):")?;
    out.flush()?;

    let mut changes = 0_usize;
    for line in input.lines() {
        let text = line?;
        screen.phone_changed(&text);
        changes += 1;

        match (explain, PhoneValidator::check(&text)) {
            (true, Err(e)) if view.error_visible() => {
                writeln!(out, "{} ({e})", view.indicator())?;
            }
            _ => writeln!(out, "{}", view.indicator())?,
        }
        out.flush()?;
    }

    screen.close();
    info!(changes, "Checkout session ended");
    Ok(())
}
