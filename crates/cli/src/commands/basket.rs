//! Basket breakdown output.

use std::io::Write;

use checkout_screen::{Basket, BasketSummary};

use super::CommandError;

/// Print the basket breakdown as text or pretty JSON.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print<W: Write>(basket: &Basket, json: bool, out: &mut W) -> Result<(), CommandError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &basket.summary())?;
        writeln!(out)?;
        return Ok(());
    }

    for item in basket.items() {
        writeln!(out, "  {} x{}  {}", item.title, item.quantity, item.price)?;
    }
    write_summary(&basket.summary(), out)?;
    Ok(())
}

/// The three figures shown at the top of the checkout screen.
pub fn write_summary<W: Write>(summary: &BasketSummary, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Total:               {}", summary.total_price)?;
    writeln!(out, "Discount:            {}", summary.discount_label())?;
    writeln!(out, "Total with discount: {}", summary.total_price_with_discount)
}
