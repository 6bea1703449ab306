//! Currency formatting for display.
//!
//! Pricing stays on raw `u64` amounts; these helpers only turn a final number
//! into text.

use num_format::{Locale, ToFormattedString};

/// Peso sign prefixed to every displayed amount
pub const CURRENCY_SYMBOL: &str = "₱";

/// Format whole pesos with grouped thousands: `40000` -> `₱40,000`.
pub fn format_price(amount: u64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, amount.to_formatted_string(&Locale::en))
}

/// Format an add-on surcharge: `4500` -> `+₱4,500`.
pub fn format_addon_price(amount: u64) -> String {
    format!("+{}", format_price(amount))
}
