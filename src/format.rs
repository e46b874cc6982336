//! Currency formatting
//!
//! German locale, euro, no fractional digits: `1840` becomes `1.840 €` with a
//! non-breaking space before the sign.

use crate::models::Money;

/// Non-breaking space placed between the amount and the currency sign
pub const NBSP: char = '\u{a0}';

/// Format an amount as a whole-euro currency string
///
/// Rounds half away from zero. Amounts that round to zero carry no sign.
pub fn format_currency(amount: Money) -> String {
    let euros = amount.round_to_euros();
    let sign = if euros < 0 { "-" } else { "" };
    format!("{}{}{}€", sign, group_thousands(euros.unsigned_abs()), NBSP)
}

/// Format an amount for an editable text field: no grouping, decimal comma
/// only when there are cents
pub fn format_plain(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    if amount.cents_part() == 0 {
        format!("{}{}", sign, amount.euros().abs())
    } else {
        format!("{}{},{:02}", sign, amount.euros().abs(), amount.cents_part())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
