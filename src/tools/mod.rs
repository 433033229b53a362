//! Standalone helpers offered next to the calculator: unit and currency
//! conversion plus a few everyday formulas. None of them go through the
//! expression evaluator.

pub mod currency;
pub mod dates;
pub mod health;
pub mod pricing;
pub mod random;
pub mod units;

/// Fixed-point rendering with trailing zeros (and a bare trailing dot) removed.
pub fn format_trimmed(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
