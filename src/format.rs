//! Display formatting for amounts and percentages.

/// Formats a CHF amount with Swiss thousands separators, e.g.
/// `CHF 1'234.50`.
pub fn format_chf(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('\'');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("CHF {sign}{grouped}.{:02}", cents % 100)
}

/// Formats an achievement percentage with one decimal, e.g. `125.0%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
