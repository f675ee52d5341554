/// Round to two decimal places, the precision used at every snapshot edge
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a monetary amount for human-facing text: truncated to whole units,
/// thousands separated by commas
///
/// # Examples
/// ```
/// use backend::shared::format::format_money;
/// assert_eq!(format_money(1234567.89), "1,234,567");
/// assert_eq!(format_money(42.0), "42");
/// ```
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let whole = amount.abs().trunc() as u64;

    let digits = whole.to_string();
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    let grouped: String = result.chars().rev().collect();

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Percentage for human-facing text; "N/A" when the value is not available
pub fn format_pct_opt(value: Option<f64>) -> String {
    match value {
        Some(pct) => format!("{pct:.2}%"),
        None => "N/A".to_string(),
    }
}
