use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a rupee amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for amount parsing: trims whitespace, drops a leading
/// rupee sign, and removes comma/underscore digit separators.
fn normalize_amount_input(s: &str) -> String {
    let s = s.trim();
    let s = s.strip_prefix('₹').unwrap_or(s).trim_start();
    s.replace([',', '_'], "")
}

/// Parses a string into a rupee amount.
///
/// Handles Indian digit grouping (`"1,50,000"`) as well as western
/// grouping and underscores. Empty or whitespace-only input is treated
/// as 0, making the parse a total function over blank form fields.
/// Returns an error and logs when the input is non-empty but not
/// parseable.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Formats a rupee amount with Indian digit grouping: the last three
/// digits form one group, the rest group in pairs (`1500000` →
/// `"15,00,000"`). Fractions survive as-is after rounding to paise.
pub fn format_inr(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let grouped = if int_part.len() > 3 {
        let (head, tail) = int_part.split_at(int_part.len() - 3);
        let mut parts = Vec::new();
        let mut end = head.len();
        while end > 2 {
            parts.push(&head[end - 2..end]);
            end -= 2;
        }
        parts.push(&head[..end]);
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    } else {
        int_part.to_string()
    };

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
