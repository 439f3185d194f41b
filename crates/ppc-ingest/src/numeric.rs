//! Numeric cell coercion.
//!
//! Dirty cells never fail ingestion: anything that does not parse to a
//! finite, non-negative number becomes zero.

/// Parses a numeric cell, tolerating a currency prefix and thousands separators.
///
/// "₹1,234.50", "$ 12" and "INR 40" parse; "N/A", "Q4", "" and "inf" do not.
pub fn parse_amount(value: &str) -> Option<f64> {
    let compact: String = strip_currency(value.trim())
        .chars()
        .filter(|ch| *ch != ',' && !ch.is_whitespace())
        .collect();
    if compact.is_empty() {
        return None;
    }
    compact.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

/// Removes leading currency symbols or a currency code followed by whitespace
/// ("INR 40", "Rs. 40").
fn strip_currency(value: &str) -> &str {
    if let Some((code, rest)) = value.split_once(char::is_whitespace)
        && is_currency_code(code)
    {
        return rest.trim_start();
    }
    value.trim_start_matches(|ch: char| is_currency_symbol(ch) || ch.is_whitespace())
}

fn is_currency_code(code: &str) -> bool {
    let letters = code.strip_suffix('.').unwrap_or(code);
    (2..=3).contains(&letters.len())
        && letters.chars().all(|ch| ch.is_ascii_alphabetic())
        && letters.starts_with(|ch: char| ch.is_ascii_uppercase())
}

fn is_currency_symbol(ch: char) -> bool {
    matches!(ch, '$' | '₹' | '€' | '£' | '¥' | '₩' | '₽' | '¢')
}

/// Currency amount; unparseable or negative values coerce to 0.
pub fn coerce_amount(value: &str) -> f64 {
    match parse_amount(value) {
        Some(amount) if amount > 0.0 => amount,
        _ => 0.0,
    }
}

/// Order count; decimal text truncates ("3.0" -> 3), everything else invalid -> 0.
pub fn coerce_orders(value: &str) -> u64 {
    // float-to-int casts saturate
    coerce_amount(value).trunc() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_decorated_numbers() {
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount(" 7 "), Some(7.0));
        assert_eq!(parse_amount("₹1,234.50"), Some(1234.5));
        assert_eq!(parse_amount("$ 12"), Some(12.0));
        assert_eq!(parse_amount("INR 40"), Some(40.0));
        assert_eq!(parse_amount("Rs. 1,050"), Some(1050.0));
        assert_eq!(parse_amount("€ 3.5"), Some(3.5));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("N/A"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("1-2"), None);
        assert_eq!(parse_amount("Q4"), None);
        assert_eq!(parse_amount("abc5"), None);
        assert_eq!(parse_amount("e5"), None);
        assert_eq!(parse_amount("total 5"), None);
        assert_eq!(coerce_amount("Q4"), 0.0);
    }

    #[test]
    fn coercion_substitutes_zero() {
        assert_eq!(coerce_amount("abc"), 0.0);
        assert_eq!(coerce_amount("-5"), 0.0);
        assert_eq!(coerce_amount("19.99"), 19.99);
        assert_eq!(coerce_orders("3.0"), 3);
        assert_eq!(coerce_orders("2.9"), 2);
        assert_eq!(coerce_orders(""), 0);
        assert_eq!(coerce_orders("-1"), 0);
    }
}
