// src/process/amount.rs
use crate::error::FormatError;
use once_cell::sync::Lazy;
use regex::Regex;

static CURRENCY_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[$,]").expect("currency pattern should parse"));

/// Parse a currency-formatted amount like `"$1,234.50"` into an `f64`.
/// Dollar signs and thousands separators are stripped before parsing.
pub fn parse_amount(raw: &str) -> Result<f64, FormatError> {
    let cleaned = CURRENCY_CHARS.replace_all(raw.trim(), "");
    cleaned
        .parse::<f64>()
        .map_err(|_| FormatError::BadAmount(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_currency_formatting() {
        assert_eq!(parse_amount("$1,234.50").unwrap(), 1234.50);
        assert_eq!(parse_amount("$40").unwrap(), 40.0);
    }

    #[test]
    fn plain_numbers_pass_through() {
        assert_eq!(parse_amount("500").unwrap(), 500.0);
        assert_eq!(parse_amount(" 99.99 ").unwrap(), 99.99);
    }

    #[test]
    fn negative_amounts_parse() {
        assert_eq!(parse_amount("-$20.00").unwrap(), -20.0);
    }

    #[test]
    fn garbage_is_a_format_error() {
        for raw in ["", "   ", "N/A", "$1.2.3", "12 USD"] {
            let err = parse_amount(raw).unwrap_err();
            assert!(
                matches!(err, FormatError::BadAmount(ref v) if v == raw),
                "{raw:?}"
            );
        }
    }
}
