use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digits with at most one '.', at least one digit overall
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").expect("valid amount pattern"));

/// Shape check for the `amount` query parameter.
///
/// Only unsigned decimals are accepted; signs, exponents, whitespace and
/// repeated separators are rejected without attempting a numeric parse.
pub fn is_valid_amount(amount: &str) -> bool {
    AMOUNT_PATTERN.is_match(amount)
}
