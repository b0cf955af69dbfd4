//! Phone number masking
//!
//! Phone fields hold a masked display value of the form `(DDD)-DDD-DDDD`.
//! Every edit goes through [`format_phone`], so partial input shows a
//! partial mask.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum number of digits a phone number can hold
pub const PHONE_DIGITS: usize = 10;

/// Placeholder shown in empty phone inputs
pub const PHONE_PLACEHOLDER: &str = "(###)-###-####";

/// Fully masked phone number
pub static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\d{3}\)-\d{3}-\d{4}$").expect("Invalid regex pattern for phone number")
});

/// First significant digit must not be 0 or 1
static START_DIGIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[2-9]").expect("Invalid regex pattern for start digit"));

/// Digits-only projection of a value
pub fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Format raw input into the `(DDD)-DDD-DDDD` mask.
///
/// Non-digits are dropped and input beyond ten digits is truncated.
/// Separators appear as soon as the group before them is complete, so
/// `"234"` becomes `"(234)-"` and `"234567"` becomes `"(234)-567-"`.
pub fn format_phone(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();

    let mut out = String::with_capacity(PHONE_PLACEHOLDER.len());
    if !digits.is_empty() {
        out.push('(');
        out.extend(&digits[..digits.len().min(3)]);
    }
    if digits.len() >= 3 {
        out.push_str(")-");
        out.extend(&digits[3..digits.len().min(6)]);
    }
    if digits.len() >= 6 {
        out.push('-');
        out.extend(&digits[6..]);
    }
    out
}

/// Remove the last digit from a masked value and re-apply the mask
pub fn pop_digit(value: &str) -> String {
    let mut digits = digits(value);
    digits.pop();
    format_phone(&digits)
}

/// Whether the value matches the full mask
pub fn is_complete(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Whether the first digit of the value is in `[2-9]`
pub fn has_valid_start_digit(value: &str) -> bool {
    START_DIGIT_PATTERN.is_match(&digits(value))
}
