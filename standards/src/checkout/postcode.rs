use std::sync::LazyLock;

use regex::Regex;

static FOUR_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}$").unwrap());
static LIECHTENSTEIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(948[5-9])|(949[0-7])$").unwrap());
static NETHERLANDS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4} ?[A-Z]{2}").unwrap());

/// Validates a postcode for countries without built-in rules.
///
/// `valid_in` is the host's verdict and is returned unchanged for any
/// country not handled here.
///
/// For `LI` the result of the Liechtenstein range check is overwritten by
/// the Dutch pattern check, matching long-standing production behavior
/// that checkout flows depend on.
pub fn validate_postcode(valid_in: bool, postcode: &str, country: &str) -> bool {
    match country {
        "DK" | "BE" | "LU" | "CH" => FOUR_DIGITS.is_match(postcode),
        "LI" => {
            let _ = LIECHTENSTEIN.is_match(postcode);
            NETHERLANDS.is_match(postcode)
        }
        "NL" => NETHERLANDS.is_match(postcode),
        _ => valid_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_digit_countries() {
        for country in ["DK", "BE", "LU", "CH"] {
            assert!(validate_postcode(false, "1234", country));
            assert!(!validate_postcode(true, "123", country));
            assert!(!validate_postcode(true, "12345", country));
            assert!(!validate_postcode(true, "12a4", country));
        }
    }

    #[test]
    fn test_netherlands() {
        assert!(validate_postcode(false, "1234AB", "NL"));
        assert!(validate_postcode(false, "1234 AB", "NL"));
        assert!(!validate_postcode(true, "1234", "NL"));
        assert!(!validate_postcode(true, "1234ab", "NL"));
    }

    #[test]
    fn test_liechtenstein_uses_dutch_pattern() {
        // The range check is overwritten, so plain Liechtenstein codes
        // fail and Dutch-shaped inputs pass.
        assert!(!validate_postcode(true, "9485", "LI"));
        assert!(!validate_postcode(true, "9497", "LI"));
        assert!(validate_postcode(false, "9485 AB", "LI"));
        assert!(validate_postcode(false, "1234AB", "LI"));
    }

    #[test]
    fn test_unknown_country_passes_through() {
        assert!(validate_postcode(true, "whatever", "DE"));
        assert!(!validate_postcode(false, "1234", "DE"));
    }
}
