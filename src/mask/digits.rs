//! Digit extraction.

/// Keep only the ASCII digits (`0`-`9`) of `input`, in their original order.
///
/// Letters, punctuation, whitespace and non-ASCII digits (e.g. fullwidth
/// `１`) are dropped.
#[must_use]
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Count the ASCII digits in `input` without allocating.
#[must_use]
pub fn digit_count(input: &str) -> usize {
    input.bytes().filter(u8::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only_strips_punctuation() {
        assert_eq!(digits_only("123.456.789-01"), "12345678901");
        assert_eq!(digits_only("(11) 98765-4321"), "11987654321");
        assert_eq!(digits_only("R$ 1.234"), "1234");
    }

    #[test]
    fn test_digits_only_empty_and_no_digits() {
        assert_eq!(digits_only(""), "");
        assert_eq!(digits_only("abc-def"), "");
    }

    #[test]
    fn test_digits_only_ignores_non_ascii_digits() {
        // Fullwidth and Arabic-Indic digits are not ASCII digits
        assert_eq!(digits_only("１２3٤5"), "35");
        assert_eq!(digits_only("é1ñ2😀3"), "123");
    }

    #[test]
    fn test_digit_count_matches_extraction() {
        for s in ["", "abc", "12a3", "１２3", "(11) 9"] {
            assert_eq!(digit_count(s), digits_only(s).len(), "input {s:?}");
        }
    }
}
