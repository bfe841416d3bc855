//! Fixed-width field encoders for CNAB 240 records.
//!
//! CNAB fields come in three flavors: alphanumeric (left-justified,
//! space-padded, restricted to letters/digits/spaces), numeric
//! (right-justified, zero-padded) and Pix keys (verbatim text). Encoders
//! never fail; malformed input degrades to a valid value so the record
//! shape stays stable regardless of what the caller supplies.

/// Encodes an alphanumeric field.
///
/// Characters outside ASCII letters, digits and spaces are stripped and
/// the remainder uppercased, then left-justified in `width` characters.
/// An empty value renders as all spaces.
///
/// # Examples
///
/// ```
/// use cnab240_pix::field::alpha;
///
/// assert_eq!(alpha("Banco Inter", 15), "BANCO INTER    ");
/// assert_eq!(alpha("a/b-c", 5), "ABC  ");
/// ```
pub fn alpha(value: &str, width: usize) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .map(|c| c.to_ascii_uppercase())
        .collect();
    pad_right(&cleaned, width)
}

/// Encodes a numeric field.
///
/// Non-digit characters are stripped and the remaining digits left-padded
/// with zeros. A value wider than the field keeps only the rightmost
/// `width` digits; the most-significant digits are silently dropped, which
/// is the legacy bank behavior for oversized values. An empty value renders
/// as all zeros.
pub fn num(value: &str, width: usize) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= width {
        digits[digits.len() - width..].to_string()
    } else {
        format!("{}{}", "0".repeat(width - digits.len()), digits)
    }
}

/// Encodes a Pix key field.
///
/// Keys are emitted verbatim (no stripping, no case change) since email
/// addresses and random keys are case- and symbol-sensitive. Padded with
/// spaces on the right, truncated to `width` characters.
pub fn pix_key(value: &str, width: usize) -> String {
    pad_right(value, width)
}

fn pad_right(value: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    out.extend(value.chars().take(width));
    let used = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_uppercases_and_pads() {
        assert_eq!(alpha("abc", 5), "ABC  ");
        assert_eq!(alpha("Rua do Sol", 12), "RUA DO SOL  ");
    }

    #[test]
    fn test_alpha_strips_special_characters() {
        assert_eq!(alpha("a@b.com", 10), "ABCOM     ");
        assert_eq!(alpha("PAG-1", 6), "PAG1  ");
    }

    #[test]
    fn test_alpha_strips_non_ascii() {
        assert_eq!(alpha("José", 5), "JOS  ");
    }

    #[test]
    fn test_alpha_truncates_from_the_right() {
        assert_eq!(alpha("ABCDEFGH", 4), "ABCD");
    }

    #[test]
    fn test_alpha_empty_is_all_spaces() {
        assert_eq!(alpha("", 4), "    ");
    }

    #[test]
    fn test_num_zero_pads() {
        assert_eq!(num("42", 6), "000042");
        assert_eq!(num("0", 3), "000");
    }

    #[test]
    fn test_num_strips_non_digits() {
        assert_eq!(num("53.914.002/0001-52", 14), "53914002000152");
        assert_eq!(num("81910-350", 8), "81910350");
    }

    #[test]
    fn test_num_keeps_rightmost_digits_when_too_long() {
        // Legacy truncation: most-significant digits are dropped.
        assert_eq!(num("123456", 3), "456");
    }

    #[test]
    fn test_num_empty_is_all_zeros() {
        assert_eq!(num("", 5), "00000");
        assert_eq!(num("abc", 5), "00000");
    }

    #[test]
    fn test_pix_key_preserves_case_and_symbols() {
        assert_eq!(pix_key("User@Mail.com", 16), "User@Mail.com   ");
    }

    #[test]
    fn test_pix_key_truncates() {
        assert_eq!(pix_key("abcdef", 4), "abcd");
    }

    #[test]
    fn test_pix_key_empty_is_all_spaces() {
        assert_eq!(pix_key("", 3), "   ");
    }

    #[test]
    fn test_output_width_is_exact() {
        for width in [1, 5, 99, 240] {
            assert_eq!(alpha("some value", width).chars().count(), width);
            assert_eq!(num("123", width).chars().count(), width);
            assert_eq!(pix_key("key", width).chars().count(), width);
        }
    }
}
