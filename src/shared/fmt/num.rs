//! Thousands separators for already-rounded numeric strings.
//!
//! For `Decimal` rounding rules, use the `decimal` sibling module.

/// Trims trailing fractional zeros and groups the integer part with commas.
///
/// `"1234567.500"` becomes `"1,234,567.5"`, `"-1000.00"` becomes `"-1,000"`.
pub fn group_thousands(formatted: &str) -> String {
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted
    };

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_small_integers() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("12"), "12");
        assert_eq!(group_thousands("999"), "999");
    }

    #[test]
    fn test_group_thousands_separator() {
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1500000"), "1,500,000");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(group_thousands("1.50"), "1.5");
        assert_eq!(group_thousands("1000.00"), "1,000");
        assert_eq!(group_thousands("1234567.500"), "1,234,567.5");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(group_thousands("-1"), "-1");
        assert_eq!(group_thousands("-100"), "-100");
        assert_eq!(group_thousands("-1234.56"), "-1,234.56");
    }
}
