/// Formats whatever the user typed as `(XXX) XXX-XXXX`, progressively.
pub fn format_phone_number(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).take(10).collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// True once the number is complete, matching `^\(\d{3}\) \d{3}-\d{4}$`.
pub fn is_complete(formatted: &str) -> bool {
    formatted.len() == 14 && format_phone_number(formatted) == formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_progressively() {
        assert_eq!(format_phone_number("80"), "80");
        assert_eq!(format_phone_number("801"), "801");
        assert_eq!(format_phone_number("8014"), "(801) 4");
        assert_eq!(format_phone_number("801477"), "(801) 477");
        assert_eq!(format_phone_number("8014770"), "(801) 477-0");
        assert_eq!(format_phone_number("8014770418"), "(801) 477-0418");
    }

    #[test]
    fn strips_non_digits_and_extra_digits() {
        assert_eq!(format_phone_number("+1 (801) 477-0418"), "(180) 147-7041");
        assert_eq!(format_phone_number("(801) 477-04189"), "(801) 477-0418");
        assert_eq!(format_phone_number("abc"), "");
    }

    #[test]
    fn reformatting_is_stable() {
        let once = format_phone_number("8014770418");
        assert_eq!(format_phone_number(&once), once);
        assert!(is_complete(&once));
        assert!(!is_complete("(801) 477"));
    }
}
