/// Reformats free text into the local `XXX XX XXX` layout, keeping at most
/// `max_digits` digits. Feeding the output back in returns it unchanged.
pub fn format_phone(input: &str, max_digits: usize) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_digits)
        .collect();

    match digits.len() {
        n if n >= 6 => format!("{} {} {}", &digits[..3], &digits[3..5], &digits[5..]),
        n if n >= 3 => format!("{} {}", &digits[..3], &digits[3..]),
        _ => digits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_by_length() {
        assert_eq!(format_phone("12", 8), "12");
        assert_eq!(format_phone("123", 8), "123 ");
        assert_eq!(format_phone("1234", 8), "123 4");
        assert_eq!(format_phone("12345", 8), "123 45");
        assert_eq!(format_phone("123456", 8), "123 45 6");
        assert_eq!(format_phone("12345678", 8), "123 45 678");
    }

    #[test]
    fn strips_noise_and_truncates() {
        assert_eq!(format_phone("+47 (123) 45-678", 8), "471 23 456");
        assert_eq!(format_phone("1234567890", 8), "123 45 678");
        assert_eq!(format_phone("abc", 8), "");
    }

    #[test]
    fn formatting_is_idempotent() {
        let inputs = [
            "", "1", "12", "123", "1234", "12345", "123456", "1234567", "12345678",
            "123456789", "tlf: 987 65 432", "98-76-54-32", " 4 7 ", "½12٣45",
        ];
        for input in inputs {
            let once = format_phone(input, 8);
            assert_eq!(format_phone(&once, 8), once, "input {:?}", input);
        }
    }

    #[test]
    fn typing_digit_by_digit_matches_pasting() {
        let mut live = String::new();
        for digit in "98765432".chars() {
            live.push(digit);
            live = format_phone(&live, 8);
        }
        assert_eq!(live, format_phone("98765432", 8));
    }
}
