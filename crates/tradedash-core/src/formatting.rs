//! Display formatting for metric values.

use rust_decimal::Decimal;

/// Formats a money amount with two decimal places and thousands separators.
///
/// `563837.5` renders as `"563,837.50"`. The currency symbol is a
/// presentation concern and is left to the caller.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let s = format!("{:.2}", amount);
    add_thousands_separator(&s)
}

/// Formats a quantity, dropping insignificant trailing zeros.
#[must_use]
pub fn format_quantity(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}

/// Add thousands separators to a number string.
fn add_thousands_separator(s: &str) -> String {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let parts: Vec<&str> = unsigned.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1).unwrap_or(&"");

    let chars: Vec<char> = integer_part.chars().rev().collect();
    let formatted: String = chars
        .chunks(3)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(",")
        .chars()
        .rev()
        .collect();

    if decimal_part.is_empty() {
        format!("{}{}", sign, formatted)
    } else {
        format!("{}{}.{}", sign, formatted, decimal_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(2500.50)), "2,500.50");
        assert_eq!(format_currency(dec!(250050)), "250,050.00");
        assert_eq!(format_currency(dec!(563837.5)), "563,837.50");
        assert_eq!(format_currency(dec!(999)), "999.00");
        assert_eq!(format_currency(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_currency(dec!(0)), "0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-1234.5)), "-1,234.50");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(dec!(225)), "225");
        assert_eq!(format_quantity(dec!(100.00)), "100");
        assert_eq!(format_quantity(dec!(12.5)), "12.5");
    }
}
