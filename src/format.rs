pub fn format_with_commas(value: u64) -> String {
    let s = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// `$2,150` style amount. Whole dollars only, banknotes have no cents.
pub fn format_currency(amount: u64, symbol: &str) -> String {
    format!("{}{}", symbol, format_with_commas(amount))
}

/// Grouped decimal with at most `max_fraction` digits and no trailing zeros,
/// matching how the browser's locale formatter prints chart values.
pub fn format_decimal(value: f64, max_fraction: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let grouped = whole
        .parse::<u64>()
        .map(format_with_commas)
        .unwrap_or_else(|_| whole.to_string());

    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}

/// Fixed decimals without grouping, like `toFixed`.
pub fn format_fixed(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1000), "1,000");
        assert_eq!(format_with_commas(5854771), "5,854,771");
    }

    #[test]
    fn currency_has_symbol_and_no_cents() {
        assert_eq!(format_currency(2150, "$"), "$2,150");
        assert_eq!(format_currency(0, "$"), "$0");
    }

    #[test]
    fn decimal_trims_trailing_zeros() {
        assert_eq!(format_decimal(100.0, 3), "100");
        assert_eq!(format_decimal(49266.5, 3), "49,266.5");
        assert_eq!(format_decimal(2842121.84, 3), "2,842,121.84");
        assert_eq!(format_decimal(66.49, 3), "66.49");
    }

    #[test]
    fn fixed_keeps_zeros_and_skips_grouping() {
        assert_eq!(format_fixed(98.1, 2), "98.10");
        assert_eq!(format_fixed(1101.13, 2), "1101.13");
    }
}
