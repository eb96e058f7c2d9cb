//! Canonical text representation of currency and percentages

/// Locale conventions for rendering whole-unit currency amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyStyle {
    pub symbol: &'static str,
    pub group_separator: char,
    /// `92.601 $` instead of `$92,601`
    pub symbol_after: bool,
}

impl CurrencyStyle {
    pub fn en_us() -> Self {
        Self {
            symbol: "$",
            group_separator: ',',
            symbol_after: false,
        }
    }

    pub fn de_de() -> Self {
        Self {
            symbol: "$",
            group_separator: '.',
            symbol_after: true,
        }
    }
}

impl Default for CurrencyStyle {
    fn default() -> Self {
        Self::en_us()
    }
}

/// Format a currency amount in en-US style, rounded to whole units
pub fn format_currency(amount: f64) -> String {
    format_currency_with(amount, &CurrencyStyle::en_us())
}

/// Format a currency amount rounded to whole units (half away from zero)
pub fn format_currency_with(amount: f64, style: &CurrencyStyle) -> String {
    let rounded = amount.round();
    // -0.4 rounds to -0 and must not print a sign
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_digits(&digits, style.group_separator);
    let sign = if negative { "-" } else { "" };

    if style.symbol_after {
        format!("{}{} {}", sign, grouped, style.symbol)
    } else {
        format!("{}{}{}", sign, style.symbol, grouped)
    }
}

/// Format a fraction as a percentage with fixed decimals (`0.0525` -> `5.25%`)
pub fn format_percentage(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(100_133.64), "$100,134");
        assert_eq!(format_currency(999.49), "$999");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(1_234_567.5), "$1,234,568");
        assert_eq!(format_currency(-1_234.2), "-$1,234");
        assert_eq!(format_currency(-0.4), "$0");
    }

    #[test]
    fn test_format_currency_de() {
        assert_eq!(format_currency_with(92_601.0, &CurrencyStyle::de_de()), "92.601 $");
        assert_eq!(format_currency_with(35_000.0, &CurrencyStyle::de_de()), "35.000 $");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0525, 2), "5.25%");
        assert_eq!(format_percentage(0.10, 0), "10%");
        assert_eq!(format_percentage(0.22, 1), "22.0%");
    }
}
