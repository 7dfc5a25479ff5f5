//! Утилиты форматирования чисел (en-US: запятая как разделитель тысяч)

use contracts::dashboards::d400_overview::ValueFormat;

/// Shown where a value cannot be computed
pub const NO_VALUE: &str = "—";

/// Форматирует число с разделителем тысяч и указанным количеством знаков после точки
///
/// # Примеры
///
/// ```text
/// format_number_with_decimals(1234.567, 2) == "1,234.57"
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals as usize, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let negative = integer_part.starts_with('-');
    let digits = integer_part.trim_start_matches('-');

    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if negative && digits.chars().any(|c| c != '0') {
        result.push('-');
    }
    let formatted_integer: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

/// Сумма с символом валюты: `$1,234.50`, `-$80.00`; неизвестная валюта идёт кодом
pub fn format_currency(value: f64, currency: &str, decimals: u8) -> String {
    let number = format_number_with_decimals(value.abs(), decimals);
    let sign = if value < 0.0 && number.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{number}"),
        None => format!("{sign}{number} {currency}"),
    }
}

/// Whole dollars, as budgets and stock values are shown: `$45,000`
pub fn format_usd(value: f64) -> String {
    format_currency(value, "USD", 0)
}

pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{:.*}%", decimals as usize, value)
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Значение KPI по его формату; `None` → прочерк
pub fn format_value(value: Option<f64>, format: &ValueFormat) -> String {
    let Some(value) = value else {
        return NO_VALUE.to_string();
    };
    match format {
        ValueFormat::Money { currency } => format_currency(value, currency, 0),
        ValueFormat::Percent { decimals } => format_percent(value, *decimals),
        ValueFormat::Integer => format_number_int(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_separator() {
        assert_eq!(format_number_with_decimals(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(1000.0, 0), "1,000");
        assert_eq!(format_number_with_decimals(-1234.5, 1), "-1,234.5");
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
        assert_eq!(format_number_with_decimals(-0.001, 0), "0");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(45000.0, "USD", 0), "$45,000");
        assert_eq!(format_currency(45000.0, "USD", 2), "$45,000.00");
        assert_eq!(format_currency(-1250.5, "USD", 2), "-$1,250.50");
        assert_eq!(format_currency(320.0, "EUR", 2), "€320.00");
        assert_eq!(format_currency(1500.0, "MXN", 2), "1,500.00 MXN");
        assert_eq!(format_usd(1250000.0), "$1,250,000");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(54.878, 1), "54.9%");
        assert_eq!(format_percent(100.0, 0), "100%");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Some(379500.0), &ValueFormat::usd()), "$379,500");
        assert_eq!(format_value(Some(3.0), &ValueFormat::Integer), "3");
        assert_eq!(
            format_value(Some(54.88), &ValueFormat::Percent { decimals: 1 }),
            "54.9%"
        );
        assert_eq!(format_value(None, &ValueFormat::Integer), NO_VALUE);
    }
}
