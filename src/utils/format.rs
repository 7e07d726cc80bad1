/// Group the integer part of a non-negative amount with `,` every three digits.
///
/// Whole numbers are shown without decimals (`21400.0` -> `21,400`); anything
/// with a fractional part keeps two decimals (`1234.5` -> `1,234.50`).
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let value = value.abs();

    let (whole, fraction) = if value.fract() == 0.0 {
        (format!("{:.0}", value), None)
    } else {
        let fixed = format!("{:.2}", value);
        match fixed.split_once('.') {
            Some((w, f)) => (w.to_string(), Some(f.to_string())),
            None => (fixed, None),
        }
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = fraction {
        out.push('.');
        out.push_str(&f);
    }
    out
}

/// Prefix a grouped amount with a currency symbol (`₹8,900`)
pub fn format_currency(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, format_amount(value))
}

/// Hours as shown on the time card: `40 hours`, `1 hour`, `2.5 hours`
pub fn format_hours(hours: f64) -> String {
    let number = if hours.fract() == 0.0 {
        format!("{:.0}", hours)
    } else {
        format!("{:.1}", hours)
    };
    if hours == 1.0 {
        format!("{} hour", number)
    } else {
        format!("{} hours", number)
    }
}

/// Short label for chart bars: `950`, `1.2k`, `12k`
pub fn format_compact(value: f64) -> String {
    if value >= 1000.0 {
        let k_value = value / 1000.0;
        if k_value.fract() == 0.0 || k_value >= 10.0 {
            format!("{:.0}k", k_value)
        } else {
            format!("{:.1}k", k_value)
        }
    } else {
        format!("{:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(21400.0), "21,400");
        assert_eq!(format_amount(100000.0), "100,000");
        assert_eq!(format_amount(1234567.0), "1,234,567");
    }

    #[test]
    fn test_format_amount_fraction() {
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(0.25), "0.25");
        assert_eq!(format_amount(-2500.0), "-2,500");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("₹", 8900.0), "₹8,900");
        assert_eq!(format_currency("$", 12500.0), "$12,500");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(1200.0), "1.2k");
        assert_eq!(format_compact(2000.0), "2k");
        assert_eq!(format_compact(12600.0), "13k");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(40.0), "40 hours");
        assert_eq!(format_hours(1.0), "1 hour");
        assert_eq!(format_hours(2.5), "2.5 hours");
    }
}
