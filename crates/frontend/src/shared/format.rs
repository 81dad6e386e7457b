//! Display formatting for prices and dates

use chrono::NaiveDate;

/// Formats a rupiah amount with dot thousand separators, no decimals
///
/// # Examples
///
/// ```
/// use saleema_frontend::shared::format::format_price;
/// assert_eq!(format_price(1250000.0), "Rp 1.250.000");
/// ```
pub fn format_price(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());

    // group digits in threes from the right
    let mut grouped = String::new();
    for (i, c) in rounded.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let digits: String = grouped.chars().rev().collect();

    if value < 0.0 && digits != "0" {
        format!("-Rp {}", digits)
    } else {
        format!("Rp {}", digits)
    }
}

/// Example: 2026-12-20 -> "20 Dec 2026"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "Rp 0");
        assert_eq!(format_price(950.0), "Rp 950");
        assert_eq!(format_price(1250000.0), "Rp 1.250.000");
        assert_eq!(format_price(15600000.4), "Rp 15.600.000");
        assert_eq!(format_price(-2500.0), "-Rp 2.500");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 20).unwrap();
        assert_eq!(format_date(date), "20 Dec 2026");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.76), "4.8");
        assert_eq!(format_rating(4.0), "4.0");
    }
}
