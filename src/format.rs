//! Fixed-style en-US display formatting for currency and dates.

use chrono::{Datelike, NaiveDate};

use crate::store::month::short_month;

/// Renders an amount as US dollars with comma grouping and two decimals,
/// e.g. `"$1,200.00"`; negatives render as `"-$50.00"`.
pub fn format_currency(amount: f64) -> String {
    let body = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some(parts) => parts,
        None => (body.as_str(), "00"),
    };
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${}.{frac_part}", group_digits(int_part))
}

/// Renders a date in the dashboard's list style, e.g. `"Apr 15, 2025"`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        short_month(date.month()),
        date.day(),
        date.year()
    )
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_keeps_two_decimals() {
        assert_eq!(format_currency(1200.0), "$1,200.00");
        assert_eq!(format_currency(85.5), "$85.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn negatives_carry_a_leading_sign() {
        assert_eq!(format_currency(-50.0), "-$50.00");
        assert_eq!(format_currency(-1200.5), "-$1,200.50");
    }

    #[test]
    fn dates_render_in_medium_style() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
        assert_eq!(format_date(date), "Apr 15, 2025");

        let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_date(new_year), "Jan 1, 2024");
    }
}
