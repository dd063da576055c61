//! Date layout rendering.

use crate::locale::DateFormatSymbols;
use crate::style::DateStyle;
use chrono::Datelike;

/// A date formatter for one named layout.
///
/// Borrows the locale's symbol tables; construct via
/// [`Locale::date_format`](crate::Locale::date_format).
#[derive(Debug, Clone, Copy)]
pub struct DateFormat<'a> {
    style: DateStyle,
    symbols: &'a DateFormatSymbols,
}

impl<'a> DateFormat<'a> {
    pub(crate) fn new(style: DateStyle, symbols: &'a DateFormatSymbols) -> Self {
        DateFormat { style, symbols }
    }

    /// The layout this formatter renders.
    pub fn style(&self) -> DateStyle {
        self.style
    }

    /// Render `date` in this layout.
    ///
    /// Accepts anything date-like (`NaiveDate`, `NaiveDateTime`,
    /// `DateTime<Tz>`); only the Gregorian day, month, year, and weekday
    /// fields are read.
    pub fn format<D: Datelike>(&self, date: &D) -> String {
        let sym = self.symbols;
        let day = date.day();
        let month = date.month();
        let year = date.year();
        // 0 = Sunday, matching the day name table index.
        let weekday = date.weekday().num_days_from_sunday() as usize;
        let month_name = sym.month_names_full[month as usize - 1];

        match self.style {
            DateStyle::ShortPaddedCentury => format!("{day:02}.{month:02}.{year}"),
            DateStyle::Short => format!("{}.{}.{:02}", day, month, two_digit_year(year)),
            DateStyle::ShortNoYear | DateStyle::MediumNoYear => format!("{day}.{month}"),
            DateStyle::ShortNoDay => format!("{}.{:02}", month, two_digit_year(year)),
            DateStyle::Medium => format!("{day}.{month}.{year}"),
            DateStyle::MediumWeekdayNoYear => {
                format!("{} {}.{}", sym.day_names_short[weekday], day, month)
            }
            DateStyle::LongNoDay => format!("{month_name} {year}"),
            DateStyle::Long => format!("{day}. {month_name} {year}"),
            DateStyle::Full => {
                format!(
                    "{}, {}. {} {}",
                    sym.day_names_full[weekday], day, month_name, year
                )
            }
        }
    }
}

/// Last two digits of the year, zero-padded. Total over chrono's year range.
fn two_digit_year(year: i32) -> i32 {
    year.rem_euclid(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digit_year() {
        assert_eq!(two_digit_year(2024), 24);
        assert_eq!(two_digit_year(2005), 5);
        assert_eq!(two_digit_year(2000), 0);
        assert_eq!(two_digit_year(1999), 99);
        assert_eq!(two_digit_year(-1), 99);
    }
}
