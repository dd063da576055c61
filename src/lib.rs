//! locfmt - locale-aware date and number formatting
//!
//! This crate bundles per-locale calendar and number symbol tables with a
//! fixed set of named date layouts and grouping-aware number formatters.
//! Locale data is resolved explicitly ([`Locale::for_tag`]) and threaded
//! into formatters by reference; there is no global state.
//!
//! ```
//! use chrono::NaiveDate;
//! use locfmt::{DateStyle, Locale};
//!
//! let locale = Locale::for_tag("cs-CZ").unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
//! assert_eq!(locale.date_format(DateStyle::Medium).format(&date), "5.3.2024");
//! assert_eq!(locale.integer_format().format(1234567), "1\u{a0}234\u{a0}567");
//! ```

pub mod error;
pub mod style;

mod formatter;
mod locale;

pub use error::{LocaleError, ParseError};
pub use formatter::{DateFormat, DecimalFormat, IntegerFormat};
pub use locale::{DateFormatSymbols, Locale, NumberFormatSymbols};
pub use style::{DateStyle, FieldOrder};

use chrono::Datelike;

/// One-shot date formatting: resolve `tag`, render `date` in `style`.
pub fn format_date<D: Datelike>(
    tag: &str,
    style: DateStyle,
    date: &D,
) -> Result<String, LocaleError> {
    Ok(Locale::for_tag(tag)?.date_format(style).format(date))
}

/// One-shot decimal formatting with `places` fraction digits.
pub fn format_decimal(tag: &str, places: usize, value: f64) -> Result<String, LocaleError> {
    Ok(Locale::for_tag(tag)?.decimal_format(places).format(value))
}

/// One-shot integer formatting with thousands grouping.
pub fn format_integer(tag: &str, value: i64) -> Result<String, LocaleError> {
    Ok(Locale::for_tag(tag)?.integer_format().format(value))
}
