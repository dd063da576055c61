//! Named date layouts and field-order codes.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Display order of the day, month, and year fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    /// `DMY` - day first (most of Europe)
    DayMonthYear,
    /// `MDY` - month first (US)
    MonthDayYear,
    /// `YMD` - year first (ISO-like, East Asia)
    YearMonthDay,
}

impl FieldOrder {
    /// The three-letter order code (`"DMY"`, `"MDY"`, or `"YMD"`).
    pub fn code(&self) -> &'static str {
        match self {
            FieldOrder::DayMonthYear => "DMY",
            FieldOrder::MonthDayYear => "MDY",
            FieldOrder::YearMonthDay => "YMD",
        }
    }
}

/// The named date layouts a locale provides.
///
/// Each style renders a date with fixed field order and literal separators
/// taken from the locale's conventions. Styles differ in which fields they
/// include and how much padding they apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateStyle {
    /// `SHORT_PADDED_CENTURY` - zero-padded day and month, four-digit year
    ShortPaddedCentury,
    /// `SHORT` - unpadded day and month, two-digit year
    Short,
    /// `SHORT_NOYEAR` - unpadded day and month only
    ShortNoYear,
    /// `SHORT_NODAY` - unpadded month and two-digit year
    ShortNoDay,
    /// `MEDIUM` - unpadded day and month, four-digit year
    Medium,
    /// `MEDIUM_NOYEAR` - unpadded day and month only
    MediumNoYear,
    /// `MEDIUM_WEEKDAY_NOYEAR` - abbreviated weekday, day, and month
    MediumWeekdayNoYear,
    /// `LONG_NODAY` - full month name and four-digit year
    LongNoDay,
    /// `LONG` - day, full month name, four-digit year
    Long,
    /// `FULL` - full weekday name, day, full month name, four-digit year
    Full,
}

impl DateStyle {
    /// All styles, in table order.
    pub const ALL: [DateStyle; 10] = [
        DateStyle::ShortPaddedCentury,
        DateStyle::Short,
        DateStyle::ShortNoYear,
        DateStyle::ShortNoDay,
        DateStyle::Medium,
        DateStyle::MediumNoYear,
        DateStyle::MediumWeekdayNoYear,
        DateStyle::LongNoDay,
        DateStyle::Long,
        DateStyle::Full,
    ];

    /// The stable string code for this style.
    pub fn code(&self) -> &'static str {
        match self {
            DateStyle::ShortPaddedCentury => "SHORT_PADDED_CENTURY",
            DateStyle::Short => "SHORT",
            DateStyle::ShortNoYear => "SHORT_NOYEAR",
            DateStyle::ShortNoDay => "SHORT_NODAY",
            DateStyle::Medium => "MEDIUM",
            DateStyle::MediumNoYear => "MEDIUM_NOYEAR",
            DateStyle::MediumWeekdayNoYear => "MEDIUM_WEEKDAY_NOYEAR",
            DateStyle::LongNoDay => "LONG_NODAY",
            DateStyle::Long => "LONG",
            DateStyle::Full => "FULL",
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DateStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHORT_PADDED_CENTURY" => Ok(DateStyle::ShortPaddedCentury),
            "SHORT" => Ok(DateStyle::Short),
            "SHORT_NOYEAR" => Ok(DateStyle::ShortNoYear),
            "SHORT_NODAY" => Ok(DateStyle::ShortNoDay),
            "MEDIUM" => Ok(DateStyle::Medium),
            "MEDIUM_NOYEAR" => Ok(DateStyle::MediumNoYear),
            "MEDIUM_WEEKDAY_NOYEAR" => Ok(DateStyle::MediumWeekdayNoYear),
            "LONG_NODAY" => Ok(DateStyle::LongNoDay),
            "LONG" => Ok(DateStyle::Long),
            "FULL" => Ok(DateStyle::Full),
            _ => Err(ParseError::UnknownDateStyle {
                code: s.to_string(),
            }),
        }
    }
}
