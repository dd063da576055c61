//! Locale data: identity strings, symbol tables, and lookup.

mod builtin;

use crate::error::{LocaleError, ParseError};
use crate::formatter::{DateFormat, DecimalFormat, IntegerFormat};
use crate::style::{DateStyle, FieldOrder};

/// Calendar symbol tables for one locale.
///
/// All name arrays are 0-indexed; day arrays start at Sunday, month arrays
/// at January. The full month names are the forms used inside running dates
/// (genitive in Czech), not standalone labels.
#[derive(Debug, Clone)]
pub struct DateFormatSymbols {
    pub am_pm: [&'static str; 2],
    pub day_names_full: [&'static str; 7],
    pub day_names_short: [&'static str; 7],
    /// Short era labels (BCE/CE equivalents).
    pub eras: [&'static str; 2],
    /// Long era labels.
    pub era_names: [&'static str; 2],
    pub month_names_full: [&'static str; 12],
    pub month_names_short: [&'static str; 12],
    pub order_full: FieldOrder,
    pub order_long: FieldOrder,
    pub order_medium: FieldOrder,
    pub order_short: FieldOrder,
}

/// Number symbol tables for one locale.
#[derive(Debug, Clone)]
pub struct NumberFormatSymbols {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub minus_sign: char,
}

/// A locale's identity and formatting data.
///
/// Locales are `'static` constants; formatters borrow their tables rather
/// than consulting any global state, so a `&Locale` can be threaded through
/// concurrent code freely.
#[derive(Debug)]
pub struct Locale {
    pub(crate) country: &'static str,
    pub(crate) country_name: &'static str,
    pub(crate) language: &'static str,
    pub(crate) language_name: &'static str,
    pub(crate) tag: &'static str,
    pub(crate) display_name: &'static str,
    pub(crate) date_symbols: DateFormatSymbols,
    pub(crate) number_symbols: NumberFormatSymbols,
}

/// Every built-in locale, in tag order.
static BUILTIN: [&Locale; 1] = [&builtin::CS_CZ];

impl Locale {
    /// The built-in Czech (Czech Republic) locale.
    pub fn cs_cz() -> &'static Locale {
        &builtin::CS_CZ
    }

    /// Looks up a built-in locale by tag.
    ///
    /// Matching is case-insensitive and accepts `-` or `_` as the subtag
    /// separator, so `"cs-CZ"`, `"cs_CZ"`, and `"CS-cz"` all resolve to the
    /// same locale. A bare language code (`"cs"`) resolves to the locale for
    /// that language.
    pub fn for_tag(tag: &str) -> Result<&'static Locale, LocaleError> {
        let normalized = tag.replace('_', "-");
        BUILTIN
            .iter()
            .copied()
            .find(|locale| {
                locale.tag.eq_ignore_ascii_case(&normalized)
                    || locale.language.eq_ignore_ascii_case(&normalized)
            })
            .ok_or_else(|| LocaleError::UnknownTag {
                tag: tag.to_string(),
            })
    }

    /// Two-letter country code, e.g. `"CZ"`.
    pub fn country(&self) -> &'static str {
        self.country
    }

    /// Country display name in the locale's own language.
    pub fn country_name(&self) -> &'static str {
        self.country_name
    }

    /// Two-letter language code, e.g. `"cs"`.
    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Language display name in the locale's own language.
    pub fn language_name(&self) -> &'static str {
        self.language_name
    }

    /// The locale tag, e.g. `"cs-CZ"`.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Combined display name, e.g. `"čeština (Česká republika)"`.
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// The calendar symbol tables.
    pub fn date_symbols(&self) -> &DateFormatSymbols {
        &self.date_symbols
    }

    /// The number symbol tables.
    pub fn number_symbols(&self) -> &NumberFormatSymbols {
        &self.number_symbols
    }

    /// A date formatter for the given style.
    pub fn date_format(&self, style: DateStyle) -> DateFormat<'_> {
        DateFormat::new(style, &self.date_symbols)
    }

    /// A date formatter looked up by its string code (e.g. `"MEDIUM"`).
    pub fn date_format_by_code(&self, code: &str) -> Result<DateFormat<'_>, ParseError> {
        Ok(self.date_format(code.parse()?))
    }

    /// The full table of date formatters, one per style.
    pub fn date_formats(&self) -> [DateFormat<'_>; 10] {
        DateStyle::ALL.map(|style| self.date_format(style))
    }

    /// A fixed-point formatter emitting exactly `places` fraction digits.
    pub fn decimal_format(&self, places: usize) -> DecimalFormat<'_> {
        DecimalFormat::new(places, &self.number_symbols)
    }

    /// An integer formatter with thousands grouping.
    pub fn integer_format(&self) -> IntegerFormat<'_> {
        IntegerFormat::new(&self.number_symbols)
    }
}
