//! Number formatting with thousands grouping.

use crate::locale::NumberFormatSymbols;

/// A fixed-point decimal formatter.
///
/// Renders exactly the configured number of fraction digits, with the
/// locale's separators and thousands grouping on the integer part.
#[derive(Debug, Clone, Copy)]
pub struct DecimalFormat<'a> {
    places: usize,
    symbols: &'a NumberFormatSymbols,
}

impl<'a> DecimalFormat<'a> {
    pub(crate) fn new(places: usize, symbols: &'a NumberFormatSymbols) -> Self {
        DecimalFormat { places, symbols }
    }

    /// Number of fraction digits this formatter emits.
    pub fn places(&self) -> usize {
        self.places
    }

    /// Render `value` with grouping and exactly `places` fraction digits.
    ///
    /// With zero places the decimal separator is omitted entirely. The sign
    /// follows the input value, so inputs that round to zero keep their
    /// minus sign. Non-finite values render as `NaN` / `Infinity` /
    /// `-Infinity`.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value.is_sign_positive() {
                "Infinity"
            } else {
                "-Infinity"
            }
            .to_string();
        }

        let fixed = format!("{:.*}", self.places, value.abs());
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut result = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
        if value < 0.0 {
            result.push(self.symbols.minus_sign);
        }
        group_digits_into(&mut result, integer, self.symbols.grouping_separator);
        if let Some(fraction) = fraction {
            result.push(self.symbols.decimal_separator);
            result.push_str(fraction);
        }
        result
    }
}

/// An integer formatter with thousands grouping.
#[derive(Debug, Clone, Copy)]
pub struct IntegerFormat<'a> {
    symbols: &'a NumberFormatSymbols,
}

impl<'a> IntegerFormat<'a> {
    pub(crate) fn new(symbols: &'a NumberFormatSymbols) -> Self {
        IntegerFormat { symbols }
    }

    /// Render `value` with the locale's thousands grouping.
    pub fn format(&self, value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if value < 0 {
            result.push(self.symbols.minus_sign);
        }
        group_digits_into(&mut result, &digits, self.symbols.grouping_separator);
        result
    }
}

/// Append `digits` to `out`, inserting `separator` every three digits from
/// the right. Single left-to-right pass; `digits` must be ASCII digits only.
fn group_digits_into(out: &mut String, digits: &str, separator: char) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
}
