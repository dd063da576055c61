//! Built-in locale data.

use super::{DateFormatSymbols, Locale, NumberFormatSymbols};
use crate::style::FieldOrder;

/// Czech (Czech Republic).
///
/// The grouping separator is a no-break space (U+00A0), per Czech convention.
pub(super) static CS_CZ: Locale = Locale {
    country: "CZ",
    country_name: "Česká republika",
    language: "cs",
    language_name: "čeština",
    tag: "cs-CZ",
    display_name: "čeština (Česká republika)",
    date_symbols: DateFormatSymbols {
        am_pm: ["dop.", "odp."],
        day_names_full: [
            "neděle", "pondělí", "úterý", "středa", "čtvrtek", "pátek", "sobota",
        ],
        day_names_short: ["ne", "po", "út", "st", "čt", "pá", "so"],
        eras: ["př. n. l.", "n. l."],
        era_names: ["př. n. l.", "n. l."],
        month_names_full: [
            "ledna",
            "února",
            "března",
            "dubna",
            "května",
            "června",
            "července",
            "srpna",
            "září",
            "října",
            "listopadu",
            "prosince",
        ],
        month_names_short: [
            "Led", "Úno", "Bře", "Dub", "Kvě", "Čer", "Čvc", "Srp", "Zář", "Říj", "Lis", "Pro",
        ],
        order_full: FieldOrder::DayMonthYear,
        order_long: FieldOrder::DayMonthYear,
        order_medium: FieldOrder::DayMonthYear,
        order_short: FieldOrder::DayMonthYear,
    },
    number_symbols: NumberFormatSymbols {
        decimal_separator: ',',
        grouping_separator: '\u{a0}',
        minus_sign: '-',
    },
};
