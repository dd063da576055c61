//! Verifies the built-in cs-CZ tables against the CLDR-derived reference
//! data in `fixtures/cs_cz.json`, field for field.

use locfmt::Locale;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ReferenceLocale {
    country: String,
    country_name: String,
    language: String,
    language_name: String,
    locale: String,
    locale_name: String,
    dfs: ReferenceDateSymbols,
    nfs: ReferenceNumberSymbols,
}

#[derive(Debug, Deserialize)]
struct ReferenceDateSymbols {
    am_pm: Vec<String>,
    day_name: Vec<String>,
    day_short: Vec<String>,
    era: Vec<String>,
    era_name: Vec<String>,
    month_name: Vec<String>,
    month_short: Vec<String>,
    order_full: String,
    order_long: String,
    order_medium: String,
    order_short: String,
}

#[derive(Debug, Deserialize)]
struct ReferenceNumberSymbols {
    decimal_separator: String,
    grouping_separator: String,
    minus: String,
}

fn load_reference() -> ReferenceLocale {
    serde_json::from_str(include_str!("fixtures/cs_cz.json")).unwrap()
}

#[test]
fn test_identity_matches_reference() {
    let reference = load_reference();
    let locale = Locale::cs_cz();

    assert_eq!(locale.country(), reference.country);
    assert_eq!(locale.country_name(), reference.country_name);
    assert_eq!(locale.language(), reference.language);
    assert_eq!(locale.language_name(), reference.language_name);
    assert_eq!(locale.tag(), reference.locale);
    assert_eq!(locale.display_name(), reference.locale_name);
}

#[test]
fn test_date_symbols_match_reference() {
    let reference = load_reference();
    let symbols = Locale::cs_cz().date_symbols();

    assert_eq!(symbols.am_pm.to_vec(), reference.dfs.am_pm);
    assert_eq!(symbols.day_names_full.to_vec(), reference.dfs.day_name);
    assert_eq!(symbols.day_names_short.to_vec(), reference.dfs.day_short);
    assert_eq!(symbols.eras.to_vec(), reference.dfs.era);
    assert_eq!(symbols.era_names.to_vec(), reference.dfs.era_name);
    assert_eq!(symbols.month_names_full.to_vec(), reference.dfs.month_name);
    assert_eq!(symbols.month_names_short.to_vec(), reference.dfs.month_short);

    assert_eq!(symbols.order_full.code(), reference.dfs.order_full);
    assert_eq!(symbols.order_long.code(), reference.dfs.order_long);
    assert_eq!(symbols.order_medium.code(), reference.dfs.order_medium);
    assert_eq!(symbols.order_short.code(), reference.dfs.order_short);
}

#[test]
fn test_number_symbols_match_reference() {
    let reference = load_reference();
    let symbols = Locale::cs_cz().number_symbols();

    assert_eq!(
        symbols.decimal_separator.to_string(),
        reference.nfs.decimal_separator
    );
    assert_eq!(
        symbols.grouping_separator.to_string(),
        reference.nfs.grouping_separator
    );
    assert_eq!(symbols.minus_sign.to_string(), reference.nfs.minus);
}
