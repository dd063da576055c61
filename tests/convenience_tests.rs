use chrono::NaiveDate;
use locfmt::{format_date, format_decimal, format_integer, DateStyle};

#[test]
fn test_format_date_convenience() {
    let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let result = format_date("cs-CZ", DateStyle::Full, &d).unwrap();
    assert_eq!(result, "úterý, 5. března 2024");
}

#[test]
fn test_format_decimal_convenience() {
    let result = format_decimal("cs-CZ", 2, 1234.5).unwrap();
    assert_eq!(result, "1\u{a0}234,50");
}

#[test]
fn test_format_integer_convenience() {
    let result = format_integer("cs", -1234567).unwrap();
    assert_eq!(result, "-1\u{a0}234\u{a0}567");
}

#[test]
fn test_convenience_unknown_locale() {
    let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    assert!(format_date("fr-FR", DateStyle::Full, &d).is_err());
    assert!(format_decimal("fr-FR", 2, 1.0).is_err());
    assert!(format_integer("fr-FR", 1).is_err());
}
