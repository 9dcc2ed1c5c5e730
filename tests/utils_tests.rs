use chrono::{NaiveDate, NaiveTime};
use petlog::utils::date::{now_in, parse_date, parse_timezone};
use petlog::utils::time::{parse_optional_time, parse_time};

#[test]
fn test_parse_date_formats() {
    let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    assert_eq!(parse_date("2024-03-05"), Some(expected));
    assert_eq!(parse_date("05/03/2024"), Some(expected));
    assert_eq!(parse_date(" 2024-03-05 "), Some(expected));
    assert_eq!(parse_date("2024-02-30"), None);
    assert_eq!(parse_date("yesterday"), None);
}

#[test]
fn test_parse_time_minute_precision() {
    let expected = NaiveTime::from_hms_opt(7, 30, 0).unwrap();
    assert_eq!(parse_time("07:30"), Some(expected));
    assert_eq!(parse_time("07:30:59"), Some(expected));
    assert_eq!(parse_time("25:00"), None);

    assert_eq!(parse_optional_time(None).unwrap(), None);
    assert!(parse_optional_time(Some(&"7h30".to_string())).is_err());
}

#[test]
fn test_now_in_timezone_has_no_seconds() {
    let tz = parse_timezone("America/Recife").unwrap();
    let (_, time) = now_in(tz);
    assert_eq!(time.format("%S").to_string(), "00");
    assert!(parse_timezone("Not/AZone").is_err());
}
