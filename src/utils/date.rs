//! Date utilities: "now" in a named timezone and tolerant date parsing.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;

/// Parse an IANA timezone name such as `America/Recife`.
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| AppError::Config(format!("Invalid timezone '{}': {}", name, e)))
}

/// Current date and minute-precision time in `tz`.
pub fn now_in(tz: Tz) -> (NaiveDate, NaiveTime) {
    let now = Utc::now().with_timezone(&tz);
    let time = NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or_default();
    (now.date_naive(), time)
}

/// Accepts `YYYY-MM-DD` (HTML date inputs, CLI) and `DD/MM/YYYY`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()
}
