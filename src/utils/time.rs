//! Time utilities: parsing HH:MM (minute precision).

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Parse `HH:MM`; browsers may also post `HH:MM:SS`, seconds are dropped.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    let parsed = NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()?;
    NaiveTime::from_hms_opt(parsed.hour(), parsed.minute(), 0)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}
