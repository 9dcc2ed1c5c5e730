use crate::models::bristol::BristolCategory;
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

/// A single cell of a spreadsheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(i64),
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

/// One stool observation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    day: NaiveDate,
    hour: NaiveTime,
    category: BristolCategory,
}

impl Record {
    /// Build a record; seconds and sub-seconds of `hour` are dropped.
    pub fn new(day: NaiveDate, hour: NaiveTime, category: BristolCategory) -> Self {
        let hour = NaiveTime::from_hms_opt(hour.hour(), hour.minute(), 0).unwrap_or(hour);
        Self {
            day,
            hour,
            category,
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn hour(&self) -> NaiveTime {
        self.hour
    }

    pub fn category(&self) -> BristolCategory {
        self.category
    }

    /// Row layout: [dia, hora, tipo].
    pub fn to_row(&self) -> Vec<CellValue> {
        vec![
            CellValue::Text(self.day.format("%Y-%m-%d").to_string()),
            CellValue::Text(self.hour.format("%H:%M").to_string()),
            CellValue::Number(i64::from(self.category.code())),
        ]
    }
}
