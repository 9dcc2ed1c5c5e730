use serde::{Deserialize, Serialize};

/// Name of the sheet that receives the records.
pub const RECORDS_SHEET: &str = "Registros";

/// Range used by the append path.
pub const RECORDS_RANGE: &str = "Registros!A:C";

/// Fixed header row, written once at provisioning time.
pub const HEADER: [&str; 3] = ["dia", "hora", "tipo"];

pub const DEFAULT_TIMEZONE: &str = "America/Recife";
pub const DEFAULT_LOCALE: &str = "pt_BR";

/// Spreadsheet-level properties asserted on creation and once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadsheetSettings {
    pub timezone: String,
    pub locale: String,
}

impl Default for SpreadsheetSettings {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

/// File returned by the Drive API after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedSpreadsheet {
    pub id: String,
    pub name: String,
    pub link: String,
}
