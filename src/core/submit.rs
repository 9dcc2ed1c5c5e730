use crate::errors::{AppError, AppResult};
use crate::google::SheetsApi;
use crate::google::sheets::BatchRequest;
use crate::models::record::Record;
use crate::models::spreadsheet::{RECORDS_RANGE, SpreadsheetSettings};

/// Per-session state. Each browser session (or CLI invocation) owns one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub settings_checked: bool,
}

/// What a submission produced: an optional settings warning plus the
/// result of the append itself.
#[derive(Debug)]
pub struct Submission {
    pub warning: Option<AppError>,
    pub result: AppResult<()>,
}

/// Append-only write path against a pre-configured spreadsheet.
pub struct SubmitLogic<'a> {
    sheets: &'a dyn SheetsApi,
    sheet_id: &'a str,
    settings: &'a SpreadsheetSettings,
}

impl<'a> SubmitLogic<'a> {
    pub fn new(
        sheets: &'a dyn SheetsApi,
        sheet_id: &'a str,
        settings: &'a SpreadsheetSettings,
    ) -> Self {
        Self {
            sheets,
            sheet_id,
            settings,
        }
    }

    /// Re-assert timezone/locale once per session.
    ///
    /// Failures come back as `AppError::Settings` for the caller to show as a
    /// warning; the session stays unchecked so the next interaction retries.
    pub fn ensure_settings(&self, session: &mut SessionState) -> Option<AppError> {
        if session.settings_checked {
            return None;
        }
        let request = [BatchRequest::UpdateProperties(self.settings.clone())];
        match self.sheets.batch_update(self.sheet_id, &request) {
            Ok(()) => {
                session.settings_checked = true;
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "spreadsheet settings check failed");
                Some(AppError::Settings(e.to_string()))
            }
        }
    }

    /// Append exactly one row for `record`.
    pub fn append(&self, record: &Record) -> AppResult<()> {
        self.sheets
            .append_values(self.sheet_id, RECORDS_RANGE, &[record.to_row()])?;
        tracing::info!(
            day = %record.day(),
            hour = %record.hour().format("%H:%M"),
            code = record.category().code(),
            "record appended"
        );
        Ok(())
    }

    /// Settings check (first use only) followed by the append. A settings
    /// failure never blocks the append.
    pub fn submit(&self, session: &mut SessionState, record: &Record) -> Submission {
        let warning = self.ensure_settings(session);
        let result = self.append(record);
        Submission { warning, result }
    }
}
