use crate::core::folder::FolderId;
use crate::errors::AppResult;
use crate::google::sheets::BatchRequest;
use crate::google::{DriveApi, SheetsApi};
use crate::models::record::CellValue;
use crate::models::spreadsheet::{CreatedSpreadsheet, HEADER, RECORDS_SHEET, SpreadsheetSettings};

pub const DEFAULT_TITLE: &str = "Registros Fezes Pet";

/// Header range on the sheet that ships with a new spreadsheet.
const DEFAULT_SHEET_HEADER_RANGE: &str = "A1:C1";

/// One-shot creation of the records spreadsheet.
///
/// Not idempotent: every call creates a new file, even for the same folder.
pub struct ProvisionLogic;

impl ProvisionLogic {
    pub fn header_row() -> Vec<CellValue> {
        HEADER.iter().map(|h| CellValue::from(*h)).collect()
    }

    pub fn setup_requests(settings: &SpreadsheetSettings) -> Vec<BatchRequest> {
        vec![
            BatchRequest::UpdateProperties(settings.clone()),
            BatchRequest::AddSheet {
                title: RECORDS_SHEET.to_string(),
            },
        ]
    }

    /// Create the file inside `folder`, then write the header on
    /// the default sheet, set timezone/locale, add the records sheet and write
    /// its header. Any remote failure aborts the sequence.
    pub fn apply(
        sheets: &dyn SheetsApi,
        drive: &dyn DriveApi,
        folder: &FolderId,
        title: &str,
        settings: &SpreadsheetSettings,
    ) -> AppResult<CreatedSpreadsheet> {
        let created = drive.create_spreadsheet(folder.as_str(), title)?;
        tracing::info!(id = %created.id, folder = %folder, "spreadsheet created");

        let header = vec![Self::header_row()];

        sheets.update_values(&created.id, DEFAULT_SHEET_HEADER_RANGE, &header)?;
        sheets.batch_update(&created.id, &Self::setup_requests(settings))?;
        sheets.update_values(&created.id, &format!("{}!A1:C1", RECORDS_SHEET), &header)?;

        Ok(created)
    }
}
