#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use petlog::errors::{AppError, AppResult};
use petlog::google::sheets::BatchRequest;
use petlog::google::{DriveApi, SheetsApi};
use petlog::models::record::CellValue;
use petlog::models::spreadsheet::CreatedSpreadsheet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub fn petlog() -> Command {
    cargo_bin_cmd!("petlog")
}

/// Config path inside a fresh temp dir (the file itself is not created).
pub fn temp_config(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("petlog.conf")
}

pub fn write_config(path: &Path, yaml: &str) {
    std::fs::write(path, yaml).expect("write config");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetCall {
    BatchUpdate {
        spreadsheet_id: String,
        requests: Vec<BatchRequest>,
    },
    Update {
        spreadsheet_id: String,
        range: String,
        rows: Vec<Vec<CellValue>>,
    },
    Append {
        spreadsheet_id: String,
        range: String,
        rows: Vec<Vec<CellValue>>,
    },
}

/// In-memory Sheets API: records every call and keeps the rows of the
/// records sheet so appends can be checked against existing data.
#[derive(Debug, Default)]
pub struct FakeSheets {
    pub calls: Mutex<Vec<SheetCall>>,
    pub table: Mutex<Vec<Vec<CellValue>>>,
    pub fail_batch: bool,
    pub fail_append: bool,
}

impl FakeSheets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_settings() -> Self {
        Self {
            fail_batch: true,
            ..Self::default()
        }
    }

    pub fn failing_append() -> Self {
        Self {
            fail_append: true,
            ..Self::default()
        }
    }

    /// Table already holding the header and one earlier record.
    pub fn with_existing_rows() -> Self {
        let fake = Self::default();
        *fake.table.lock().unwrap() = vec![
            vec!["dia".into(), "hora".into(), "tipo".into()],
            vec!["2024-03-04".into(), "21:10".into(), CellValue::Number(4)],
        ];
        fake
    }

    pub fn calls(&self) -> Vec<SheetCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn appends(&self) -> Vec<SheetCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, SheetCall::Append { .. }))
            .collect()
    }

    pub fn batch_updates(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, SheetCall::BatchUpdate { .. }))
            .count()
    }
}

impl SheetsApi for FakeSheets {
    fn batch_update(&self, spreadsheet_id: &str, requests: &[BatchRequest]) -> AppResult<()> {
        self.calls.lock().unwrap().push(SheetCall::BatchUpdate {
            spreadsheet_id: spreadsheet_id.to_string(),
            requests: requests.to_vec(),
        });
        if self.fail_batch {
            return Err(AppError::remote(
                "spreadsheets.batchUpdate",
                Some(403),
                "The caller does not have permission",
            ));
        }
        Ok(())
    }

    fn update_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: &[Vec<CellValue>],
    ) -> AppResult<()> {
        self.calls.lock().unwrap().push(SheetCall::Update {
            spreadsheet_id: spreadsheet_id.to_string(),
            range: range.to_string(),
            rows: rows.to_vec(),
        });
        Ok(())
    }

    fn append_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: &[Vec<CellValue>],
    ) -> AppResult<()> {
        self.calls.lock().unwrap().push(SheetCall::Append {
            spreadsheet_id: spreadsheet_id.to_string(),
            range: range.to_string(),
            rows: rows.to_vec(),
        });
        if self.fail_append {
            return Err(AppError::remote(
                "spreadsheets.values.append",
                Some(503),
                "The service is currently unavailable",
            ));
        }
        self.table.lock().unwrap().extend(rows.iter().cloned());
        Ok(())
    }
}

/// In-memory Drive API handing out sequential ids.
#[derive(Debug, Default)]
pub struct FakeDrive {
    pub created: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl DriveApi for FakeDrive {
    fn create_spreadsheet(&self, folder_id: &str, title: &str) -> AppResult<CreatedSpreadsheet> {
        if self.fail {
            return Err(AppError::remote(
                "drive.files.create",
                Some(404),
                format!("File not found: {}.", folder_id),
            ));
        }
        let mut created = self.created.lock().unwrap();
        created.push((folder_id.to_string(), title.to_string()));
        let id = format!("sheet-{}", created.len());
        Ok(CreatedSpreadsheet {
            link: format!("https://docs.google.com/spreadsheets/d/{}/edit", id),
            name: title.to_string(),
            id,
        })
    }
}
