//! Thin wrappers over the Google Sheets and Drive REST APIs.
//!
//! The flows in `core` only see the [`SheetsApi`] and [`DriveApi`] traits,
//! so they can run against in-memory fakes.

pub mod auth;
pub mod credentials;
pub mod drive;
pub mod http;
pub mod sheets;

use crate::errors::AppResult;
use crate::models::record::CellValue;
use crate::models::spreadsheet::CreatedSpreadsheet;
use auth::TokenSource;
use credentials::ServiceAccountKey;
use drive::DriveClient;
use sheets::{BatchRequest, SheetsClient};
use std::path::Path;
use std::sync::Arc;

pub const SCOPE_SPREADSHEETS: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const SCOPE_DRIVE: &str = "https://www.googleapis.com/auth/drive";

pub trait SheetsApi: Send + Sync {
    fn batch_update(&self, spreadsheet_id: &str, requests: &[BatchRequest]) -> AppResult<()>;

    /// Overwrite `range` with `rows` (RAW input).
    fn update_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: &[Vec<CellValue>],
    ) -> AppResult<()>;

    /// Insert `rows` after the table found in `range` (RAW input, INSERT_ROWS).
    fn append_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: &[Vec<CellValue>],
    ) -> AppResult<()>;
}

pub trait DriveApi: Send + Sync {
    fn create_spreadsheet(&self, folder_id: &str, title: &str) -> AppResult<CreatedSpreadsheet>;
}

fn token_source(credentials: &Path, scopes: &[&str]) -> AppResult<Arc<TokenSource>> {
    let key = ServiceAccountKey::from_file(credentials)?;
    Ok(Arc::new(TokenSource::new(key, scopes, http::agent())))
}

/// Sheets client authorized for the submission path.
pub fn sheets_client(credentials: &Path) -> AppResult<SheetsClient> {
    let tokens = token_source(credentials, &[SCOPE_SPREADSHEETS])?;
    Ok(SheetsClient::new(http::agent(), tokens))
}

/// Sheets + Drive clients sharing one token, for provisioning.
pub fn provisioning_clients(credentials: &Path) -> AppResult<(SheetsClient, DriveClient)> {
    let tokens = token_source(credentials, &[SCOPE_SPREADSHEETS, SCOPE_DRIVE])?;
    Ok((
        SheetsClient::new(http::agent(), Arc::clone(&tokens)),
        DriveClient::new(http::agent(), tokens),
    ))
}
