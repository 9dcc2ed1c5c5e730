//! Sheets API v4 client.

use crate::errors::AppResult;
use crate::google::SheetsApi;
use crate::google::auth::TokenSource;
use crate::google::http::ensure_success;
use crate::models::record::CellValue;
use crate::models::spreadsheet::SpreadsheetSettings;
use serde_json::{Value, json};
use std::sync::Arc;
use ureq::Agent;

pub const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// The subset of `spreadsheets.batchUpdate` requests this tool issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchRequest {
    UpdateProperties(SpreadsheetSettings),
    AddSheet { title: String },
}

impl BatchRequest {
    pub fn to_json(&self) -> Value {
        match self {
            BatchRequest::UpdateProperties(settings) => json!({
                "updateSpreadsheetProperties": {
                    "properties": {
                        "timeZone": settings.timezone,
                        "locale": settings.locale,
                    },
                    "fields": "timeZone,locale",
                }
            }),
            BatchRequest::AddSheet { title } => json!({
                "addSheet": { "properties": { "title": title } }
            }),
        }
    }
}

pub struct SheetsClient {
    agent: Agent,
    tokens: Arc<TokenSource>,
    base_url: String,
}

impl SheetsClient {
    pub fn new(agent: Agent, tokens: Arc<TokenSource>) -> Self {
        Self {
            agent,
            tokens,
            base_url: SHEETS_BASE_URL.to_string(),
        }
    }

    /// Point the client at another endpoint (emulators, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn values_url(&self, spreadsheet_id: &str, range: &str) -> String {
        format!(
            "{}/{}/values/{}",
            self.base_url,
            urlencoding::encode(spreadsheet_id),
            urlencoding::encode(range)
        )
    }

    fn bearer(&self) -> AppResult<String> {
        Ok(format!("Bearer {}", self.tokens.token()?))
    }
}

impl SheetsApi for SheetsClient {
    fn batch_update(&self, spreadsheet_id: &str, requests: &[BatchRequest]) -> AppResult<()> {
        let url = format!(
            "{}/{}:batchUpdate",
            self.base_url,
            urlencoding::encode(spreadsheet_id)
        );
        let body = json!({
            "requests": requests.iter().map(BatchRequest::to_json).collect::<Vec<_>>(),
        });
        tracing::debug!(spreadsheet_id, requests = requests.len(), "spreadsheets.batchUpdate");

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.bearer()?)
            .send_json(&body)?;
        ensure_success("spreadsheets.batchUpdate", response)?;
        Ok(())
    }

    fn update_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: &[Vec<CellValue>],
    ) -> AppResult<()> {
        let body = json!({ "range": range, "majorDimension": "ROWS", "values": rows });
        tracing::debug!(spreadsheet_id, range, "spreadsheets.values.update");

        let response = self
            .agent
            .put(&self.values_url(spreadsheet_id, range))
            .header("Authorization", &self.bearer()?)
            .query("valueInputOption", "RAW")
            .send_json(&body)?;
        ensure_success("spreadsheets.values.update", response)?;
        Ok(())
    }

    fn append_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: &[Vec<CellValue>],
    ) -> AppResult<()> {
        let url = format!("{}:append", self.values_url(spreadsheet_id, range));
        let body = json!({ "majorDimension": "ROWS", "values": rows });
        tracing::debug!(spreadsheet_id, range, rows = rows.len(), "spreadsheets.values.append");

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.bearer()?)
            .query("valueInputOption", "RAW")
            .query("insertDataOption", "INSERT_ROWS")
            .send_json(&body)?;
        ensure_success("spreadsheets.values.append", response)?;
        Ok(())
    }
}
