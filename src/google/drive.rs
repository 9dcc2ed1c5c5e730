//! Drive API v3 client: only `files.create` for native spreadsheets.

use crate::errors::AppResult;
use crate::google::DriveApi;
use crate::google::auth::TokenSource;
use crate::google::http::read_checked;
use crate::models::spreadsheet::CreatedSpreadsheet;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use ureq::Agent;

pub const DRIVE_BASE_URL: &str = "https://www.googleapis.com/drive/v3";
pub const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DriveFile {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    web_view_link: Option<String>,
}

impl DriveFile {
    fn into_created(self, requested_name: &str) -> CreatedSpreadsheet {
        let link = self
            .web_view_link
            .unwrap_or_else(|| format!("https://docs.google.com/spreadsheets/d/{}/edit", self.id));
        CreatedSpreadsheet {
            name: self.name.unwrap_or_else(|| requested_name.to_string()),
            id: self.id,
            link,
        }
    }
}

pub struct DriveClient {
    agent: Agent,
    tokens: Arc<TokenSource>,
    base_url: String,
}

impl DriveClient {
    pub fn new(agent: Agent, tokens: Arc<TokenSource>) -> Self {
        Self {
            agent,
            tokens,
            base_url: DRIVE_BASE_URL.to_string(),
        }
    }

    /// Point the client at another endpoint (emulators, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl DriveApi for DriveClient {
    fn create_spreadsheet(&self, folder_id: &str, title: &str) -> AppResult<CreatedSpreadsheet> {
        let body = json!({
            "name": title,
            "mimeType": SPREADSHEET_MIME_TYPE,
            "parents": [folder_id],
        });
        tracing::debug!(folder_id, title, "drive.files.create");

        let response = self
            .agent
            .post(&format!("{}/files", self.base_url))
            .header("Authorization", &format!("Bearer {}", self.tokens.token()?))
            .query("fields", "id,name,webViewLink")
            .query("supportsAllDrives", "true")
            .send_json(&body)?;
        let file: DriveFile = read_checked("drive.files.create", response)?;
        Ok(file.into_created(title))
    }
}
