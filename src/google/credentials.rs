//! Service-account key file (the JSON downloaded from the cloud console).

use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type", default)]
    pub key_type: Option<String>,
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let key: ServiceAccountKey =
            serde_json::from_str(raw).map_err(|e| AppError::Credentials(e.to_string()))?;

        if let Some(t) = &key.key_type
            && t != "service_account"
        {
            return Err(AppError::Credentials(format!(
                "expected a 'service_account' key, found '{}'",
                t
            )));
        }
        if !key.private_key.contains("PRIVATE KEY") {
            return Err(AppError::Credentials(
                "`private_key` is not a PEM encoded key".into(),
            ));
        }
        Ok(key)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Credentials(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }
}
