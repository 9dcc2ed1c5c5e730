//! Unified application error type.
//! All modules (config, google, core, cli, web) return AppError so the
//! caller decides whether a failure is fatal or only a warning.

use std::io;
use thiserror::Error;

/// Coarse classification used by callers to pick fatal-vs-warning handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Extraction,
    Remote,
    Settings,
    Input,
    Internal,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing `sheet_id` in configuration file {0}")]
    MissingSheetId(String),

    #[error("Invalid service account credentials: {0}")]
    Credentials(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid folder reference: '{0}' is neither a folder ID nor a folder URL")]
    FolderReference(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid stool type: {0}")]
    InvalidCategory(String),

    // ---------------------------
    // Remote API errors
    // ---------------------------
    #[error("{operation} failed{}: {message}", http_status_suffix(.status))]
    Remote {
        operation: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Could not confirm spreadsheet timezone/locale: {0}")]
    Settings(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn remote(operation: &str, status: Option<u16>, message: impl Into<String>) -> Self {
        AppError::Remote {
            operation: operation.to_string(),
            status,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Config(_)
            | AppError::MissingSheetId(_)
            | AppError::Credentials(_)
            | AppError::Yaml(_) => ErrorKind::Config,
            AppError::FolderReference(_) => ErrorKind::Extraction,
            AppError::Remote { .. } => ErrorKind::Remote,
            AppError::Settings(_) => ErrorKind::Settings,
            AppError::InvalidDate(_) | AppError::InvalidTime(_) | AppError::InvalidCategory(_) => {
                ErrorKind::Input
            }
            AppError::Io(_) | AppError::Json(_) | AppError::Other(_) => ErrorKind::Internal,
        }
    }
}

impl From<ureq::Error> for AppError {
    fn from(e: ureq::Error) -> Self {
        let status = match &e {
            ureq::Error::StatusCode(code) => Some(*code),
            _ => None,
        };
        AppError::remote("HTTP request", status, e.to_string())
    }
}

fn http_status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

pub type AppResult<T> = Result<T, AppError>;
