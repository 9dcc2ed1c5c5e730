//! Folder references: a bare Drive folder ID or a URL that contains one.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static BARE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{20,}$").expect("valid bare id regex"));

static FOLDER_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/folders/([A-Za-z0-9_-]+)").expect("valid folder url regex"));

/// Resolve a folder reference to its ID.
///
/// Bare IDs are returned unchanged; URLs yield the `/folders/<id>` segment.
/// Anything else is rejected rather than guessed.
pub fn extract_folder_id(reference: &str) -> AppResult<String> {
    let value = reference.trim();

    if BARE_ID.is_match(value) {
        return Ok(value.to_string());
    }

    FOLDER_URL
        .captures(value)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| AppError::FolderReference(reference.to_string()))
}

/// A resolved Drive folder ID. Only built through [`FolderId::parse`], so a
/// value of this type never needs extracting again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderId(String);

impl FolderId {
    pub fn parse(reference: &str) -> AppResult<Self> {
        extract_folder_id(reference).map(FolderId)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FolderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
