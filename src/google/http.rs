//! Shared HTTP plumbing for the Google REST clients.

use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use ureq::Agent;
use ureq::http::Response;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Blocking agent that hands back 4xx/5xx responses instead of failing,
/// so the API's own error message can be surfaced.
pub fn agent() -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .build()
        .into()
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Api {
        message: String,
        #[serde(default)]
        status: Option<String>,
    },
    // OAuth token endpoint: {"error": "invalid_grant", "error_description": "..."}
    Code(String),
}

#[derive(Debug, Deserialize)]
struct OAuthError {
    #[serde(default)]
    error_description: Option<String>,
}

/// Best human-readable message from an error response body.
pub fn error_message(body: &str) -> String {
    if let Ok(env) = serde_json::from_str::<ErrorEnvelope>(body) {
        return match env.error {
            ErrorBody::Api {
                message,
                status: Some(status),
            } => format!("{} ({})", message, status),
            ErrorBody::Api { message, .. } => message,
            ErrorBody::Code(code) => {
                match serde_json::from_str::<OAuthError>(body)
                    .ok()
                    .and_then(|e| e.error_description)
                {
                    Some(desc) => format!("{}: {}", code, desc),
                    None => code,
                }
            }
        };
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "empty response body".to_string()
    } else {
        trimmed.chars().take(300).collect()
    }
}

/// Turn a non-2xx response into `AppError::Remote`.
pub fn ensure_success(
    operation: &str,
    mut response: Response<ureq::Body>,
) -> AppResult<Response<ureq::Body>> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.body_mut().read_to_string().unwrap_or_default();
    Err(AppError::remote(
        operation,
        Some(status.as_u16()),
        error_message(&body),
    ))
}

/// Check the status, then decode the JSON body.
pub fn read_checked<T: DeserializeOwned>(
    operation: &str,
    response: Response<ureq::Body>,
) -> AppResult<T> {
    let mut response = ensure_success(operation, response)?;
    response
        .body_mut()
        .read_json::<T>()
        .map_err(|e| AppError::remote(operation, None, format!("unreadable response: {}", e)))
}
