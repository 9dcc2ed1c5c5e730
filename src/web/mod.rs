//! Single-page web form.

pub mod handlers;
pub mod page;
pub mod session;

use crate::config::Config;
use crate::core::submit::SubmitLogic;
use crate::errors::{AppError, AppResult};
use crate::google::{self, SheetsApi};
use crate::models::spreadsheet::SpreadsheetSettings;
use axum::Router;
use axum::routing::get;
use chrono_tz::Tz;
use session::SessionStore;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

/// Shared server state. The only mutable part is the session map.
pub struct AppState {
    pub sheets: Arc<dyn SheetsApi>,
    pub sheet_id: String,
    pub settings: SpreadsheetSettings,
    pub tz: Tz,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(
        sheets: Arc<dyn SheetsApi>,
        sheet_id: String,
        settings: SpreadsheetSettings,
        tz: Tz,
    ) -> Self {
        Self::with_sessions(sheets, sheet_id, settings, tz, SessionStore::new())
    }

    pub fn with_sessions(
        sheets: Arc<dyn SheetsApi>,
        sheet_id: String,
        settings: SpreadsheetSettings,
        tz: Tz,
        sessions: SessionStore,
    ) -> Self {
        Self {
            sheets,
            sheet_id,
            settings,
            tz,
            sessions,
        }
    }

    pub fn logic(&self) -> SubmitLogic<'_> {
        SubmitLogic::new(self.sheets.as_ref(), &self.sheet_id, &self.settings)
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/health", get(handlers::health))
        .with_state(state)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("HTTP server shutting down gracefully");
    }
}

/// Build the state from configuration and serve until Ctrl-C.
pub fn serve(cfg: &Config, config_path: &Path, bind: Option<&str>) -> AppResult<()> {
    let sheet_id = cfg.require_sheet_id(config_path)?.to_string();
    let tz = cfg.tz()?;

    let bind = bind.unwrap_or(cfg.bind.as_str());
    let addr: SocketAddr = bind
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid bind address '{}': {}", bind, e)))?;

    let sheets = google::sheets_client(&cfg.credentials_path())?;
    let state = Arc::new(AppState::new(
        Arc::new(sheets),
        sheet_id,
        cfg.settings(),
        tz,
    ));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("HTTP server bound on http://{}", addr);

        axum::serve(listener, router(state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok::<(), AppError>(())
    })
}
