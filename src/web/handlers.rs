use crate::core::submit::Submission;
use crate::errors::{AppError, AppResult};
use crate::models::bristol::BristolCategory;
use crate::models::record::Record;
use crate::utils::{date, time};
use crate::web::AppState;
use crate::web::page::{Banner, PageView, render};
use crate::web::session::session_cookie;
use axum::Form;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{Html, IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct RecordForm {
    #[serde(default)]
    pub dia: String,
    #[serde(default)]
    pub hora: String,
    #[serde(default)]
    pub tipo: String,
}

/// Run a blocking remote call off the async workers.
async fn blocking<T, F>(state: &Arc<AppState>, f: F) -> AppResult<T>
where
    T: Send + 'static,
    F: FnOnce(&AppState) -> T + Send + 'static,
{
    let state = Arc::clone(state);
    tokio::task::spawn_blocking(move || f(&state))
        .await
        .map_err(|e| AppError::Other(format!("worker failed: {}", e)))
}

fn settings_banner(err: &AppError) -> Banner {
    let detail = match err {
        AppError::Settings(d) => d.clone(),
        other => other.to_string(),
    };
    Banner::Warning(format!(
        "Nao foi possivel confirmar timezone/locale da planilha agora. Detalhe: {}",
        detail
    ))
}

fn page_response(id: Uuid, is_new: bool, view: &PageView) -> Response {
    let mut response = Html(render(view)).into_response();
    if is_new && let Ok(cookie) = HeaderValue::from_str(&session_cookie(&id)) {
        response.headers_mut().insert(SET_COOKIE, cookie);
    }
    response
}

/// Settings check for this session (first interaction only).
async fn check_settings(state: &Arc<AppState>, id: Uuid) -> Option<Banner> {
    let mut session = state.sessions.get(&id);
    if session.settings_checked {
        return None;
    }
    let outcome = blocking(state, move |s| {
        let warning = s.logic().ensure_settings(&mut session);
        (session, warning)
    })
    .await;

    match outcome {
        Ok((session, warning)) => {
            state.sessions.put(id, session);
            warning.as_ref().map(settings_banner)
        }
        Err(e) => Some(settings_banner(&e)),
    }
}

/// GET /
///
/// A browser seen for the first time only gets the form and its cookie; the
/// settings check waits until it comes back with that cookie (or submits).
pub async fn index(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let (id, is_new) = state.sessions.resolve(&headers);
    let (day, hour) = date::now_in(state.tz);

    let mut view = PageView::new(day, hour);
    if !is_new && let Some(w) = check_settings(&state, id).await {
        view = view.with_banner(w);
    }
    page_response(id, is_new, &view)
}

fn parse_form(form: &RecordForm) -> AppResult<Record> {
    let day = date::parse_date(&form.dia).ok_or_else(|| AppError::InvalidDate(form.dia.clone()))?;
    let hour = time::parse_time(&form.hora).ok_or_else(|| AppError::InvalidTime(form.hora.clone()))?;
    let category = BristolCategory::from_label(&form.tipo)
        .ok_or_else(|| AppError::InvalidCategory(form.tipo.clone()))?;
    Ok(Record::new(day, hour, category))
}

/// POST /
pub async fn submit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<RecordForm>,
) -> Response {
    let (id, is_new) = state.sessions.resolve(&headers);

    let record = match parse_form(&form) {
        Ok(r) => r,
        Err(e) => {
            tracing::info!(error = %e, "rejected submission");
            let view = PageView::from_raw(&form.dia, &form.hora, &form.tipo)
                .with_banner(Banner::Error(format!("Erro ao salvar registro: {}", e)));
            return page_response(id, is_new, &view);
        }
    };

    let mut view = PageView::new(record.day(), record.hour());
    view.selected = record.category();

    let session = state.sessions.get(&id);
    let outcome = blocking(&state, move |s| {
        let mut session = session;
        let submission = s.logic().submit(&mut session, &record);
        (session, submission)
    })
    .await;

    let Submission { warning, result } = match outcome {
        Ok((session, submission)) => {
            state.sessions.put(id, session);
            submission
        }
        Err(e) => Submission {
            warning: None,
            result: Err(e),
        },
    };

    if let Some(w) = warning {
        view = view.with_banner(settings_banner(&w));
    }
    view = match result {
        Ok(()) => view.with_banner(Banner::Success("Registro salvo com sucesso.".into())),
        Err(e) => {
            tracing::error!(error = %e, "append failed");
            view.with_banner(Banner::Error(format!("Erro ao salvar registro: {}", e)))
        }
    };

    page_response(id, is_new, &view)
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "sessions": state.sessions.len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
