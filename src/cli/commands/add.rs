use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::{SessionState, SubmitLogic};
use crate::errors::{AppError, AppResult};
use crate::google;
use crate::models::bristol::BristolCategory;
use crate::models::record::Record;
use crate::ui::messages::{success, warning};
use crate::utils::{date, time};
use std::path::Path;

/// Record one observation from the terminal through the submission flow.
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Add {
        tipo,
        date: day,
        time: hour,
    } = cmd
    {
        //
        // 1. Configuration (fatal if the spreadsheet is unknown)
        //
        let sheet_id = cfg.require_sheet_id(path)?;
        let tz = cfg.tz()?;

        //
        // 2. Parse inputs, defaulting to "now" in the configured timezone
        //
        let category = BristolCategory::from_input(tipo)
            .ok_or_else(|| AppError::InvalidCategory(format!("'{}' (use 1-7)", tipo)))?;

        let (today, now) = date::now_in(tz);
        let d = match day {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => today,
        };
        let t = time::parse_optional_time(hour.as_ref())?.unwrap_or(now);

        let record = Record::new(d, t, category);

        //
        // 3. Settings check + append
        //
        let sheets = google::sheets_client(&cfg.credentials_path())?;
        let settings = cfg.settings();
        let logic = SubmitLogic::new(&sheets, sheet_id, &settings);

        let mut session = SessionState::default();
        let submission = logic.submit(&mut session, &record);

        if let Some(w) = submission.warning {
            warning(w);
        }
        submission.result?;

        success(format!(
            "Saved {} {} → {}",
            record.day().format("%Y-%m-%d"),
            record.hour().format("%H:%M"),
            record.category()
        ));
    }

    Ok(())
}
