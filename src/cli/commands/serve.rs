use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::web;
use std::path::Path;

/// Handle `serve`: start the web form. Missing `sheet_id` stops startup.
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Serve { bind } = cmd {
        cfg.require_sheet_id(path)?;
        info(format!(
            "Serving the form on http://{} (Ctrl-C to stop)",
            bind.as_deref().unwrap_or(cfg.bind.as_str())
        ));
        web::serve(cfg, path, bind.as_deref())?;
    }
    Ok(())
}
