use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command: write a configuration file with defaults,
/// optionally seeded with the spreadsheet id and credentials path.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init {
        sheet_id,
        credentials,
        force,
    } = cmd
    {
        let mut template = Config {
            sheet_id: sheet_id.clone(),
            ..Config::default()
        };
        if let Some(c) = credentials {
            template.credentials = c.clone();
        }

        if Config::init_all(path, &template, *force)? {
            success(format!("Config file: {}", path.display()));
        } else {
            warning(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
        }

        if template.sheet_id.is_none() {
            info("Set `sheet_id` after running `petlog provision`.");
        }
    }

    Ok(())
}
