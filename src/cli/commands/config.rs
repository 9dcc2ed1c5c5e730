use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):\n", path.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                success("Configuration looks good.");
            } else {
                for p in &problems {
                    warning(p);
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                cfg.save(path)?;
            }

            open_in_editor(path, editor.as_deref())?;
        }
    }

    Ok(())
}

/// `$EDITOR`, then `$VISUAL`, then the platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open `path` with the requested editor, falling back to the default one.
fn open_in_editor(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let fallback = default_editor();
    let mut candidates = vec![requested.unwrap_or(&fallback)];
    if candidates[0] != fallback {
        candidates.push(&fallback);
    }

    for (i, editor) in candidates.iter().enumerate() {
        if i > 0 {
            warning(format!("Falling back to '{}'", editor));
        }
        match Command::new(editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor
                ));
                return Ok(());
            }
            Ok(s) => warning(format!("Editor '{}' exited with {}", editor, s)),
            Err(e) => warning(format!("Editor '{}' not available: {}", editor, e)),
        }
    }

    Err(AppError::Config(format!(
        "No usable editor (tried {})",
        candidates.join(", ")
    )))
}
