use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::folder::FolderId;
use crate::core::provision::ProvisionLogic;
use crate::errors::AppResult;
use crate::google;
use crate::ui::messages::{field, info, success};
use crate::utils::path::expand_tilde;

/// Handle `provision`. Every failure is fatal: the error bubbles up to main.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Provision {
        folder_id,
        title,
        credentials,
    } = cmd
    {
        // Fail on a bad folder reference before touching the credentials.
        let folder = FolderId::parse(folder_id)?;

        let (sheets, drive) = google::provisioning_clients(&expand_tilde(credentials))?;
        info(format!("Creating '{}' in folder {}…", title, folder));

        let created = ProvisionLogic::apply(&sheets, &drive, &folder, title, &cfg.settings())?;

        success("Spreadsheet created.");
        field("id", &created.id);
        field("name", &created.name);
        field("link", &created.link);
        info("Put the id in `sheet_id` (petlog init --sheet-id <id>) and share the file with whoever uses the form.");
    }

    Ok(())
}
