//! Import flow: restore files from a backup archive, then reinstall the
//! applications recorded in its manifest.

use crate::backup::archive;
use crate::backup::manifest::Manifest;
use crate::core::resolver;
use crate::core::types::{BatchResult, InstallPriority};
use crate::error::{RehomeError, Result};
use crate::managers::BackendRegistry;
use crate::system::files;
use crate::ui as output;
use colored::Colorize;
use std::path::PathBuf;

pub struct ImportOptions {
    pub drive: Option<PathBuf>,
    pub priority: Option<InstallPriority>,
    pub skip_apps: bool,
    pub yes: bool,
}

pub fn run(options: ImportOptions) -> Result<()> {
    output::header("Import restore");

    let source = super::select_drive(options.drive.as_deref(), false)?;
    let backups = archive::list_backups(&source.mount)?;
    if backups.is_empty() {
        return Err(RehomeError::NoBackupsFound {
            path: source.mount.clone(),
        });
    }

    let backup_name = select_backup(&backups)?;
    let backup_path = source.mount.join(backup_name);
    let home = files::home_dir()?;

    if !options.yes
        && !output::prompt_yes_no(&format!(
            "Restore {} into {}?",
            backup_name,
            home.display()
        ))
    {
        output::info("Restore cancelled.");
        return Ok(());
    }

    if output::interrupted() {
        return Err(RehomeError::Interrupted);
    }

    output::info("Restoring files...");
    archive::extract(&backup_path, &home)?;
    output::success("Files restored.");

    if options.skip_apps {
        // Leave no stale manifest behind even when skipping reinstallation.
        let _ = Manifest::take(&home);
        return Ok(());
    }

    let manifest = match Manifest::take(&home) {
        Ok(manifest) => manifest,
        Err(e) => {
            output::error(&format!("Could not read the backup manifest: {}", e));
            output::warning("Files were restored, but applications cannot be reinstalled.");
            return Ok(());
        }
    };

    output::keyval("Backup created", &manifest.created);
    output::keyval("Source system", &manifest.system);

    if manifest.apps.is_empty() {
        output::info("No applications to reinstall from this backup.");
        return Ok(());
    }

    let registry = BackendRegistry::default();
    let available = registry.probe();
    if available.is_empty() {
        return Err(RehomeError::NoPackageManagers);
    }
    output::info(&format!(
        "Detected package managers: {}",
        super::format_managers(&available)
    ));

    let priority = match options.priority {
        Some(priority) => priority,
        None => prompt_priority(),
    };
    output::info(&format!("Installation priority: {}", priority));

    output::header("Application reinstallation");
    let result = resolver::resolve(&manifest.apps, priority, &available, &registry);

    print_summary(&result);
    Ok(())
}

fn select_backup(backups: &[String]) -> Result<&str> {
    output::info("Available backups:");
    for (idx, name) in backups.iter().enumerate() {
        output::indent(&format!("{}. {}", idx + 1, name), 1);
    }

    let index = output::prompt_index(
        &format!("Select backup [1-{}]:", backups.len()),
        backups.len(),
    )
    .ok_or_else(|| RehomeError::InvalidSelection("not a valid backup number".into()))?;

    Ok(&backups[index])
}

/// One up-front choice for the whole batch; no further interaction during
/// resolution.
fn prompt_priority() -> InstallPriority {
    output::info("Choose installation priority:");
    output::indent("1. Native packages (system package manager)", 1);
    output::indent("2. Flatpak packages", 1);

    match output::prompt_line("Enter your choice (1/2):").as_str() {
        "2" => InstallPriority::Flatpak,
        _ => InstallPriority::Native,
    }
}

fn print_summary(result: &BatchResult) {
    output::header("Installation summary");
    output::keyval(
        "Successfully installed",
        &format!("{}/{}", result.succeeded, result.total),
    );

    if !result.failed.is_empty() {
        output::warning("Failed installations:");
        for app in &result.failed {
            output::indent(&format!("- {}", app.red()), 1);
        }
        output::info("Some application names may differ between repositories.");
    }
}
