//! Export flow: pick a drive, files and applications, write the archive.

use crate::backup::archive;
use crate::backup::manifest::Manifest;
use crate::error::{RehomeError, Result};
use crate::managers::BackendRegistry;
use crate::system::{files, inventory};
use crate::ui as output;
use std::path::PathBuf;

pub struct ExportOptions {
    pub drive: Option<PathBuf>,
    pub yes: bool,
}

pub fn run(options: ExportOptions) -> Result<()> {
    output::header("Export backup");

    let target = super::select_drive(options.drive.as_deref(), true)?;
    let home = files::home_dir()?;

    let recommended = files::common_files(&home);
    let selected_files = select_files(&recommended, options.yes);

    let registry = BackendRegistry::default();
    let available = registry.probe();
    output::info(&format!(
        "Detected package managers: {}",
        super::format_managers(&available)
    ));

    let apps = inventory::installed_apps(&available, &registry);
    output::info(&format!("Found {} installed applications.", apps.len()));
    let selected_apps = select_apps(apps, options.yes);

    output::header("Summary");
    output::keyval("Files", &format!("{} item(s)", selected_files.len()));
    output::keyval("Applications", &format!("{} item(s)", selected_apps.len()));
    output::keyval("Destination", &target.mount.display().to_string());

    if !options.yes && !output::prompt_yes_no("Start backup?") {
        output::info("Backup cancelled.");
        return Ok(());
    }

    if output::interrupted() {
        return Err(RehomeError::Interrupted);
    }

    output::info("Creating backup, this may take a while...");
    let manifest = Manifest::new(
        selected_files
            .iter()
            .map(|path| path.display().to_string())
            .collect(),
        selected_apps,
    );
    let backup_path = archive::create(&selected_files, &manifest, &home, &target.mount)?;
    output::success(&format!("Backup created: {}", backup_path.display()));

    Ok(())
}

fn select_files(recommended: &[PathBuf], yes: bool) -> Vec<PathBuf> {
    if recommended.is_empty() {
        output::warning("No recommended files found in your home directory.");
        return Vec::new();
    }

    output::info("Recommended files and directories:");
    for path in recommended {
        if let Some(name) = path.file_name() {
            output::indent(&format!("- {}", name.to_string_lossy()), 1);
        }
    }

    if yes || output::prompt_yes_no("Use recommended files?") {
        return recommended.to_vec();
    }

    recommended
        .iter()
        .filter(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            output::prompt_yes_no(&format!("Include {}?", name))
        })
        .cloned()
        .collect()
}

fn select_apps(apps: Vec<String>, yes: bool) -> Vec<String> {
    if apps.is_empty() {
        return apps;
    }

    if yes || output::prompt_yes_no("Include all applications in the backup?") {
        return apps;
    }

    apps.into_iter()
        .filter(|app| output::prompt_yes_no(&format!("Include {}?", app)))
        .collect()
}
