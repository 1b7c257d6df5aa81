pub mod drives;
pub mod export;
pub mod import;
pub mod info;

use crate::core::types::AvailableManagers;
use crate::error::{RehomeError, Result};
use crate::system::drives::RemovableDrive;
use crate::ui as output;
use std::path::Path;

/// Resolve the working volume: an explicit mount point, or an interactive
/// numbered selection.
pub(crate) fn select_drive(
    explicit: Option<&Path>,
    show_free: bool,
) -> Result<RemovableDrive> {
    let mut detected = crate::system::drives::detect()?;

    if let Some(mount) = explicit {
        return detected
            .into_iter()
            .find(|drive| drive.mount == mount)
            .ok_or_else(|| {
                RehomeError::InvalidSelection(format!(
                    "no removable drive mounted at {}",
                    mount.display()
                ))
            });
    }

    if detected.is_empty() {
        return Err(RehomeError::NoDrivesFound);
    }

    output::info("Detected removable drives:");
    for (idx, drive) in detected.iter().enumerate() {
        if show_free {
            output::indent(
                &format!(
                    "{}. {} (mount: {}, free: {}, size: {})",
                    idx + 1,
                    drive.name,
                    drive.mount.display(),
                    drive.free_space(),
                    drive.size
                ),
                1,
            );
        } else {
            output::indent(
                &format!("{}. {} (mount: {})", idx + 1, drive.name, drive.mount.display()),
                1,
            );
        }
    }

    let index = output::prompt_index(
        &format!("Select drive [1-{}]:", detected.len()),
        detected.len(),
    )
    .ok_or_else(|| RehomeError::InvalidSelection("not a valid drive number".into()))?;

    Ok(detected.swap_remove(index))
}

pub(crate) fn format_managers(available: &AvailableManagers) -> String {
    if available.is_empty() {
        return "none".to_string();
    }
    available
        .iter()
        .map(|kind| kind.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
