//! Installed-application inventory for the export flow.

use crate::core::types::{AvailableManagers, ManagerKind};
use crate::managers::BackendRegistry;
use crate::ui as output;

/// Collect installed application names from every available manager, merged,
/// deduplicated and sorted. dnf and yum read the same rpm database, so only
/// one of them is consulted.
///
/// A manager that fails to list degrades the inventory, never the run.
pub fn installed_apps(
    available: &AvailableManagers,
    registry: &BackendRegistry,
) -> Vec<String> {
    let mut kinds = available.native_chain();
    if available.has_flatpak() {
        kinds.push(ManagerKind::Flatpak);
    }

    let mut apps: Vec<String> = Vec::new();
    for kind in kinds {
        let Some(backend) = registry.get(kind) else {
            continue;
        };
        match backend.list_installed() {
            Ok(list) => {
                output::detail(&format!("{}: {} packages", kind, list.len()));
                apps.extend(list);
            }
            Err(e) => output::warning(&format!("Could not list {} packages: {}", kind, e)),
        }
    }

    apps.sort();
    apps.dedup();
    apps
}
