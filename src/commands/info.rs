//! Host overview: identity, package managers, removable drives.

use crate::error::Result;
use crate::managers::BackendRegistry;
use crate::system::{drives, host};
use crate::ui as output;

pub fn run() -> Result<()> {
    output::header("System");
    output::keyval("Host", &host::identity());

    let registry = BackendRegistry::default();
    let available = registry.probe();

    output::header("Package managers");
    if available.is_empty() {
        output::warning("No supported package managers found.");
    } else {
        for kind in available.iter() {
            output::indent(&format!("- {}", kind), 1);
        }
    }

    output::header("Removable drives");
    match drives::detect() {
        Ok(detected) if !detected.is_empty() => {
            for drive in &detected {
                output::indent(
                    &format!(
                        "- {} ({}, free {})",
                        drive.name,
                        drive.mount.display(),
                        drive.free_space()
                    ),
                    1,
                );
            }
        }
        Ok(_) => output::indent("none detected", 1),
        Err(e) => output::warning(&format!("Drive detection failed: {}", e)),
    }

    Ok(())
}
