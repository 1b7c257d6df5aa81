use crate::core::types::ManagerKind;
use crate::error::{RehomeError, Result};
use crate::managers::traits::PackageBackend;
use crate::managers::{capture_stdout, run_install};
use std::process::Command;

pub struct FlatpakBackend;

impl PackageBackend for FlatpakBackend {
    fn kind(&self) -> ManagerKind {
        ManagerKind::Flatpak
    }

    fn exists(&self, name: &str) -> bool {
        // flatpak search exits 0 even with no hits, so match the name as a
        // case-insensitive substring of the result text instead.
        match capture_stdout("flatpak", &["search", name]) {
            Some(stdout) => stdout.to_lowercase().contains(&name.to_lowercase()),
            None => false,
        }
    }

    fn install(&self, name: &str) -> bool {
        run_install("sudo", &["flatpak", "install", "-y", "flathub", name])
    }

    fn list_installed(&self) -> Result<Vec<String>> {
        let output = Command::new("flatpak")
            .args(["list", "--app", "--columns=application"])
            .output()
            .map_err(|e| RehomeError::SystemCommandFailed {
                command: "flatpak list".into(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(RehomeError::PackageManagerError(
                "Failed to list flatpak packages".into(),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
