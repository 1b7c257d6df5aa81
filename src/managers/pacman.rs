use crate::core::types::ManagerKind;
use crate::error::{RehomeError, Result};
use crate::managers::traits::PackageBackend;
use crate::managers::{query_succeeds, run_install};
use std::process::Command;

pub struct PacmanBackend;

impl PackageBackend for PacmanBackend {
    fn kind(&self) -> ManagerKind {
        ManagerKind::Pacman
    }

    fn exists(&self, name: &str) -> bool {
        // -Si queries the remote sync databases, not the local install.
        query_succeeds("pacman", &["-Si", name])
    }

    fn install(&self, name: &str) -> bool {
        run_install("sudo", &["pacman", "-S", "--noconfirm", name])
    }

    fn list_installed(&self) -> Result<Vec<String>> {
        let output = Command::new("pacman")
            .arg("-Q")
            .output()
            .map_err(|e| RehomeError::SystemCommandFailed {
                command: "pacman -Q".into(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(RehomeError::PackageManagerError(
                "Failed to query pacman database".into(),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_installed(&stdout))
    }
}

// `pacman -Q` prints `name version` per line.
fn parse_installed(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}
