use crate::core::types::ManagerKind;
use crate::error::{RehomeError, Result};
use crate::managers::traits::PackageBackend;
use crate::managers::{query_succeeds, run_install};
use std::process::Command;

/// dnf and yum share their command syntax; one type covers both.
pub struct RpmBackend {
    kind: ManagerKind,
}

impl RpmBackend {
    pub fn dnf() -> Self {
        Self {
            kind: ManagerKind::Dnf,
        }
    }

    pub fn yum() -> Self {
        Self {
            kind: ManagerKind::Yum,
        }
    }
}

impl PackageBackend for RpmBackend {
    fn kind(&self) -> ManagerKind {
        self.kind
    }

    fn exists(&self, name: &str) -> bool {
        query_succeeds(self.kind.command(), &["info", name])
    }

    fn install(&self, name: &str) -> bool {
        run_install("sudo", &[self.kind.command(), "install", "-y", name])
    }

    fn list_installed(&self) -> Result<Vec<String>> {
        let output = Command::new(self.kind.command())
            .args(["list", "installed"])
            .output()
            .map_err(|e| RehomeError::SystemCommandFailed {
                command: format!("{} list installed", self.kind),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(RehomeError::PackageManagerError(format!(
                "Failed to list {} packages",
                self.kind
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_installed(&stdout))
    }
}

// `dnf list installed` prints a header line, then `name.arch version repo`.
fn parse_installed(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}
