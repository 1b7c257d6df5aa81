use crate::core::types::ManagerKind;
use crate::error::{RehomeError, Result};
use crate::managers::traits::PackageBackend;
use crate::managers::{capture_stdout, run_install};
use std::process::Command;

pub struct AptBackend;

impl PackageBackend for AptBackend {
    fn kind(&self) -> ManagerKind {
        ManagerKind::Apt
    }

    fn exists(&self, name: &str) -> bool {
        // Present iff apt-cache reports non-empty metadata.
        match capture_stdout("apt-cache", &["show", name]) {
            Some(stdout) => !stdout.trim().is_empty(),
            None => false,
        }
    }

    fn install(&self, name: &str) -> bool {
        run_install("sudo", &["apt", "install", "-y", name])
    }

    fn list_installed(&self) -> Result<Vec<String>> {
        let output = Command::new("apt")
            .args(["list", "--installed"])
            .output()
            .map_err(|e| RehomeError::SystemCommandFailed {
                command: "apt list".into(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(RehomeError::PackageManagerError(
                "Failed to list apt packages".into(),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_installed(&stdout))
    }
}

// `apt list --installed` prints `name/suite,now version arch [state]`,
// plus a "Listing..." banner without a slash.
fn parse_installed(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| line.contains('/'))
        .filter_map(|line| line.split('/').next())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_apt_list_output() {
        let stdout = "Listing... Done\n\
                      bash/noble,now 5.2.21-2ubuntu4 amd64 [installed]\n\
                      vim/noble,now 2:9.1.0016-1ubuntu7 amd64 [installed]\n";
        assert_eq!(parse_installed(stdout), vec!["bash", "vim"]);
    }

    #[test]
    fn skips_banner_and_blank_lines() {
        let stdout = "Listing... Done\n\n";
        assert!(parse_installed(stdout).is_empty());
    }
}
