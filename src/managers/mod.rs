//! Package manager backend implementations.
//!
//! Each supported manager lives in its own file and implements the
//! `PackageBackend` trait from `traits.rs`. The `BackendRegistry` in
//! `registry.rs` maps a `ManagerKind` to its implementation and probes which
//! backends are usable on the current host.

pub mod apt;
pub mod dnf;
pub mod flatpak;
pub mod pacman;
pub mod registry;
pub mod traits;
pub mod zypper;

pub use registry::BackendRegistry;
pub use traits::PackageBackend;

use std::process::{Command, Stdio};

/// Run a query command, discarding its output. Any spawn failure reads the
/// same as a non-zero exit: "no".
pub(crate) fn query_succeeds(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Run a query command and capture stdout; `None` on spawn failure or
/// non-zero exit.
pub(crate) fn capture_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run an install command with inherited stdio so the tool itself can prompt
/// for privileged authentication. True only on reported success.
pub(crate) fn run_install(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
