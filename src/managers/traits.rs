use crate::core::types::ManagerKind;
use crate::error::Result;

/// Capability surface shared by every backend.
///
/// `exists` and `install` deliberately return plain booleans: a query tool
/// that is missing or crashes is indistinguishable from "package not found",
/// and a failed install must never abort the surrounding batch.
pub trait PackageBackend: Send + Sync {
    fn kind(&self) -> ManagerKind;

    /// Host-executable presence check. Not a version or functionality check.
    fn is_available(&self) -> bool {
        which::which(self.kind().command()).is_ok()
    }

    /// Whether this backend can supply `name`.
    fn exists(&self, name: &str) -> bool;

    /// Non-interactive privileged install, auto-confirming prompts.
    /// Mutates host package state; called at most once per (application,
    /// manager) pair per resolution attempt.
    fn install(&self, name: &str) -> bool;

    /// Installed package names, for the export inventory.
    fn list_installed(&self) -> Result<Vec<String>>;
}
