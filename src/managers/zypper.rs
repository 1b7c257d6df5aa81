use crate::core::types::ManagerKind;
use crate::error::Result;
use crate::managers::traits::PackageBackend;
use crate::managers::{query_succeeds, run_install};

pub struct ZypperBackend;

impl PackageBackend for ZypperBackend {
    fn kind(&self) -> ManagerKind {
        ManagerKind::Zypper
    }

    fn exists(&self, name: &str) -> bool {
        query_succeeds("zypper", &["info", name])
    }

    fn install(&self, name: &str) -> bool {
        run_install("sudo", &["zypper", "install", "-y", name])
    }

    fn list_installed(&self) -> Result<Vec<String>> {
        // zypper is an install-side backend only; the rpm inventory on SUSE
        // hosts is not exported.
        Ok(Vec::new())
    }
}
