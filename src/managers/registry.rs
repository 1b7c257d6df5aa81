//! Backend registry and host probe.
//!
//! The registry is the single lookup table from `ManagerKind` to its
//! implementation; call sites never branch on manager names themselves.
//! Tests register mock backends through the same interface.

use crate::core::types::{AvailableManagers, ManagerKind};
use crate::managers::apt::AptBackend;
use crate::managers::dnf::RpmBackend;
use crate::managers::flatpak::FlatpakBackend;
use crate::managers::pacman::PacmanBackend;
use crate::managers::traits::PackageBackend;
use crate::managers::zypper::ZypperBackend;
use std::collections::HashMap;

pub struct BackendRegistry {
    backends: HashMap<ManagerKind, Box<dyn PackageBackend>>,
}

impl BackendRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    /// Register a backend under its own kind, replacing any previous one
    pub fn register(&mut self, backend: Box<dyn PackageBackend>) {
        self.backends.insert(backend.kind(), backend);
    }

    pub fn get(&self, kind: ManagerKind) -> Option<&dyn PackageBackend> {
        self.backends.get(&kind).map(|backend| backend.as_ref())
    }

    pub fn has_backend(&self, kind: ManagerKind) -> bool {
        self.backends.contains_key(&kind)
    }

    /// Register all supported backends
    pub fn register_defaults(&mut self) {
        self.register(Box::new(AptBackend));
        self.register(Box::new(RpmBackend::dnf()));
        self.register(Box::new(RpmBackend::yum()));
        self.register(Box::new(PacmanBackend));
        self.register(Box::new(ZypperBackend));
        self.register(Box::new(FlatpakBackend));
    }

    /// Probe host-executable presence for every known backend, in
    /// declaration order. A backend whose tool is missing is simply
    /// excluded, never an error.
    ///
    /// Invoked once per session; the result is passed down explicitly.
    pub fn probe(&self) -> AvailableManagers {
        let managers = ManagerKind::ALL
            .iter()
            .copied()
            .filter(|kind| {
                self.get(*kind)
                    .map(|backend| backend.is_available())
                    .unwrap_or(false)
            })
            .collect();
        AvailableManagers::new(managers)
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_kind() {
        let registry = BackendRegistry::default();
        for kind in ManagerKind::ALL {
            assert!(registry.has_backend(kind), "missing backend for {}", kind);
        }
    }

    #[test]
    fn registered_backend_reports_its_kind() {
        let registry = BackendRegistry::default();
        for kind in ManagerKind::ALL {
            assert_eq!(registry.get(kind).unwrap().kind(), kind);
        }
    }

    #[test]
    fn probe_does_not_panic_on_any_host() {
        let registry = BackendRegistry::default();
        let available = registry.probe();
        // Whatever the host has, the probe never errors out.
        for kind in available.iter() {
            assert!(registry.has_backend(kind));
        }
    }
}
