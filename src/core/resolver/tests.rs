use super::*;
use crate::error::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Counters {
    exists_calls: AtomicUsize,
    install_calls: AtomicUsize,
}

impl Counters {
    fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    fn install_calls(&self) -> usize {
        self.install_calls.load(Ordering::SeqCst)
    }
}

/// Scripted backend: supplies the packages in `known`, installs succeed or
/// fail wholesale, and every call is counted.
struct MockBackend {
    kind: ManagerKind,
    known: Vec<&'static str>,
    install_ok: bool,
    counters: Arc<Counters>,
}

impl MockBackend {
    fn new(
        kind: ManagerKind,
        known: &[&'static str],
        install_ok: bool,
    ) -> (Self, Arc<Counters>) {
        let counters = Arc::new(Counters::default());
        let backend = Self {
            kind,
            known: known.to_vec(),
            install_ok,
            counters: Arc::clone(&counters),
        };
        (backend, counters)
    }
}

impl PackageBackend for MockBackend {
    fn kind(&self) -> ManagerKind {
        self.kind
    }

    fn is_available(&self) -> bool {
        true
    }

    fn exists(&self, name: &str) -> bool {
        self.counters.exists_calls.fetch_add(1, Ordering::SeqCst);
        self.known.contains(&name)
    }

    fn install(&self, _name: &str) -> bool {
        self.counters.install_calls.fetch_add(1, Ordering::SeqCst);
        self.install_ok
    }

    fn list_installed(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

fn apps(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn every_app_is_accounted_for_exactly_once() {
    let (apt, _) = MockBackend::new(ManagerKind::Apt, &["vim"], true);
    let (flatpak, _) = MockBackend::new(ManagerKind::Flatpak, &["spotify"], false);
    let mut registry = BackendRegistry::new();
    registry.register(Box::new(apt));
    registry.register(Box::new(flatpak));
    let available =
        AvailableManagers::new(vec![ManagerKind::Apt, ManagerKind::Flatpak]);

    let input = apps(&["vim", "spotify", "ghost-app"]);
    let result = resolve(&input, InstallPriority::Native, &available, &registry);

    // vim installs via apt; spotify is found by flatpak but its install
    // fails; ghost-app is found nowhere.
    assert_eq!(result.total, 3);
    assert_eq!(result.succeeded, 1);
    assert_eq!(
        result.failed,
        vec!["spotify".to_string(), "ghost-app".to_string()]
    );
    assert_eq!(result.succeeded + result.failed.len(), result.total);
}

#[test]
fn first_success_stops_the_walk() {
    let (apt, apt_counters) = MockBackend::new(ManagerKind::Apt, &["vim"], true);
    let (pacman, pacman_counters) = MockBackend::new(ManagerKind::Pacman, &["vim"], true);
    let mut registry = BackendRegistry::new();
    registry.register(Box::new(apt));
    registry.register(Box::new(pacman));
    let available =
        AvailableManagers::new(vec![ManagerKind::Apt, ManagerKind::Pacman]);

    let result = resolve(
        &apps(&["vim"]),
        InstallPriority::Native,
        &available,
        &registry,
    );

    assert_eq!(result.succeeded, 1);
    assert_eq!(apt_counters.install_calls(), 1);
    // The second manager is never even queried.
    assert_eq!(pacman_counters.exists_calls(), 0);
    assert_eq!(pacman_counters.install_calls(), 0);
}

#[test]
fn native_install_failure_falls_back_to_flatpak() {
    let (apt, apt_counters) = MockBackend::new(ManagerKind::Apt, &["gimp"], false);
    let (flatpak, flatpak_counters) = MockBackend::new(ManagerKind::Flatpak, &["gimp"], true);
    let mut registry = BackendRegistry::new();
    registry.register(Box::new(apt));
    registry.register(Box::new(flatpak));
    let available =
        AvailableManagers::new(vec![ManagerKind::Apt, ManagerKind::Flatpak]);

    let result = resolve(
        &apps(&["gimp"]),
        InstallPriority::Native,
        &available,
        &registry,
    );

    assert_eq!(result.succeeded, 1);
    assert!(result.failed.is_empty());
    // Exactly two managers attempted: apt found it but failed the install,
    // flatpak found it and succeeded.
    assert_eq!(apt_counters.exists_calls(), 1);
    assert_eq!(apt_counters.install_calls(), 1);
    assert_eq!(flatpak_counters.exists_calls(), 1);
    assert_eq!(flatpak_counters.install_calls(), 1);
}

#[test]
fn unknown_app_is_never_installed() {
    let (apt, apt_counters) = MockBackend::new(ManagerKind::Apt, &[], true);
    let (flatpak, flatpak_counters) = MockBackend::new(ManagerKind::Flatpak, &[], true);
    let mut registry = BackendRegistry::new();
    registry.register(Box::new(apt));
    registry.register(Box::new(flatpak));
    let available =
        AvailableManagers::new(vec![ManagerKind::Apt, ManagerKind::Flatpak]);

    let result = resolve(
        &apps(&["ghost-app"]),
        InstallPriority::Native,
        &available,
        &registry,
    );

    assert_eq!(result.succeeded, 0);
    assert_eq!(result.failed, vec!["ghost-app".to_string()]);
    assert_eq!(apt_counters.install_calls(), 0);
    assert_eq!(flatpak_counters.install_calls(), 0);
}

#[test]
fn priority_swap_keeps_the_totals() {
    // vim is available everywhere; spotify only via flatpak.
    let build_registry = || {
        let (apt, _) = MockBackend::new(ManagerKind::Apt, &["vim"], true);
        let (flatpak, _) = MockBackend::new(ManagerKind::Flatpak, &["vim", "spotify"], true);
        let mut registry = BackendRegistry::new();
        registry.register(Box::new(apt));
        registry.register(Box::new(flatpak));
        registry
    };
    let available =
        AvailableManagers::new(vec![ManagerKind::Apt, ManagerKind::Flatpak]);
    let input = apps(&["vim", "spotify", "ghost-app"]);

    let native = resolve(&input, InstallPriority::Native, &available, &build_registry());
    let flatpak = resolve(
        &input,
        InstallPriority::Flatpak,
        &available,
        &build_registry(),
    );

    // Attribution may flip between managers, totals may not.
    assert_eq!(native.succeeded, flatpak.succeeded);
    assert_eq!(native.failed, flatpak.failed);
}

#[test]
fn end_to_end_native_first_with_partial_failure() {
    let (apt, _) = MockBackend::new(ManagerKind::Apt, &["vim"], true);
    let (flatpak, _) = MockBackend::new(ManagerKind::Flatpak, &[], true);
    let mut registry = BackendRegistry::new();
    registry.register(Box::new(apt));
    registry.register(Box::new(flatpak));
    let available =
        AvailableManagers::new(vec![ManagerKind::Apt, ManagerKind::Flatpak]);

    let result = resolve(
        &apps(&["vim", "ghost-app"]),
        InstallPriority::Native,
        &available,
        &registry,
    );

    assert_eq!(result.succeeded, 1);
    assert_eq!(result.total, 2);
    assert_eq!(result.failed, vec!["ghost-app".to_string()]);
}

#[test]
fn flatpak_first_without_flatpak_falls_through_to_native() {
    let (pacman, pacman_counters) = MockBackend::new(ManagerKind::Pacman, &["htop"], true);
    let mut registry = BackendRegistry::new();
    registry.register(Box::new(pacman));
    let available = AvailableManagers::new(vec![ManagerKind::Pacman]);

    assert_eq!(
        attempt_chain(InstallPriority::Flatpak, &available),
        vec![ManagerKind::Pacman]
    );

    let result = resolve(
        &apps(&["htop"]),
        InstallPriority::Flatpak,
        &available,
        &registry,
    );

    assert_eq!(result.succeeded, 1);
    assert_eq!(result.total, 1);
    assert!(result.failed.is_empty());
    assert_eq!(pacman_counters.install_calls(), 1);
}

#[test]
fn chain_order_follows_priority() {
    let available = AvailableManagers::new(vec![
        ManagerKind::Apt,
        ManagerKind::Dnf,
        ManagerKind::Yum,
        ManagerKind::Flatpak,
    ]);

    // yum is shadowed by dnf in both orders.
    assert_eq!(
        attempt_chain(InstallPriority::Native, &available),
        vec![ManagerKind::Apt, ManagerKind::Dnf, ManagerKind::Flatpak]
    );
    assert_eq!(
        attempt_chain(InstallPriority::Flatpak, &available),
        vec![ManagerKind::Flatpak, ManagerKind::Apt, ManagerKind::Dnf]
    );
}

#[test]
fn empty_input_yields_empty_result() {
    let registry = BackendRegistry::new();
    let available = AvailableManagers::new(vec![ManagerKind::Apt]);

    let result = resolve(&[], InstallPriority::Native, &available, &registry);

    assert_eq!(result.total, 0);
    assert_eq!(result.succeeded, 0);
    assert!(result.failed.is_empty());
}
