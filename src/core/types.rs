use clap::ValueEnum;
use std::fmt;

// Supported package manager backends.
// To add a backend, add a variant here and update:
// - ManagerKind::command()
// - ManagerKind::ALL
// - BackendRegistry::register_defaults()
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum ManagerKind {
    Apt,
    Dnf,
    Yum,
    Pacman,
    Zypper,
    Flatpak, // Cross-distro; every other variant is a native manager
}

impl ManagerKind {
    /// Declaration order is probe-discovery order: native managers first,
    /// flatpak last.
    pub const ALL: [ManagerKind; 6] = [
        ManagerKind::Apt,
        ManagerKind::Dnf,
        ManagerKind::Yum,
        ManagerKind::Pacman,
        ManagerKind::Zypper,
        ManagerKind::Flatpak,
    ];

    /// Host executable probed for this backend.
    pub fn command(&self) -> &'static str {
        match self {
            Self::Apt => "apt",
            Self::Dnf => "dnf",
            Self::Yum => "yum",
            Self::Pacman => "pacman",
            Self::Zypper => "zypper",
            Self::Flatpak => "flatpak",
        }
    }

    pub fn is_native(&self) -> bool {
        !matches!(self, Self::Flatpak)
    }
}

impl fmt::Display for ManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// Ordered set of package managers present on the host.
///
/// Computed once per session by the probe and passed explicitly through the
/// call chain; never re-queried mid-resolution.
#[derive(Debug, Clone, Default)]
pub struct AvailableManagers {
    managers: Vec<ManagerKind>,
}

impl AvailableManagers {
    pub fn new(managers: Vec<ManagerKind>) -> Self {
        Self { managers }
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }

    pub fn contains(&self, kind: ManagerKind) -> bool {
        self.managers.contains(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = ManagerKind> + '_ {
        self.managers.iter().copied()
    }

    pub fn has_flatpak(&self) -> bool {
        self.contains(ManagerKind::Flatpak)
    }

    /// Native managers in probe-discovery order.
    ///
    /// dnf and yum front the same rpm ecosystem: both may be probed, but the
    /// chain contains at most one of them (dnf wins when both exist).
    pub fn native_chain(&self) -> Vec<ManagerKind> {
        self.managers
            .iter()
            .copied()
            .filter(|kind| kind.is_native())
            .filter(|kind| *kind != ManagerKind::Yum || !self.contains(ManagerKind::Dnf))
            .collect()
    }
}

/// Batch-wide installation priority, chosen once by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InstallPriority {
    /// Try native package managers first, fall back to flatpak
    Native,
    /// Try flatpak first, fall back to native package managers
    Flatpak,
}

impl fmt::Display for InstallPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Flatpak => write!(f, "flatpak"),
        }
    }
}

/// Outcome of a single (application, manager) attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    NotFound,
    InstallFailed,
    Installed,
}

/// Aggregate result of one resolution batch.
///
/// Every input application ends up either counted in `succeeded` or listed
/// in `failed`, never both, never neither.
#[derive(Debug)]
pub struct BatchResult {
    pub succeeded: usize,
    pub total: usize,
    pub failed: Vec<String>,
}

impl BatchResult {
    pub fn new(total: usize) -> Self {
        Self {
            succeeded: 0,
            total,
            failed: Vec::new(),
        }
    }

    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, app: String) {
        self.failed.push(app);
    }
}
