//! Application resolution against host package managers.
//!
//! Walks each recorded application through a priority-ordered chain of
//! backends: existence check first, then at most one install attempt per
//! manager, first success wins. An install failure advances the walk to the
//! next manager; it never aborts the batch.

use crate::core::types::{
    AttemptOutcome, AvailableManagers, BatchResult, InstallPriority, ManagerKind,
};
use crate::managers::{BackendRegistry, PackageBackend};
use crate::ui as output;
use colored::Colorize;

/// Resolve every application in `apps` against the managers in `available`.
///
/// Applications are processed strictly sequentially, in input order: installer
/// invocations mutate the host package database, which tolerates at most one
/// mutator at a time. A SIGINT is honored between applications only, never
/// mid-install; the remaining applications are then recorded as failed so the
/// summary still accounts for every input.
pub fn resolve(
    apps: &[String],
    priority: InstallPriority,
    available: &AvailableManagers,
    registry: &BackendRegistry,
) -> BatchResult {
    let chain = attempt_chain(priority, available);
    let mut result = BatchResult::new(apps.len());

    for (idx, app) in apps.iter().enumerate() {
        if output::interrupted() {
            output::warning("Interrupted; remaining applications were not attempted.");
            for remaining in &apps[idx..] {
                result.record_failure(remaining.clone());
            }
            break;
        }

        output::info(&format!(
            "[{}/{}] Attempting to install: {}",
            idx + 1,
            apps.len(),
            app.cyan()
        ));

        if resolve_one(app, &chain, registry) {
            result.record_success();
        } else {
            output::warning(&format!("Failed to install {}", app));
            result.record_failure(app.clone());
        }
    }

    result
}

/// The ordered sequence of managers tried for every application under the
/// given priority: the native chain in probe-discovery order, with flatpak
/// appended (native-first) or prepended (flatpak-first) when present.
pub fn attempt_chain(
    priority: InstallPriority,
    available: &AvailableManagers,
) -> Vec<ManagerKind> {
    let mut chain = available.native_chain();
    if available.has_flatpak() {
        match priority {
            InstallPriority::Native => chain.push(ManagerKind::Flatpak),
            InstallPriority::Flatpak => chain.insert(0, ManagerKind::Flatpak),
        }
    }
    chain
}

fn resolve_one(app: &str, chain: &[ManagerKind], registry: &BackendRegistry) -> bool {
    for kind in chain {
        let Some(backend) = registry.get(*kind) else {
            continue;
        };

        match attempt(backend, app) {
            AttemptOutcome::Installed => {
                output::success(&format!("Installed {} via {}", app, kind));
                return true;
            }
            AttemptOutcome::InstallFailed => {
                output::warning(&format!(
                    "{} has '{}' but the install failed, trying the next manager",
                    kind, app
                ));
            }
            AttemptOutcome::NotFound => {
                output::detail(&format!("{}: not found", kind));
            }
        }
    }
    false
}

/// One (application, manager) attempt. The installer runs at most once, and
/// only after a positive existence check.
fn attempt(backend: &dyn PackageBackend, app: &str) -> AttemptOutcome {
    if !backend.exists(app) {
        return AttemptOutcome::NotFound;
    }

    output::info(&format!("Found in {}. Installing...", backend.kind()));
    if backend.install(app) {
        AttemptOutcome::Installed
    } else {
        AttemptOutcome::InstallFailed
    }
}

#[cfg(test)]
mod tests;
