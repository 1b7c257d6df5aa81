//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::error::Result;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    match &args.command {
        Command::Export { drive } => commands::export::run(commands::export::ExportOptions {
            drive: drive.clone(),
            yes: args.global.yes,
        }),

        Command::Import {
            drive,
            priority,
            skip_apps,
        } => commands::import::run(commands::import::ImportOptions {
            drive: drive.clone(),
            priority: *priority,
            skip_apps: *skip_apps,
            yes: args.global.yes,
        }),

        Command::Drives => commands::drives::run(),

        Command::Info => commands::info::run(),
    }
}
