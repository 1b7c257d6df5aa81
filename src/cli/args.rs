use crate::core::types::InstallPriority;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rehome",
    about = "Migrate files and applications between Linux machines",
    long_about = "Back up selected home-directory files and the installed-application \
                  list to a removable drive, then restore them on another machine and \
                  reinstall the applications through whatever package managers it has.",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a backup archive on a removable drive
    Export {
        /// Destination mount point (skips drive selection)
        #[arg(long, value_name = "MOUNT")]
        drive: Option<PathBuf>,
    },

    /// Restore a backup archive and reinstall its applications
    Import {
        /// Source mount point (skips drive selection)
        #[arg(long, value_name = "MOUNT")]
        drive: Option<PathBuf>,

        /// Installation priority for application resolution
        #[arg(long, value_enum)]
        priority: Option<InstallPriority>,

        /// Restore files only, skip application reinstallation
        #[arg(long)]
        skip_apps: bool,
    },

    /// List detected removable drives
    Drives,

    /// Show host identity, package managers and removable drives
    Info,
}
