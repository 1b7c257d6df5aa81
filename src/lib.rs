pub mod backup;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod managers;
pub mod system;
pub mod ui;

use clap::Parser;
use std::process::exit;

/// Run rehome CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Signal handling: mark cancellation; the resolution loop stops
    //    between applications, never mid-install.
    ctrlc::set_handler(move || {
        eprintln!();
        ui::mark_interrupted();
        ui::warning("Operation cancelled by user.");
    })
    .expect("Error setting Ctrl-C handler");

    // 2. Parse & Run
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
