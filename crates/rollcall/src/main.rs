//! # Rollcall CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file parses
//! arguments, sets up logging, invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/rollcallapp/`: UI-agnostic library (records, filtering, tallies, CSV, config)
//! - `crates/rollcall/`: this CLI, depends on `rollcallapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/rollcall/src/cli/)                       │
//! │  - clap argument parsing + session grammar (setup.rs)       │
//! │  - context wiring, handlers, session loop (commands.rs)     │
//! │  - minijinja templates + console styles (render.rs)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (crates/rollcallapp/src/session.rs)                │
//! │  - the API plus the current filter window                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Commands (crates/rollcallapp/src/{api,commands})     │
//! │  - pure logic, structured results, no terminal I/O          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Logging
//!
//! `tracing` events from the library go to stderr through `tracing-subscriber`. The
//! default level is WARN (rejected input); `-v` raises it to DEBUG.

use clap::Parser;

mod cli;

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() {
    let args = cli::setup::Cli::parse();
    init_logging(args.verbose);

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
