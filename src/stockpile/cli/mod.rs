//! # CLI Layer
//!
//! One possible UI client for stockpile. Each process invocation runs a
//! single command against the inventory in the data directory and exits.
//!
//! This is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Decides exit codes (via `main.rs`)
//! - Installs the tracing subscriber
//!
//! ## Data Directory
//!
//! Resolved in order: `--home <DIR>`, `$STOCKPILE_HOME`, then the platform
//! data directory. It holds `config.json` and the backing file.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context wiring and per-command handlers
//! - `render`: Tables, summaries and colored messages
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
