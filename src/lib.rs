//! `alianza_rust` - Help-request intake console library
//!
//! This crate provides the CLI surface for the `aps` tool, the
//! administrative companion to the Alianza public intake site.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Workspace configuration (`.alianza/config.yaml`)
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - Diagnostic logging setup
//!
//! The record store, ticket generator and intake wizard live in the
//! `alianza-lib` crate; everything here is presentation and plumbing.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;

pub use error::{AlianzaError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
