//! Command implementations.

pub mod clear;
pub mod init;
pub mod list;
pub mod seed;
pub mod show;
pub mod stats;
pub mod status;
pub mod submit;
pub mod track;

use std::time::Duration;

use alianza_lib::{FileStorage, RecordStore};
use indicatif::ProgressBar;

use crate::config::Config;
use crate::error::{AlianzaError, Result};

/// How command output should be rendered.
#[derive(Debug, Clone, Copy)]
pub struct OutputMode {
    pub json: bool,
    pub quiet: bool,
}

impl OutputMode {
    /// True when human-facing presentation (spinners, pacing) applies.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        !self.json && !self.quiet
    }
}

/// Open the workspace store, requiring `aps init` to have run.
pub(crate) fn open_store() -> Result<(Config, RecordStore<FileStorage>)> {
    if !Config::workspace_exists() {
        return Err(AlianzaError::NotInitialized);
    }
    let config = Config::load()?;
    let storage = FileStorage::open(&config.data_dir).map_err(AlianzaError::Intake)?;
    Ok((config, RecordStore::new(storage)))
}

/// Presentation pacing: a spinner held for a fixed moment before the
/// result is shown. Mirrors the simulated delay in the original console;
/// skipped entirely in json/quiet mode. Not cancellable.
pub(crate) fn pacing_pause(message: &str, delay: Duration, mode: OutputMode) {
    if !mode.is_interactive() {
        return;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    std::thread::sleep(delay);
    spinner.finish_and_clear();
}
