//! Clear command implementation.

use crate::cli::ClearArgs;
use crate::error::{AlianzaError, Result};

use super::open_store;

/// Execute the clear command.
///
/// # Errors
///
/// Returns an error without `--yes`, or if deletion fails.
pub fn execute(args: &ClearArgs) -> Result<()> {
    if !args.yes {
        return Err(AlianzaError::validation(
            "confirmation",
            "wiping stored data requires --yes",
        ));
    }

    let (_config, mut store) = open_store()?;
    store.clear()?;
    println!("Cleared all stored requests and the ticket index.");
    Ok(())
}
