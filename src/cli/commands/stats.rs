//! Stats command implementation.

use crate::error::Result;

use super::{OutputMode, open_store};

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if the workspace is missing or output fails.
pub fn execute(mode: OutputMode) -> Result<()> {
    let (_config, store) = open_store()?;
    let stats = store.compute_stats();

    if mode.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Total:        {}", stats.total);
        println!("Pending:      {}", stats.pending);
        println!("In progress:  {}", stats.in_progress);
        println!("Resolved:     {}", stats.resolved);
        println!("Last 7 days:  {}", stats.last_week);
    }

    Ok(())
}
