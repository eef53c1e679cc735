//! Seed command implementation.
//!
//! Loads the demo dataset shipped with the original console. Idempotent:
//! a second run detects the known tickets and does nothing.

use alianza_lib::demo::demo_requests;
use chrono::Utc;

use crate::error::Result;

use super::{OutputMode, open_store};

/// Execute the seed command.
///
/// # Errors
///
/// Returns an error if the workspace is missing or a record cannot be
/// persisted.
pub fn execute(mode: OutputMode) -> Result<()> {
    let (_config, mut store) = open_store()?;

    if store.find_by_ticket("ALZ-2024-001").is_some() {
        if mode.json {
            println!("{}", serde_json::json!({ "loaded": 0 }));
        } else {
            println!("Demo data already loaded.");
        }
        return Ok(());
    }

    let records = demo_requests(Utc::now());
    let count = records.len();
    for record in records {
        store.import(record)?;
    }

    if mode.json {
        println!("{}", serde_json::json!({ "loaded": count }));
    } else {
        println!("Loaded {count} demo request(s).");
    }

    Ok(())
}
