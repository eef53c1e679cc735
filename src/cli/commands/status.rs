//! Status command implementation.

use alianza_lib::{Status, ticket};

use crate::cli::StatusArgs;
use crate::error::{AlianzaError, Result};
use crate::format::{StatusChange, format_status_icon};

use super::{OutputMode, open_store};

/// Execute the status command.
///
/// # Errors
///
/// Returns `RequestNotFound` for an unknown reference, or an
/// `InvalidStatus` error for a value outside the closed vocabulary.
pub fn execute(args: &StatusArgs, mode: OutputMode) -> Result<()> {
    let (_config, mut store) = open_store()?;

    let new_status: Status = args.status.parse().map_err(AlianzaError::Intake)?;

    let record = store
        .find_by_id(&args.reference)
        .or_else(|| store.find_by_ticket(&ticket::normalize(&args.reference)))
        .ok_or_else(|| AlianzaError::RequestNotFound {
            reference: args.reference.clone(),
        })?;

    let updated = store
        .set_status(&record.id, new_status)?
        .ok_or(AlianzaError::RequestNotFound {
            reference: args.reference.clone(),
        })?;

    if mode.json {
        let change = StatusChange::from(&updated);
        println!("{}", serde_json::to_string_pretty(&change)?);
    } else {
        println!(
            "{} {} ({}) is now {}",
            format_status_icon(updated.status),
            updated.ticket,
            updated.id,
            updated.status
        );
    }

    Ok(())
}
