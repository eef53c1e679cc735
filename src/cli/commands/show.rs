//! Show command implementation.

use alianza_lib::{HelpRequest, ticket};

use crate::cli::ShowArgs;
use crate::error::{AlianzaError, Result};
use crate::format::format_request_details;

use super::{OutputMode, open_store};

/// Execute the show command.
///
/// Each reference is tried as a record id first, then as a ticket
/// number (normalized like `track` input).
///
/// # Errors
///
/// Returns `RequestNotFound` if any reference resolves to nothing.
pub fn execute(args: &ShowArgs, mode: OutputMode) -> Result<()> {
    let (_config, store) = open_store()?;

    let mut details: Vec<HelpRequest> = Vec::new();
    for reference in &args.references {
        let record = store
            .find_by_id(reference)
            .or_else(|| store.find_by_ticket(&ticket::normalize(reference)))
            .ok_or_else(|| AlianzaError::RequestNotFound {
                reference: reference.clone(),
            })?;
        details.push(record);
    }

    if mode.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        for request in &details {
            print!("{}", format_request_details(request));
            println!("----------------------------------------");
        }
    }

    Ok(())
}
