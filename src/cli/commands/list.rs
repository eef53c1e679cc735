//! List command implementation.
//!
//! Primary administrative view: filtered listing, newest first by
//! default.

use alianza_lib::{HelpType, ListFilters, Status};

use crate::cli::ListArgs;
use crate::error::Result;
use crate::format::format_request_line;

use super::{OutputMode, open_store};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the workspace is missing or output fails.
pub fn execute(args: &ListArgs, mode: OutputMode) -> Result<()> {
    let (_config, store) = open_store()?;

    let filters = build_filters(args);
    let requests = store.list_filtered(&filters);

    if mode.json {
        println!("{}", serde_json::to_string_pretty(&requests)?);
    } else if requests.is_empty() {
        println!("No requests found.");
    } else {
        for request in &requests {
            println!("{}", format_request_line(request));
        }
        println!("\n{} request(s)", requests.len());
    }

    Ok(())
}

/// Convert CLI args to store filters.
fn build_filters(args: &ListArgs) -> ListFilters {
    // Unparseable status tokens are skipped rather than fatal.
    let statuses = if args.status.is_empty() {
        None
    } else {
        let parsed: Vec<Status> = args.status.iter().filter_map(|s| s.parse().ok()).collect();
        if parsed.is_empty() { None } else { Some(parsed) }
    };

    let help_types = if args.help_type.is_empty() {
        None
    } else {
        Some(
            args.help_type
                .iter()
                .map(|t| t.parse().unwrap_or_else(|e: std::convert::Infallible| match e {}))
                .collect::<Vec<HelpType>>(),
        )
    };

    ListFilters {
        statuses,
        help_types,
        urgencies: None,
        municipality: args.municipality.clone(),
        limit: args.limit,
        sort: args.sort.clone(),
        reverse: args.reverse,
    }
}
