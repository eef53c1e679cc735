//! Submit command implementation.
//!
//! Drives the intake wizard through its three steps with flag-supplied
//! field values. Validation failures are reported per field, exactly as
//! the wizard records them.

use std::time::Duration;

use alianza_lib::{IntakeError, IntakeWizard, TicketGenerator};

use crate::cli::SubmitArgs;
use crate::error::{AlianzaError, Result};
use crate::format::SubmitReceipt;

use super::{OutputMode, open_store, pacing_pause};

/// Presentation pacing before the receipt is shown.
const SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Execute the submit command.
///
/// # Errors
///
/// Returns an error if the workspace is missing, a required field is
/// blank, or the record cannot be persisted.
pub fn execute(args: &SubmitArgs, mode: OutputMode) -> Result<()> {
    let (config, mut store) = open_store()?;
    let tickets = TicketGenerator::new(&config.prefix);

    let mut wizard = IntakeWizard::new();
    fill_form(&mut wizard, args);

    // Walk the steps in order; each transition validates its own step.
    if let Err(e) = wizard.advance().and_then(|_| wizard.advance()) {
        return Err(report_refusal(&wizard, e));
    }

    pacing_pause("Sending your request...", SUBMIT_DELAY, mode);

    let record = match wizard.submit(&mut store, &tickets) {
        Ok(record) => record,
        Err(e) => return Err(report_refusal(&wizard, e)),
    };

    if mode.json {
        let receipt = SubmitReceipt::from(&record);
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    } else if mode.quiet {
        println!("{}", record.ticket);
    } else {
        println!("Request received. Your ticket number:");
        println!();
        println!("  {}", record.ticket);
        println!();
        println!("Keep this number; it is required to track the request:");
        println!("  aps track {}", record.ticket);
    }

    Ok(())
}

fn fill_form(wizard: &mut IntakeWizard, args: &SubmitArgs) {
    let form = &mut wizard.form;
    form.name = args.name.clone().unwrap_or_default();
    form.age = args.age.clone().unwrap_or_default();
    form.phone = args.phone.clone().unwrap_or_default();
    form.email = args.email.clone().unwrap_or_default();
    form.municipality = args.municipality.clone().unwrap_or_default();
    form.neighborhood = args.neighborhood.clone().unwrap_or_default();
    form.address = args.address.clone().unwrap_or_default();
    form.help_type = args.help_type.clone().unwrap_or_default();
    form.urgency = args.urgency.clone().unwrap_or_default();
    form.violence_type = args.violence_type.clone().unwrap_or_default();
    form.description = args.description.clone().unwrap_or_default();
    form.is_first_time = if args.first_time { "si" } else { "no" }.to_string();
    form.has_children = if args.has_children { "si" } else { "no" }.to_string();
    form.needs_shelter = args.needs_shelter.clone().unwrap_or_default();
    form.preferred_contact = args.preferred_contact.clone().unwrap_or_default();
    form.best_time_to_call = args.best_time_to_call.clone().unwrap_or_default();
    form.safe_to_call = args.safe_to_call.clone().unwrap_or_default();
}

/// Print the wizard's field-level errors and wrap the refusal.
fn report_refusal(wizard: &IntakeWizard, e: IntakeError) -> AlianzaError {
    if matches!(
        e,
        IntakeError::Validation { .. } | IntakeError::ValidationErrors { .. }
    ) && !wizard.errors().is_empty()
    {
        eprintln!("The form is incomplete ({}):", wizard.step());
        for (field, message) in wizard.errors() {
            eprintln!("  {} {message}", flag_for(field));
        }
    }
    AlianzaError::Intake(e)
}

/// CLI flag corresponding to a wizard field name.
fn flag_for(field: &str) -> String {
    match field {
        "preferred_contact" => "--contact".to_string(),
        "best_time_to_call" => "--best-time".to_string(),
        "is_first_time" => "--first-time".to_string(),
        other => format!("--{}", other.replace('_', "-")),
    }
}
