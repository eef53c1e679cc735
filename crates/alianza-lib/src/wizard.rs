//! Multi-step intake form state machine.
//!
//! Collects raw field values across three ordered steps, validates the
//! active step before advancing, and on final submission builds the
//! typed payload, generates the ticket and hands the record to the
//! store. Validation is scoped to the active step only; fields that
//! belong to later steps are not checked until the user reaches them.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{IntakeError, Result, ValidationError};
use crate::model::{
    AgeBracket, CallWindow, ContactChannel, HelpRequest, HelpType, NewRequest, SafePolicy,
    ShelterNeed, Urgency,
};
use crate::store::RecordStore;
use crate::storage::Storage;
use crate::ticket::TicketGenerator;

/// Field name constants, used as error-map keys.
pub mod fields {
    pub const NAME: &str = "name";
    pub const AGE: &str = "age";
    pub const PHONE: &str = "phone";
    pub const EMAIL: &str = "email";
    pub const MUNICIPALITY: &str = "municipality";
    pub const NEIGHBORHOOD: &str = "neighborhood";
    pub const ADDRESS: &str = "address";
    pub const HELP_TYPE: &str = "help_type";
    pub const URGENCY: &str = "urgency";
    pub const VIOLENCE_TYPE: &str = "violence_type";
    pub const DESCRIPTION: &str = "description";
    pub const IS_FIRST_TIME: &str = "is_first_time";
    pub const HAS_CHILDREN: &str = "has_children";
    pub const NEEDS_SHELTER: &str = "needs_shelter";
    pub const PREFERRED_CONTACT: &str = "preferred_contact";
    pub const BEST_TIME_TO_CALL: &str = "best_time_to_call";
    pub const SAFE_TO_CALL: &str = "safe_to_call";
}

/// Ordered wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    PersonalInfo,
    HelpClassification,
    DetailsAndContact,
}

impl Step {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PersonalInfo => "personal-info",
            Self::HelpClassification => "help-classification",
            Self::DetailsAndContact => "details-and-contact",
        }
    }

    /// 1-based position, for "step N of M" display.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::PersonalInfo => 1,
            Self::HelpClassification => 2,
            Self::DetailsAndContact => 3,
        }
    }

    /// Total number of steps.
    pub const COUNT: usize = 3;

    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Self::PersonalInfo)
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::DetailsAndContact)
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::PersonalInfo => Some(Self::HelpClassification),
            Self::HelpClassification => Some(Self::DetailsAndContact),
            Self::DetailsAndContact => None,
        }
    }

    const fn prev(self) -> Option<Self> {
        match self {
            Self::PersonalInfo => None,
            Self::HelpClassification => Some(Self::PersonalInfo),
            Self::DetailsAndContact => Some(Self::HelpClassification),
        }
    }

    /// Required fields for this step.
    const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::PersonalInfo => &[fields::NAME, fields::PHONE, fields::MUNICIPALITY],
            Self::HelpClassification => &[fields::HELP_TYPE, fields::URGENCY],
            Self::DetailsAndContact => &[fields::DESCRIPTION, fields::PREFERRED_CONTACT],
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw field values, as entered.
///
/// The `address` field is collected alongside the location fields but is
/// not part of the persisted record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeForm {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub municipality: String,
    pub neighborhood: String,
    pub address: String,
    pub help_type: String,
    pub urgency: String,
    pub violence_type: String,
    pub description: String,
    pub is_first_time: String,
    pub has_children: String,
    pub needs_shelter: String,
    pub preferred_contact: String,
    pub best_time_to_call: String,
    pub safe_to_call: String,
}

impl IntakeForm {
    fn value_of(&self, field: &str) -> &str {
        match field {
            fields::NAME => &self.name,
            fields::AGE => &self.age,
            fields::PHONE => &self.phone,
            fields::EMAIL => &self.email,
            fields::MUNICIPALITY => &self.municipality,
            fields::NEIGHBORHOOD => &self.neighborhood,
            fields::ADDRESS => &self.address,
            fields::HELP_TYPE => &self.help_type,
            fields::URGENCY => &self.urgency,
            fields::VIOLENCE_TYPE => &self.violence_type,
            fields::DESCRIPTION => &self.description,
            fields::IS_FIRST_TIME => &self.is_first_time,
            fields::HAS_CHILDREN => &self.has_children,
            fields::NEEDS_SHELTER => &self.needs_shelter,
            fields::PREFERRED_CONTACT => &self.preferred_contact,
            fields::BEST_TIME_TO_CALL => &self.best_time_to_call,
            fields::SAFE_TO_CALL => &self.safe_to_call,
            _ => "",
        }
    }
}

/// The intake wizard: one active step, step-scoped validation, explicit
/// submission from the final step.
#[derive(Debug, Clone, Default)]
pub struct IntakeWizard {
    /// Current field values. Edited directly by the driver.
    pub form: IntakeForm,
    step: Step,
    errors: BTreeMap<&'static str, String>,
    submitted: Option<String>,
}

impl IntakeWizard {
    /// Start a fresh wizard at the first step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active step.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Field-level error messages from the last refused transition.
    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<&'static str, String> {
        &self.errors
    }

    /// The ticket of a successful submission, if any.
    #[must_use]
    pub fn submitted_ticket(&self) -> Option<&str> {
        self.submitted.as_deref()
    }

    /// Drop the error for one field (the form does this as the user
    /// edits the offending field).
    pub fn clear_error(&mut self, field: &str) {
        self.errors.retain(|k, _| *k != field);
    }

    /// Validate the active step and move to the next one.
    ///
    /// On refusal the active step does not change and one message per
    /// blank required field is recorded.
    ///
    /// # Errors
    ///
    /// Returns the validation errors when a required field is blank,
    /// `AtFinalStep` when there is no next step (submission is explicit),
    /// or `AlreadySubmitted` after a successful submission.
    pub fn advance(&mut self) -> Result<Step> {
        if let Some(ticket) = &self.submitted {
            return Err(IntakeError::AlreadySubmitted {
                ticket: ticket.clone(),
            });
        }

        self.check_step(self.step)?;

        let Some(next) = self.step.next() else {
            return Err(IntakeError::AtFinalStep);
        };
        self.step = next;
        Ok(next)
    }

    /// Move to the previous step without validating; entered values are
    /// kept. A no-op at the first step.
    pub fn retreat(&mut self) -> Step {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Clear all field values and errors and return to the first step.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Validate the final step, build the payload, generate the ticket
    /// and create the record.
    ///
    /// On any failure (validation, payload typing or persistence) the
    /// entered field values are kept so the user can retry.
    ///
    /// # Errors
    ///
    /// Returns `NotAtFinalStep` unless the wizard is at the last step,
    /// `AlreadySubmitted` after a prior success, validation errors for
    /// blank or malformed fields, or whatever `create_record` fails with.
    pub fn submit<S: Storage>(
        &mut self,
        store: &mut RecordStore<S>,
        tickets: &TicketGenerator,
    ) -> Result<HelpRequest> {
        if let Some(ticket) = &self.submitted {
            return Err(IntakeError::AlreadySubmitted {
                ticket: ticket.clone(),
            });
        }
        if !self.step.is_last() {
            return Err(IntakeError::NotAtFinalStep {
                step: self.step.as_str().to_string(),
            });
        }

        self.check_step(self.step)?;

        let mut payload = self.build_payload()?;
        payload.ticket = tickets.generate();

        let record = store.create_record(payload)?;
        self.submitted = Some(record.ticket.clone());
        self.errors.clear();
        Ok(record)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn check_step(&mut self, step: Step) -> Result<()> {
        let mut errors = Vec::new();
        for &field in step.required_fields() {
            if self.form.value_of(field).trim().is_empty() {
                self.errors.insert(field, "is required".to_string());
                errors.push(ValidationError::new(field, "is required"));
            } else {
                self.errors.remove(field);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(IntakeError::from_validation_errors(errors))
        }
    }

    fn build_payload(&self) -> Result<NewRequest> {
        let form = &self.form;

        let optional = |value: &str| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        let needs_shelter = match form.needs_shelter.trim() {
            "" => ShelterNeed::No,
            value => ShelterNeed::from_str(value)?,
        };
        let safe_to_call = match form.safe_to_call.trim() {
            "" => None,
            value => Some(SafePolicy::from_str(value)?),
        };

        Ok(NewRequest {
            ticket: String::new(),
            name: form.name.trim().to_string(),
            age: optional(&form.age).map(|v| AgeBracket::from_str(&v).unwrap_or_else(|e| match e {})),
            phone: form.phone.trim().to_string(),
            email: optional(&form.email),
            municipality: form.municipality.trim().to_string(),
            neighborhood: optional(&form.neighborhood),
            help_type: HelpType::from_str(form.help_type.trim()).unwrap_or_else(|e| match e {}),
            urgency: Urgency::from_str(form.urgency.trim()).unwrap_or_else(|e| match e {}),
            violence_type: optional(&form.violence_type),
            is_first_time: form.is_first_time.trim() == "si",
            has_children: form.has_children.trim() == "si",
            needs_shelter,
            description: form.description.trim().to_string(),
            preferred_contact: ContactChannel::from_str(form.preferred_contact.trim())
                .unwrap_or_else(|e| match e {}),
            best_time_to_call: optional(&form.best_time_to_call)
                .map(|v| CallWindow::from_str(&v).unwrap_or_else(|e| match e {})),
            safe_to_call,
        })
    }
}
