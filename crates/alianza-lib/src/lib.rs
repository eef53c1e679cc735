//! `alianza-lib` — In-process help-request intake library.
//!
//! Provides the core of the Alianza case-intake console: a record store
//! over pluggable key-value storage, ticket (radicado) generation, and
//! the multi-step intake wizard. No database; state is two JSON
//! documents behind the [`Storage`] trait.
//!
//! # Quick Start
//!
//! ```no_run
//! use alianza_lib::{IntakeWizard, MemoryStorage, RecordStore, Status, TicketGenerator};
//!
//! let mut store = RecordStore::new(MemoryStorage::new());
//! let tickets = TicketGenerator::default();
//!
//! // Drive the wizard
//! let mut wizard = IntakeWizard::new();
//! wizard.form.name = "María González".into();
//! wizard.form.phone = "3001234567".into();
//! wizard.form.municipality = "Tumaco".into();
//! wizard.advance().unwrap();
//! wizard.form.help_type = "violencia-fisica".into();
//! wizard.form.urgency = "emergencia".into();
//! wizard.advance().unwrap();
//! wizard.form.description = "Necesito ayuda urgente".into();
//! wizard.form.preferred_contact = "llamada".into();
//! let record = wizard.submit(&mut store, &tickets).unwrap();
//!
//! // Track it later by ticket number
//! let found = store.find_by_ticket(&record.ticket).unwrap();
//! assert_eq!(found.status, Status::Pending);
//! ```

pub mod demo;
pub mod error;
pub mod model;
pub mod query;
pub mod storage;
pub mod store;
pub mod ticket;
pub mod util;
pub mod wizard;

pub use error::{IntakeError, Result, ValidationError};
pub use model::{
    AgeBracket, CallWindow, ContactChannel, HelpRequest, HelpType, NewRequest, SafePolicy,
    ShelterNeed, Status, Urgency,
};
pub use query::ListFilters;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{RecordStore, RequestStats};
pub use ticket::TicketGenerator;
pub use wizard::{IntakeForm, IntakeWizard, Step};
