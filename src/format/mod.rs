//! Output formatting for `alianza_rust`.
//!
//! - [`output`] - Serializable payload types for `--json` mode
//! - [`text`] - Plain text rendering for terminal output

pub mod output;
pub mod text;

pub use output::{StatusChange, SubmitReceipt, TrackOutcome};
pub use text::{format_request_details, format_request_line, format_status_icon};
