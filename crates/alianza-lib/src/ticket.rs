//! Ticket (radicado) number generation and parsing.
//!
//! Tickets have the fixed-width shape `PREFIX-YYYYMMDD-NNNN`, e.g.
//! `APS-20260805-1234`. The serial is a plain random draw; generation
//! never consults the record store, so duplicates are theoretically
//! possible within one day (a documented product decision, not a bug to
//! patch here).

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use crate::error::{IntakeError, Result};

/// Default ticket prefix.
pub const DEFAULT_PREFIX: &str = "APS";

/// Inclusive upper bound of the serial space.
const SERIAL_MAX: u16 = 9999;

static TICKET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<prefix>[A-Z]+)-(?P<date>\d{8})-(?P<serial>\d{4})$").expect("ticket regex"));

/// Generates human-readable case numbers.
#[derive(Debug, Clone)]
pub struct TicketGenerator {
    prefix: String,
}

impl Default for TicketGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl TicketGenerator {
    /// Create a generator with the given prefix (uppercased).
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().to_ascii_uppercase(),
        }
    }

    /// The configured prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Generate a ticket for today's local date with the thread RNG.
    #[must_use]
    pub fn generate(&self) -> String {
        self.generate_on(Local::now().date_naive(), &mut rand::rng())
    }

    /// Generate a ticket for a specific date with a caller-supplied RNG.
    ///
    /// Pure apart from the RNG draw, which is uniform over `[0, 9999]`.
    #[must_use]
    pub fn generate_on(&self, date: NaiveDate, rng: &mut impl Rng) -> String {
        let serial: u16 = rng.random_range(0..=SERIAL_MAX);
        format!("{}-{}-{serial:04}", self.prefix, date.format("%Y%m%d"))
    }
}

/// Components of a well-formed ticket number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTicket {
    pub prefix: String,
    pub date: NaiveDate,
    pub serial: u16,
}

/// Normalize requester-entered ticket input: trim and uppercase.
///
/// The lookup itself is exact and case-sensitive; this mirrors the intake
/// form, which uppercases as the user types.
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}

/// Check a string against the `PREFIX-YYYYMMDD-NNNN` shape.
///
/// Shape only; the date digits are not checked for calendar validity.
#[must_use]
pub fn is_valid_format(ticket: &str) -> bool {
    TICKET_RE.is_match(ticket)
}

/// Parse a ticket number into its components.
///
/// # Errors
///
/// Returns `InvalidTicket` if the shape or the embedded date is invalid.
pub fn parse(ticket: &str) -> Result<ParsedTicket> {
    let caps = TICKET_RE
        .captures(ticket)
        .ok_or_else(|| IntakeError::InvalidTicket {
            ticket: ticket.to_string(),
        })?;

    let date = NaiveDate::parse_from_str(&caps["date"], "%Y%m%d").map_err(|_| {
        IntakeError::InvalidTicket {
            ticket: ticket.to_string(),
        }
    })?;
    let serial = caps["serial"].parse::<u16>().map_err(|_| IntakeError::InvalidTicket {
        ticket: ticket.to_string(),
    })?;

    Ok(ParsedTicket {
        prefix: caps["prefix"].to_string(),
        date,
        serial,
    })
}
