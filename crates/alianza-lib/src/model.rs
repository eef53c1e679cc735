//! Core data types for `alianza-lib`.
//!
//! Enumerated concepts carry an explicit external string vocabulary: the
//! storage documents and every consumer (CLI, tracking lookups) use these
//! exact strings, so renames here are wire-format changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(b: &bool) -> bool {
    !*b
}

/// Request lifecycle status.
///
/// Closed three-value vocabulary; unknown strings are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }

    /// True while the case still needs attention.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::error::IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" | "inprogress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            other => Err(crate::error::IntakeError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// Category of help requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HelpType {
    #[serde(rename = "violencia-fisica")]
    PhysicalViolence,
    #[serde(rename = "violencia-psicologica")]
    PsychologicalViolence,
    #[serde(rename = "violencia-sexual")]
    SexualViolence,
    #[serde(rename = "violencia-economica")]
    EconomicViolence,
    #[serde(rename = "amenazas")]
    Threats,
    #[serde(rename = "asesoria-legal")]
    LegalAid,
    #[serde(rename = "apoyo-psicologico")]
    Counseling,
    #[serde(rename = "refugio-temporal")]
    Shelter,
    #[default]
    #[serde(rename = "otro")]
    Other,
    #[serde(untagged)]
    Custom(String),
}

impl HelpType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PhysicalViolence => "violencia-fisica",
            Self::PsychologicalViolence => "violencia-psicologica",
            Self::SexualViolence => "violencia-sexual",
            Self::EconomicViolence => "violencia-economica",
            Self::Threats => "amenazas",
            Self::LegalAid => "asesoria-legal",
            Self::Counseling => "apoyo-psicologico",
            Self::Shelter => "refugio-temporal",
            Self::Other => "otro",
            Self::Custom(value) => value,
        }
    }

    #[must_use]
    pub const fn is_standard(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for HelpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HelpType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "violencia-fisica" => Self::PhysicalViolence,
            "violencia-psicologica" => Self::PsychologicalViolence,
            "violencia-sexual" => Self::SexualViolence,
            "violencia-economica" => Self::EconomicViolence,
            "amenazas" => Self::Threats,
            "asesoria-legal" => Self::LegalAid,
            "apoyo-psicologico" => Self::Counseling,
            "refugio-temporal" => Self::Shelter,
            "otro" => Self::Other,
            other => Self::Custom(other.to_string()),
        })
    }
}

/// Urgency level declared by the requester.
///
/// The wizard vocabulary is `emergencia`/`urgente`/`normal`; the demo
/// dataset predates it and carries `high`/`medium`/`low`, absorbed by
/// `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Urgency {
    #[serde(rename = "emergencia")]
    Emergency,
    #[serde(rename = "urgente")]
    Urgent,
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(untagged)]
    Custom(String),
}

impl Urgency {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Emergency => "emergencia",
            Self::Urgent => "urgente",
            Self::Normal => "normal",
            Self::Custom(value) => value,
        }
    }

    #[must_use]
    pub const fn is_emergency(&self) -> bool {
        matches!(self, Self::Emergency)
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "emergencia" => Self::Emergency,
            "urgente" => Self::Urgent,
            "normal" => Self::Normal,
            other => Self::Custom(other.to_string()),
        })
    }
}

/// Requester age bracket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "menor-18")]
    Under18,
    #[serde(rename = "18-25")]
    From18To25,
    #[serde(rename = "26-35")]
    From26To35,
    #[serde(rename = "36-45")]
    From36To45,
    #[serde(rename = "46-60")]
    From46To60,
    #[serde(rename = "mayor-60")]
    Over60,
    #[serde(untagged)]
    Custom(String),
}

impl AgeBracket {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Under18 => "menor-18",
            Self::From18To25 => "18-25",
            Self::From26To35 => "26-35",
            Self::From36To45 => "36-45",
            Self::From46To60 => "46-60",
            Self::Over60 => "mayor-60",
            Self::Custom(value) => value,
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgeBracket {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "menor-18" => Self::Under18,
            "18-25" => Self::From18To25,
            "26-35" => Self::From26To35,
            "36-45" => Self::From36To45,
            "46-60" => Self::From46To60,
            "mayor-60" => Self::Over60,
            other => Self::Custom(other.to_string()),
        })
    }
}

/// Preferred way to reach the requester.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ContactChannel {
    #[default]
    #[serde(rename = "llamada")]
    Call,
    #[serde(rename = "whatsapp")]
    WhatsApp,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "presencial")]
    InPerson,
    #[serde(untagged)]
    Custom(String),
}

impl ContactChannel {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Call => "llamada",
            Self::WhatsApp => "whatsapp",
            Self::Email => "email",
            Self::InPerson => "presencial",
            Self::Custom(value) => value,
        }
    }
}

impl fmt::Display for ContactChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContactChannel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "llamada" => Self::Call,
            "whatsapp" => Self::WhatsApp,
            "email" => Self::Email,
            "presencial" => Self::InPerson,
            other => Self::Custom(other.to_string()),
        })
    }
}

/// Time window in which a call is welcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallWindow {
    #[serde(rename = "manana")]
    Morning,
    #[serde(rename = "tarde")]
    Afternoon,
    #[serde(rename = "noche")]
    Evening,
    #[serde(rename = "cualquier")]
    Any,
    #[serde(untagged)]
    Custom(String),
}

impl CallWindow {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Morning => "manana",
            Self::Afternoon => "tarde",
            Self::Evening => "noche",
            Self::Any => "cualquier",
            Self::Custom(value) => value,
        }
    }
}

impl fmt::Display for CallWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CallWindow {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "manana" => Self::Morning,
            "tarde" => Self::Afternoon,
            "noche" => Self::Evening,
            "cualquier" => Self::Any,
            other => Self::Custom(other.to_string()),
        })
    }
}

/// Whether calling the requester's phone is safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafePolicy {
    #[serde(rename = "si")]
    Yes,
    #[serde(rename = "solo-ciertos-horarios")]
    CertainHours,
    #[serde(rename = "no")]
    No,
}

impl SafePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "si",
            Self::CertainHours => "solo-ciertos-horarios",
            Self::No => "no",
        }
    }
}

impl fmt::Display for SafePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SafePolicy {
    type Err = crate::error::IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "si" => Ok(Self::Yes),
            "solo-ciertos-horarios" => Ok(Self::CertainHours),
            "no" => Ok(Self::No),
            other => Err(crate::error::IntakeError::validation(
                "safe_to_call",
                format!("unknown value '{other}'"),
            )),
        }
    }
}

/// Whether the requester needs temporary shelter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShelterNeed {
    #[serde(rename = "si")]
    Yes,
    #[serde(rename = "tal-vez")]
    Maybe,
    #[default]
    #[serde(rename = "no")]
    No,
}

impl ShelterNeed {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "si",
            Self::Maybe => "tal-vez",
            Self::No => "no",
        }
    }
}

impl fmt::Display for ShelterNeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShelterNeed {
    type Err = crate::error::IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "si" => Ok(Self::Yes),
            "tal-vez" => Ok(Self::Maybe),
            "no" => Ok(Self::No),
            other => Err(crate::error::IntakeError::validation(
                "needs_shelter",
                format!("unknown value '{other}'"),
            )),
        }
    }
}

/// The primary help-request entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HelpRequest {
    /// Opaque unique ID (e.g., "req-7f3k2m0a"). Immutable.
    pub id: String,

    /// Human-facing case number (e.g., "APS-20260805-1234"). Immutable,
    /// re-entered by requesters for status lookup.
    pub ticket: String,

    /// Requester name.
    pub name: String,

    /// Age bracket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<AgeBracket>,

    /// Contact phone number.
    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Municipality of residence.
    pub municipality: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,

    /// Category of help requested.
    #[serde(default)]
    pub help_type: HelpType,

    /// Declared urgency level.
    #[serde(default)]
    pub urgency: Urgency,

    /// Free-text type of violence, when volunteered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violence_type: Option<String>,

    /// First time seeking help.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_first_time: bool,

    /// Children in the household.
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_children: bool,

    /// Temporary shelter need.
    #[serde(default)]
    pub needs_shelter: ShelterNeed,

    /// Free-text description of the situation.
    pub description: String,

    /// Preferred contact channel.
    #[serde(default)]
    pub preferred_contact: ContactChannel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time_to_call: Option<CallWindow>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_to_call: Option<SafePolicy>,

    /// Workflow status.
    #[serde(default)]
    pub status: Status,

    /// Creation timestamp. Set once.
    pub created_at: DateTime<Utc>,

    /// Refreshed on every status change.
    pub updated_at: DateTime<Utc>,
}

/// User-supplied fields for a new request; the store assigns id, status
/// and timestamps. The ticket must already be generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRequest {
    pub ticket: String,
    pub name: String,
    pub age: Option<AgeBracket>,
    pub phone: String,
    pub email: Option<String>,
    pub municipality: String,
    pub neighborhood: Option<String>,
    pub help_type: HelpType,
    pub urgency: Urgency,
    pub violence_type: Option<String>,
    pub is_first_time: bool,
    pub has_children: bool,
    pub needs_shelter: ShelterNeed,
    pub description: String,
    pub preferred_contact: ContactChannel,
    pub best_time_to_call: Option<CallWindow>,
    pub safe_to_call: Option<SafePolicy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_vocabulary_is_closed() {
        assert_eq!(Status::Pending.as_str(), "pending");
        assert_eq!(Status::InProgress.as_str(), "in_progress");
        assert_eq!(Status::Resolved.as_str(), "resolved");
        assert!("pending".parse::<Status>().is_ok());
        assert!("in_progress".parse::<Status>().is_ok());
        assert!("resolved".parse::<Status>().is_ok());
        assert!("open".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn status_serde_uses_external_strings() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let back: Status = serde_json::from_str("\"resolved\"").unwrap();
        assert_eq!(back, Status::Resolved);
    }

    #[test]
    fn help_type_round_trips_external_vocabulary() {
        for token in [
            "violencia-fisica",
            "violencia-psicologica",
            "violencia-sexual",
            "violencia-economica",
            "amenazas",
            "asesoria-legal",
            "apoyo-psicologico",
            "refugio-temporal",
            "otro",
        ] {
            let parsed: HelpType = token.parse().unwrap();
            assert!(parsed.is_standard(), "{token} should map to a variant");
            assert_eq!(parsed.as_str(), token);
            let json = serde_json::to_string(&parsed).unwrap();
            assert_eq!(json, format!("\"{token}\""));
        }
    }

    #[test]
    fn help_type_absorbs_unknown_tokens() {
        let parsed: HelpType = "acompanamiento".parse().unwrap();
        assert_eq!(parsed, HelpType::Custom("acompanamiento".to_string()));
        assert_eq!(parsed.as_str(), "acompanamiento");

        let back: HelpType = serde_json::from_str("\"acompanamiento\"").unwrap();
        assert_eq!(back, parsed);
    }

    #[test]
    fn urgency_absorbs_legacy_levels() {
        let parsed: Urgency = "high".parse().unwrap();
        assert_eq!(parsed, Urgency::Custom("high".to_string()));
        assert!(!parsed.is_emergency());
        assert!("emergencia".parse::<Urgency>().unwrap().is_emergency());
    }

    #[test]
    fn shelter_and_safety_reject_unknown_values() {
        assert!("si".parse::<ShelterNeed>().is_ok());
        assert!("tal-vez".parse::<ShelterNeed>().is_ok());
        assert!("maybe".parse::<ShelterNeed>().is_err());
        assert!("solo-ciertos-horarios".parse::<SafePolicy>().is_ok());
        assert!("sometimes".parse::<SafePolicy>().is_err());
    }

    #[test]
    fn request_serde_round_trip() {
        let now = Utc::now();
        let request = HelpRequest {
            id: "req-abc123".to_string(),
            ticket: "APS-20260805-0042".to_string(),
            name: "María González".to_string(),
            age: Some(AgeBracket::From26To35),
            phone: "3001234567".to_string(),
            email: None,
            municipality: "Tumaco".to_string(),
            neighborhood: Some("Centro".to_string()),
            help_type: HelpType::PhysicalViolence,
            urgency: Urgency::Emergency,
            violence_type: Some("física".to_string()),
            is_first_time: true,
            has_children: true,
            needs_shelter: ShelterNeed::Yes,
            description: "Necesito ayuda urgente".to_string(),
            preferred_contact: ContactChannel::Call,
            best_time_to_call: Some(CallWindow::Morning),
            safe_to_call: Some(SafePolicy::No),
            status: Status::Pending,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"violencia-fisica\""));
        assert!(json.contains("\"emergencia\""));
        assert!(json.contains("\"pending\""));

        let back: HelpRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
