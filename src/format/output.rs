//! Serializable payloads for `--json` output.

use alianza_lib::{HelpRequest, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub ticket: String,
    pub id: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

impl From<&HelpRequest> for SubmitReceipt {
    fn from(request: &HelpRequest) -> Self {
        Self {
            ticket: request.ticket.clone(),
            id: request.id.clone(),
            status: request.status,
            created_at: request.created_at,
        }
    }
}

/// Result of a ticket lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackOutcome {
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<HelpRequest>,
}

/// Result of a status transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChange {
    pub id: String,
    pub ticket: String,
    pub status: Status,
    pub updated_at: DateTime<Utc>,
}

impl From<&HelpRequest> for StatusChange {
    fn from(request: &HelpRequest) -> Self {
        Self {
            id: request.id.clone(),
            ticket: request.ticket.clone(),
            status: request.status,
            updated_at: request.updated_at,
        }
    }
}
