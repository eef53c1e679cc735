//! Filter and sort types for listing help requests.

use crate::model::{HelpRequest, HelpType, Status, Urgency};

/// Filter options for listing requests.
#[derive(Debug, Clone, Default)]
pub struct ListFilters {
    pub statuses: Option<Vec<Status>>,
    pub help_types: Option<Vec<HelpType>>,
    pub urgencies: Option<Vec<Urgency>>,
    /// Case-insensitive exact municipality match.
    pub municipality: Option<String>,
    pub limit: Option<usize>,
    /// Sort field (created_at, updated_at, name, urgency).
    pub sort: Option<String>,
    /// Reverse the sort order.
    pub reverse: bool,
}

/// True if the request passes every set filter.
#[must_use]
pub fn matches_filters(request: &HelpRequest, filters: &ListFilters) -> bool {
    if let Some(ref statuses) = filters.statuses {
        if !statuses.contains(&request.status) {
            return false;
        }
    }

    if let Some(ref types) = filters.help_types {
        if !types.contains(&request.help_type) {
            return false;
        }
    }

    if let Some(ref urgencies) = filters.urgencies {
        if !urgencies.contains(&request.urgency) {
            return false;
        }
    }

    if let Some(ref municipality) = filters.municipality {
        if !request.municipality.eq_ignore_ascii_case(municipality) {
            return false;
        }
    }

    true
}

/// Sort requests in place.
///
/// The listing convention is newest first; that is the default when no
/// sort field is given.
pub fn sort_requests(requests: &mut [HelpRequest], sort: Option<&str>, reverse: bool) {
    match sort {
        Some("updated_at" | "updated") => {
            requests.sort_by_key(|r| r.updated_at);
        }
        Some("created_at" | "created") => {
            requests.sort_by_key(|r| r.created_at);
        }
        Some("name") => {
            requests.sort_by_key(|r| r.name.to_lowercase());
        }
        Some("urgency") => {
            // Emergencies first, then by recency.
            requests.sort_by(|a, b| {
                urgency_rank(&a.urgency)
                    .cmp(&urgency_rank(&b.urgency))
                    .then(b.created_at.cmp(&a.created_at))
            });
        }
        _ => {
            // Default: created_at descending (newest first).
            requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
    }

    if reverse {
        requests.reverse();
    }
}

const fn urgency_rank(urgency: &Urgency) -> u8 {
    match urgency {
        Urgency::Emergency => 0,
        Urgency::Urgent => 1,
        Urgency::Normal => 2,
        Urgency::Custom(_) => 3,
    }
}
