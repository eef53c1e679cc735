//! Text formatting functions for `alianza_rust`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Status icons (○ ◐ ✓)
//! - Urgency badges ([emergencia], [urgente], ...)
//! - Request line and detail formatting

use alianza_lib::{HelpRequest, Status};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Status icon characters.
pub mod icons {
    /// Pending - awaiting attention (hollow circle).
    pub const PENDING: &str = "○";
    /// In progress - being handled (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Resolved - case closed (checkmark).
    pub const RESOLVED: &str = "✓";
}

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: Status) -> &'static str {
    match status {
        Status::Pending => icons::PENDING,
        Status::InProgress => icons::IN_PROGRESS,
        Status::Resolved => icons::RESOLVED,
    }
}

/// Pad a string to a display width (unicode-aware), truncating longer
/// values with an ellipsis.
#[must_use]
pub fn pad_display(value: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(value);
    if current <= width {
        let mut out = value.to_string();
        out.push_str(&" ".repeat(width - current));
        return out;
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in value.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out.push_str(&" ".repeat(width.saturating_sub(used + 1)));
    out
}

/// Format a single-line request summary.
///
/// Format: `{icon} {id} {ticket} [{urgency}] [{help_type}] {name} {municipality}`
#[must_use]
pub fn format_request_line(request: &HelpRequest) -> String {
    format!(
        "{} {} {} [{}] [{}] {} {}",
        format_status_icon(request.status),
        request.id,
        request.ticket,
        request.urgency,
        request.help_type,
        pad_display(&request.name, 22),
        request.municipality,
    )
}

/// Format the full detail view of a request.
#[must_use]
pub fn format_request_details(request: &HelpRequest) -> String {
    let mut out = String::new();
    let mut line = |label: &str, value: &str| {
        if !value.is_empty() {
            out.push_str(&pad_display(label, 16));
            out.push_str(value);
            out.push('\n');
        }
    };

    line("Ticket:", &request.ticket);
    line("Id:", &request.id);
    line(
        "Status:",
        &format!(
            "{} {}",
            format_status_icon(request.status),
            request.status
        ),
    );
    line("Name:", &request.name);
    line(
        "Age:",
        request.age.as_ref().map(ToString::to_string).unwrap_or_default().as_str(),
    );
    line("Phone:", &request.phone);
    line("Email:", request.email.as_deref().unwrap_or(""));
    line("Municipality:", &request.municipality);
    line("Neighborhood:", request.neighborhood.as_deref().unwrap_or(""));
    line("Help type:", request.help_type.as_str());
    line("Urgency:", request.urgency.as_str());
    line("Violence type:", request.violence_type.as_deref().unwrap_or(""));
    line("First time:", if request.is_first_time { "si" } else { "no" });
    line("Has children:", if request.has_children { "si" } else { "no" });
    line("Needs shelter:", request.needs_shelter.as_str());
    line("Contact via:", request.preferred_contact.as_str());
    line(
        "Best time:",
        request
            .best_time_to_call
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
            .as_str(),
    );
    line(
        "Safe to call:",
        request
            .safe_to_call
            .map(|s| s.as_str().to_string())
            .unwrap_or_default()
            .as_str(),
    );
    line("Created:", &request.created_at.format("%Y-%m-%d %H:%M UTC").to_string());
    line("Updated:", &request.updated_at.format("%Y-%m-%d %H:%M UTC").to_string());
    out.push('\n');
    out.push_str("Description:\n");
    out.push_str(&request.description);
    out.push('\n');
    out
}
