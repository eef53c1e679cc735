//! Demo dataset: the ten sample help requests shipped with the original
//! console, ported verbatim.
//!
//! The rows predate the wizard vocabulary, so several fields carry legacy
//! tokens (`high`/`medium`/`low` urgencies, raw ages, `phone`/`morning`
//! contact values) that land in the enums' `Custom` fallback. Tickets use
//! the old `ALZ-YYYY-NNN` shape and are indexed like any other ticket.

use chrono::{DateTime, Duration, Utc};

use crate::model::{
    AgeBracket, CallWindow, ContactChannel, HelpRequest, HelpType, SafePolicy, ShelterNeed, Status,
    Urgency,
};

/// Build the demo records relative to a reference instant.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn demo_requests(now: DateTime<Utc>) -> Vec<HelpRequest> {
    let at = |created_days: i64, updated_days: i64| {
        (
            now - Duration::days(created_days),
            now - Duration::days(updated_days),
        )
    };

    let mut records = Vec::with_capacity(10);

    let (created, updated) = at(5, 5);
    records.push(HelpRequest {
        id: "default-001".to_string(),
        ticket: "ALZ-2024-001".to_string(),
        name: "María González".to_string(),
        age: Some(AgeBracket::Custom("28".to_string())),
        phone: "3001234567".to_string(),
        email: Some("maria.gonzalez@email.com".to_string()),
        municipality: "Tumaco".to_string(),
        neighborhood: Some("Centro".to_string()),
        help_type: HelpType::PhysicalViolence,
        urgency: Urgency::Custom("high".to_string()),
        violence_type: Some("física".to_string()),
        is_first_time: false,
        has_children: true,
        needs_shelter: ShelterNeed::Yes,
        description: "Necesito ayuda urgente por situación de violencia doméstica".to_string(),
        preferred_contact: ContactChannel::Custom("phone".to_string()),
        best_time_to_call: Some(CallWindow::Custom("morning".to_string())),
        safe_to_call: Some(SafePolicy::Yes),
        status: Status::Pending,
        created_at: created,
        updated_at: updated,
    });

    let (created, updated) = at(10, 3);
    records.push(HelpRequest {
        id: "default-002".to_string(),
        ticket: "ALZ-2024-002".to_string(),
        name: "Ana Rodríguez".to_string(),
        age: Some(AgeBracket::Custom("35".to_string())),
        phone: "3009876543".to_string(),
        email: Some("ana.rodriguez@email.com".to_string()),
        municipality: "Buenaventura".to_string(),
        neighborhood: Some("La Playita".to_string()),
        help_type: HelpType::PsychologicalViolence,
        urgency: Urgency::Custom("medium".to_string()),
        violence_type: Some("psicológica".to_string()),
        is_first_time: true,
        has_children: false,
        needs_shelter: ShelterNeed::No,
        description: "Busco apoyo psicológico por violencia emocional".to_string(),
        preferred_contact: ContactChannel::Email,
        best_time_to_call: Some(CallWindow::Custom("afternoon".to_string())),
        safe_to_call: Some(SafePolicy::No),
        status: Status::InProgress,
        created_at: created,
        updated_at: updated,
    });

    let (created, updated) = at(15, 1);
    records.push(HelpRequest {
        id: "default-003".to_string(),
        ticket: "ALZ-2024-003".to_string(),
        name: "Carmen López".to_string(),
        age: Some(AgeBracket::Custom("42".to_string())),
        phone: "3005551234".to_string(),
        email: Some("carmen.lopez@email.com".to_string()),
        municipality: "Tumaco".to_string(),
        neighborhood: Some("Nuevo Milenio".to_string()),
        help_type: HelpType::LegalAid,
        urgency: Urgency::Custom("low".to_string()),
        violence_type: Some("económica".to_string()),
        is_first_time: false,
        has_children: true,
        needs_shelter: ShelterNeed::No,
        description: "Necesito asesoría legal para proceso de divorcio".to_string(),
        preferred_contact: ContactChannel::Custom("phone".to_string()),
        best_time_to_call: Some(CallWindow::Custom("evening".to_string())),
        safe_to_call: Some(SafePolicy::Yes),
        status: Status::Resolved,
        created_at: created,
        updated_at: updated,
    });

    let (created, updated) = at(2, 2);
    records.push(HelpRequest {
        id: "default-004".to_string(),
        ticket: "ALZ-2024-004".to_string(),
        name: "Lucía Martínez".to_string(),
        age: Some(AgeBracket::Custom("31".to_string())),
        phone: "3007778888".to_string(),
        email: Some("lucia.martinez@email.com".to_string()),
        municipality: "Buenaventura".to_string(),
        neighborhood: Some("San José".to_string()),
        help_type: HelpType::Shelter,
        urgency: Urgency::Custom("high".to_string()),
        violence_type: Some("física".to_string()),
        is_first_time: true,
        has_children: true,
        needs_shelter: ShelterNeed::Yes,
        description: "Necesito refugio temporal para mí y mis hijos".to_string(),
        preferred_contact: ContactChannel::Custom("phone".to_string()),
        best_time_to_call: Some(CallWindow::Custom("morning".to_string())),
        safe_to_call: Some(SafePolicy::No),
        status: Status::Pending,
        created_at: created,
        updated_at: updated,
    });

    let (created, updated) = at(7, 4);
    records.push(HelpRequest {
        id: "default-005".to_string(),
        ticket: "ALZ-2024-005".to_string(),
        name: "Patricia Herrera".to_string(),
        age: Some(AgeBracket::Custom("26".to_string())),
        phone: "3002223333".to_string(),
        email: Some("patricia.herrera@email.com".to_string()),
        municipality: "Tumaco".to_string(),
        neighborhood: Some("El Bajito".to_string()),
        help_type: HelpType::Counseling,
        urgency: Urgency::Custom("medium".to_string()),
        violence_type: Some("psicológica".to_string()),
        is_first_time: false,
        has_children: false,
        needs_shelter: ShelterNeed::No,
        description: "Solicito apoyo psicológico por trauma emocional".to_string(),
        preferred_contact: ContactChannel::Email,
        best_time_to_call: Some(CallWindow::Custom("afternoon".to_string())),
        safe_to_call: Some(SafePolicy::Yes),
        status: Status::InProgress,
        created_at: created,
        updated_at: updated,
    });

    let (created, updated) = at(12, 12);
    records.push(HelpRequest {
        id: "default-006".to_string(),
        ticket: "ALZ-2024-006".to_string(),
        name: "Rosa Jiménez".to_string(),
        age: Some(AgeBracket::Custom("39".to_string())),
        phone: "3004445555".to_string(),
        email: Some("rosa.jimenez@email.com".to_string()),
        municipality: "Buenaventura".to_string(),
        neighborhood: Some("Bellavista".to_string()),
        help_type: HelpType::EconomicViolence,
        urgency: Urgency::Custom("medium".to_string()),
        violence_type: Some("económica".to_string()),
        is_first_time: true,
        has_children: true,
        needs_shelter: ShelterNeed::No,
        description: "Mi pareja controla todos mis ingresos y no me permite trabajar".to_string(),
        preferred_contact: ContactChannel::Custom("phone".to_string()),
        best_time_to_call: Some(CallWindow::Custom("morning".to_string())),
        safe_to_call: Some(SafePolicy::Yes),
        status: Status::Pending,
        created_at: created,
        updated_at: updated,
    });

    let (created, updated) = at(8, 6);
    records.push(HelpRequest {
        id: "default-007".to_string(),
        ticket: "ALZ-2024-007".to_string(),
        name: "Elena Vargas".to_string(),
        age: Some(AgeBracket::Custom("33".to_string())),
        phone: "3006667777".to_string(),
        email: Some("elena.vargas@email.com".to_string()),
        municipality: "Tumaco".to_string(),
        neighborhood: Some("Panamá".to_string()),
        help_type: HelpType::Threats,
        urgency: Urgency::Custom("high".to_string()),
        violence_type: Some("psicológica".to_string()),
        is_first_time: false,
        has_children: false,
        needs_shelter: ShelterNeed::Yes,
        description: "Recibo amenazas constantes de mi ex pareja".to_string(),
        preferred_contact: ContactChannel::Custom("phone".to_string()),
        best_time_to_call: Some(CallWindow::Custom("evening".to_string())),
        safe_to_call: Some(SafePolicy::No),
        status: Status::InProgress,
        created_at: created,
        updated_at: updated,
    });

    let (created, updated) = at(1, 1);
    records.push(HelpRequest {
        id: "default-008".to_string(),
        ticket: "ALZ-2024-008".to_string(),
        name: "Gloria Morales".to_string(),
        age: Some(AgeBracket::Custom("45".to_string())),
        phone: "3008889999".to_string(),
        email: Some("gloria.morales@email.com".to_string()),
        municipality: "Buenaventura".to_string(),
        neighborhood: Some("Cristo Rey".to_string()),
        help_type: HelpType::SexualViolence,
        urgency: Urgency::Custom("high".to_string()),
        violence_type: Some("sexual".to_string()),
        is_first_time: true,
        has_children: true,
        needs_shelter: ShelterNeed::Yes,
        description: "Necesito ayuda urgente por abuso sexual".to_string(),
        preferred_contact: ContactChannel::Custom("phone".to_string()),
        best_time_to_call: Some(CallWindow::Custom("morning".to_string())),
        safe_to_call: Some(SafePolicy::Yes),
        status: Status::Pending,
        created_at: created,
        updated_at: updated,
    });

    let (created, updated) = at(20, 18);
    records.push(HelpRequest {
        id: "default-009".to_string(),
        ticket: "ALZ-2024-009".to_string(),
        name: "Sofía Castro".to_string(),
        age: Some(AgeBracket::Custom("29".to_string())),
        phone: "3001112222".to_string(),
        email: Some("sofia.castro@email.com".to_string()),
        municipality: "Tumaco".to_string(),
        neighborhood: Some("La Ciudadela".to_string()),
        help_type: HelpType::Other,
        urgency: Urgency::Custom("low".to_string()),
        violence_type: Some("otra".to_string()),
        is_first_time: false,
        has_children: false,
        needs_shelter: ShelterNeed::No,
        description: "Necesito información sobre mis derechos como mujer".to_string(),
        preferred_contact: ContactChannel::Email,
        best_time_to_call: Some(CallWindow::Custom("afternoon".to_string())),
        safe_to_call: Some(SafePolicy::Yes),
        status: Status::Resolved,
        created_at: created,
        updated_at: updated,
    });

    let (created, updated) = at(6, 4);
    records.push(HelpRequest {
        id: "default-010".to_string(),
        ticket: "ALZ-2024-010".to_string(),
        name: "Beatriz Sánchez".to_string(),
        age: Some(AgeBracket::Custom("37".to_string())),
        phone: "3003334444".to_string(),
        email: Some("beatriz.sanchez@email.com".to_string()),
        municipality: "Buenaventura".to_string(),
        neighborhood: Some("La Inmaculada".to_string()),
        help_type: HelpType::Counseling,
        urgency: Urgency::Custom("medium".to_string()),
        violence_type: Some("psicológica".to_string()),
        is_first_time: true,
        has_children: true,
        needs_shelter: ShelterNeed::No,
        description: "Busco terapia familiar por situación de violencia".to_string(),
        preferred_contact: ContactChannel::Custom("phone".to_string()),
        best_time_to_call: Some(CallWindow::Custom("morning".to_string())),
        safe_to_call: Some(SafePolicy::Yes),
        status: Status::InProgress,
        created_at: created,
        updated_at: updated,
    });

    records
}
