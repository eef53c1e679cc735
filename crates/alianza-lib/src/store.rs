//! Help-request record store.
//!
//! Persists two documents through the injected [`Storage`]: the full
//! request collection and a ticket-number index (`ticket → record id`)
//! for O(1) tracking lookups. Both are re-read on every operation and
//! written back whole, matching the single-writer execution model the
//! store is designed for.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{IntakeError, Result};
use crate::model::{HelpRequest, NewRequest, Status};
use crate::query::{ListFilters, matches_filters, sort_requests};
use crate::storage::Storage;
use crate::util::generate_record_id;

/// Storage key for the request collection document.
pub const REQUESTS_KEY: &str = "help_requests";

/// Storage key for the ticket index document.
pub const TICKET_INDEX_KEY: &str = "ticket_index";

/// Aggregate request counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
    /// Requests created strictly within the trailing 7 days.
    pub last_week: usize,
}

/// Record store over an injected key-value storage.
///
/// The store owns both persisted structures; callers never touch the
/// index directly.
pub struct RecordStore<S: Storage> {
    storage: S,
}

impl<S: Storage> RecordStore<S> {
    /// Create a store over the given storage.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Consume the store, returning the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    // ========================================================================
    // Creation
    // ========================================================================

    /// Create a new record from user-supplied fields.
    ///
    /// Assigns a fresh id, sets status to `pending` and both timestamps
    /// to now, appends to the collection and indexes the ticket. The
    /// record write and the index write happen inside this one call; an
    /// index failure does not roll back the record insert.
    ///
    /// The ticket must be non-empty and already generated. Ticket
    /// uniqueness is not checked here; a duplicate simply repoints the
    /// index entry (last writer wins).
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an empty ticket, or a storage error if
    /// persisting fails.
    pub fn create_record(&mut self, new: NewRequest) -> Result<HelpRequest> {
        if new.ticket.trim().is_empty() {
            return Err(IntakeError::validation("ticket", "cannot be empty"));
        }

        let now = Utc::now();
        let mut requests = self.load_requests();

        let id = generate_record_id(&new.name, &new.ticket, now, |candidate| {
            requests.iter().any(|r| r.id == candidate)
        });

        let record = HelpRequest {
            id: id.clone(),
            ticket: new.ticket,
            name: new.name,
            age: new.age,
            phone: new.phone,
            email: new.email,
            municipality: new.municipality,
            neighborhood: new.neighborhood,
            help_type: new.help_type,
            urgency: new.urgency,
            violence_type: new.violence_type,
            is_first_time: new.is_first_time,
            has_children: new.has_children,
            needs_shelter: new.needs_shelter,
            description: new.description,
            preferred_contact: new.preferred_contact,
            best_time_to_call: new.best_time_to_call,
            safe_to_call: new.safe_to_call,
            status: Status::Pending,
            created_at: now,
            updated_at: now,
        };

        requests.push(record.clone());
        self.save_requests(&requests)?;

        let mut index = self.load_index();
        index.insert(record.ticket.clone(), id);
        self.save_index(&index)?;

        tracing::info!(id = %record.id, ticket = %record.ticket, "created help request");
        Ok(record)
    }

    /// Insert a fully-formed record wholesale (seeding, imports).
    ///
    /// Keeps the record's own id, status and timestamps; maintains the
    /// ticket index exactly like `create_record`.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if id or ticket is empty, or a storage error
    /// if persisting fails.
    pub fn import(&mut self, record: HelpRequest) -> Result<()> {
        if record.id.trim().is_empty() {
            return Err(IntakeError::validation("id", "cannot be empty"));
        }
        if record.ticket.trim().is_empty() {
            return Err(IntakeError::validation("ticket", "cannot be empty"));
        }

        let mut requests = self.load_requests();
        let ticket = record.ticket.clone();
        let id = record.id.clone();

        requests.push(record);
        self.save_requests(&requests)?;

        let mut index = self.load_index();
        index.insert(ticket, id);
        self.save_index(&index)?;

        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All records, in storage order.
    ///
    /// Missing or corrupt state degrades to an empty list. Callers apply
    /// their own sort; listing views conventionally use newest first.
    #[must_use]
    pub fn list_records(&self) -> Vec<HelpRequest> {
        self.load_requests()
    }

    /// Filtered, sorted, limited listing.
    #[must_use]
    pub fn list_filtered(&self, filters: &ListFilters) -> Vec<HelpRequest> {
        let mut requests: Vec<HelpRequest> = self
            .load_requests()
            .into_iter()
            .filter(|r| matches_filters(r, filters))
            .collect();

        sort_requests(&mut requests, filters.sort.as_deref(), filters.reverse);

        if let Some(limit) = filters.limit {
            requests.truncate(limit);
        }

        requests
    }

    /// Look up a record by its exact ticket number.
    ///
    /// Case-sensitive; callers trim/normalize the input. Goes through
    /// the index rather than scanning the collection.
    #[must_use]
    pub fn find_by_ticket(&self, ticket: &str) -> Option<HelpRequest> {
        let index = self.load_index();
        let id = index.get(ticket)?;
        self.load_requests().into_iter().find(|r| &r.id == id)
    }

    /// Look up a record by its opaque id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<HelpRequest> {
        self.load_requests().into_iter().find(|r| r.id == id)
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.load_requests().len()
    }

    /// True when no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.load_requests().is_empty()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Change a record's status, refreshing `updated_at`.
    ///
    /// The timestamp is refreshed even when the status value is
    /// unchanged; a repeated transition is not a no-op. Returns
    /// `Ok(None)` without writing when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails.
    pub fn set_status(&mut self, id: &str, new_status: Status) -> Result<Option<HelpRequest>> {
        let mut requests = self.load_requests();

        let Some(record) = requests.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        record.status = new_status;
        record.updated_at = Utc::now();
        let updated = record.clone();

        self.save_requests(&requests)?;
        tracing::info!(id = %updated.id, status = %updated.status, "status changed");
        Ok(Some(updated))
    }

    /// Remove both persisted structures.
    ///
    /// # Errors
    ///
    /// Returns a storage error if deletion fails.
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove(REQUESTS_KEY)?;
        self.storage.remove(TICKET_INDEX_KEY)?;
        Ok(())
    }

    // ========================================================================
    // Stats
    // ========================================================================

    /// Aggregate counts over the current collection.
    #[must_use]
    pub fn compute_stats(&self) -> RequestStats {
        self.compute_stats_at(Utc::now())
    }

    /// Aggregate counts relative to a reference instant.
    ///
    /// The trailing-week window is strict: a record created exactly
    /// 7 days before `now` is excluded.
    #[must_use]
    pub fn compute_stats_at(&self, now: DateTime<Utc>) -> RequestStats {
        let requests = self.load_requests();
        let week_ago = now - Duration::days(7);

        RequestStats {
            total: requests.len(),
            pending: requests.iter().filter(|r| r.status == Status::Pending).count(),
            in_progress: requests
                .iter()
                .filter(|r| r.status == Status::InProgress)
                .count(),
            resolved: requests
                .iter()
                .filter(|r| r.status == Status::Resolved)
                .count(),
            last_week: requests.iter().filter(|r| r.created_at > week_ago).count(),
        }
    }

    // ========================================================================
    // Internal persistence helpers
    // ========================================================================

    fn load_requests(&self) -> Vec<HelpRequest> {
        match self.storage.get(REQUESTS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "corrupt request collection; treating as empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "unreadable request collection; treating as empty");
                Vec::new()
            }
        }
    }

    fn load_index(&self) -> HashMap<String, String> {
        match self.storage.get(TICKET_INDEX_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "corrupt ticket index; treating as empty");
                HashMap::new()
            }),
            Ok(None) => HashMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "unreadable ticket index; treating as empty");
                HashMap::new()
            }
        }
    }

    fn save_requests(&mut self, requests: &[HelpRequest]) -> Result<()> {
        let raw = serde_json::to_string(requests)?;
        self.storage.set(REQUESTS_KEY, &raw)
    }

    fn save_index(&mut self, index: &HashMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string(index)?;
        self.storage.set(TICKET_INDEX_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactChannel, HelpType, ShelterNeed, Urgency};
    use crate::storage::MemoryStorage;

    fn new_request(name: &str, ticket: &str) -> NewRequest {
        NewRequest {
            ticket: ticket.to_string(),
            name: name.to_string(),
            phone: "3001234567".to_string(),
            municipality: "Tumaco".to_string(),
            help_type: HelpType::PhysicalViolence,
            urgency: Urgency::Emergency,
            description: "Necesito ayuda".to_string(),
            preferred_contact: ContactChannel::Call,
            ..Default::default()
        }
    }

    fn store() -> RecordStore<MemoryStorage> {
        RecordStore::new(MemoryStorage::new())
    }

    #[test]
    fn create_assigns_identity_and_defaults() {
        let mut store = store();
        let record = store
            .create_record(new_request("María", "APS-20260805-0001"))
            .unwrap();

        assert!(record.id.starts_with("req-"));
        assert_eq!(record.ticket, "APS-20260805-0001");
        assert_eq!(record.status, Status::Pending);
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn create_rejects_empty_ticket() {
        let mut store = store();
        let result = store.create_record(new_request("María", "  "));
        assert!(matches!(result, Err(IntakeError::Validation { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn ticket_lookup_returns_the_created_record() {
        let mut store = store();
        let created = store
            .create_record(new_request("María", "APS-20260805-0002"))
            .unwrap();

        let found = store.find_by_ticket("APS-20260805-0002").unwrap();
        assert_eq!(found, created);

        // Exact match: case and whitespace matter.
        assert!(store.find_by_ticket("aps-20260805-0002").is_none());
        assert!(store.find_by_ticket(" APS-20260805-0002").is_none());
        assert!(store.find_by_ticket("APS-20260805-9999").is_none());
    }

    #[test]
    fn ticket_lookup_sees_status_updates() {
        let mut store = store();
        let created = store
            .create_record(new_request("Ana", "APS-20260805-0003"))
            .unwrap();

        let updated = store
            .set_status(&created.id, Status::InProgress)
            .unwrap()
            .unwrap();

        let found = store.find_by_ticket("APS-20260805-0003").unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.status, Status::InProgress);
        assert_eq!(found.updated_at, updated.updated_at);
        assert_eq!(found.created_at, created.created_at);
    }

    #[test]
    fn set_status_unknown_id_is_a_sentinel_not_an_error() {
        let mut store = store();
        store
            .create_record(new_request("Ana", "APS-20260805-0004"))
            .unwrap();

        let result = store.set_status("req-nope", Status::Resolved).unwrap();
        assert!(result.is_none());

        // No write happened
        let all = store.list_records();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, Status::Pending);
    }

    #[test]
    fn repeated_status_set_still_refreshes_updated_at() {
        let mut store = store();
        let created = store
            .create_record(new_request("Ana", "APS-20260805-0005"))
            .unwrap();

        let first = store
            .set_status(&created.id, Status::InProgress)
            .unwrap()
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let second = store
            .set_status(&created.id, Status::InProgress)
            .unwrap()
            .unwrap();

        assert_eq!(first.status, second.status);
        assert!(second.updated_at > first.updated_at, "not a no-op");
    }

    #[test]
    fn corrupt_collection_degrades_to_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(REQUESTS_KEY, "{not json").unwrap();
        storage.set(TICKET_INDEX_KEY, "[]").unwrap(); // wrong shape too

        let store = RecordStore::new(storage);
        assert!(store.list_records().is_empty());
        assert!(store.find_by_ticket("APS-20260805-0001").is_none());
        assert_eq!(store.compute_stats().total, 0);
    }

    #[test]
    fn corrupt_state_recovers_on_next_write() {
        let mut storage = MemoryStorage::new();
        storage.set(REQUESTS_KEY, "{not json").unwrap();

        let mut store = RecordStore::new(storage);
        let record = store
            .create_record(new_request("Ana", "APS-20260805-0006"))
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_ticket("APS-20260805-0006").unwrap(), record);
    }

    #[test]
    fn duplicate_ticket_repoints_the_index() {
        let mut store = store();
        store
            .create_record(new_request("First", "APS-20260805-0007"))
            .unwrap();
        let second = store
            .create_record(new_request("Second", "APS-20260805-0007"))
            .unwrap();

        // Last writer wins; both records remain in the collection.
        assert_eq!(store.len(), 2);
        let found = store.find_by_ticket("APS-20260805-0007").unwrap();
        assert_eq!(found.id, second.id);
    }

    #[test]
    fn stats_fixture_with_week_boundary() {
        let now = Utc::now();
        let mut store = store();

        let mut fixture = |name: &str, ticket: &str, status: Status, age: Duration| {
            let base = new_request(name, ticket);
            let at = now - age;
            store
                .import(HelpRequest {
                    id: format!("req-{name}"),
                    ticket: base.ticket,
                    name: base.name,
                    age: None,
                    phone: base.phone,
                    email: None,
                    municipality: base.municipality,
                    neighborhood: None,
                    help_type: base.help_type,
                    urgency: base.urgency,
                    violence_type: None,
                    is_first_time: false,
                    has_children: false,
                    needs_shelter: ShelterNeed::No,
                    description: base.description,
                    preferred_contact: base.preferred_contact,
                    best_time_to_call: None,
                    safe_to_call: None,
                    status,
                    created_at: at,
                    updated_at: at,
                })
                .unwrap();
        };

        fixture("a", "APS-20260801-0001", Status::Pending, Duration::days(1));
        fixture("b", "APS-20260801-0002", Status::Pending, Duration::days(2));
        fixture(
            "c",
            "APS-20260801-0003",
            Status::InProgress,
            Duration::days(3),
        );
        // Exactly 7 days + 1 second ago: outside the window.
        fixture(
            "d",
            "APS-20260801-0004",
            Status::Resolved,
            Duration::days(7) + Duration::seconds(1),
        );
        // 6 days 23 hours ago: inside the window.
        fixture(
            "e",
            "APS-20260801-0005",
            Status::Resolved,
            Duration::days(6) + Duration::hours(23),
        );

        let stats = store.compute_stats_at(now);
        assert_eq!(
            stats,
            RequestStats {
                total: 5,
                pending: 2,
                in_progress: 1,
                resolved: 2,
                last_week: 4,
            }
        );
    }

    #[test]
    fn list_filtered_applies_status_and_limit() {
        let mut store = store();
        store
            .create_record(new_request("a", "APS-20260805-0010"))
            .unwrap();
        store
            .create_record(new_request("b", "APS-20260805-0011"))
            .unwrap();
        let resolved = store
            .create_record(new_request("c", "APS-20260805-0012"))
            .unwrap();
        store
            .set_status(&resolved.id, Status::Resolved)
            .unwrap()
            .unwrap();

        let pending_only = store.list_filtered(&ListFilters {
            statuses: Some(vec![Status::Pending]),
            ..Default::default()
        });
        assert_eq!(pending_only.len(), 2);

        let limited = store.list_filtered(&ListFilters {
            limit: Some(1),
            ..Default::default()
        });
        assert_eq!(limited.len(), 1);
    }

    #[test]
    fn clear_removes_records_and_index() {
        let mut store = store();
        store
            .create_record(new_request("a", "APS-20260805-0013"))
            .unwrap();
        store.clear().unwrap();

        assert!(store.is_empty());
        assert!(store.find_by_ticket("APS-20260805-0013").is_none());
    }
}
