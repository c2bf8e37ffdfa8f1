//! Append-only in-memory request stores.
//!
//! Accepted submissions live for the lifetime of the process; nothing is
//! persisted and nothing is evicted. Growth is unbounded; bounding it
//! would require an eviction policy the service does not define.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::models::{ConsultationRequest, QuoteRequest};

/// Anything that can live in a [`RequestStore`].
pub trait StoredRequest: Clone {
    fn id(&self) -> u64;
}

impl StoredRequest for ConsultationRequest {
    fn id(&self) -> u64 {
        self.id
    }
}

impl StoredRequest for QuoteRequest {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Append-only store guarded by a single RwLock.
///
/// Ids come from an explicit counter rather than the sequence length,
/// and are allocated while the write lock is held, so they stay gapless
/// and in insertion order even with concurrent writers.
pub struct RequestStore<T: StoredRequest> {
    records: RwLock<Vec<T>>,
    next_id: AtomicU64,
}

impl<T: StoredRequest> RequestStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Allocate the next id, build the record, append it, and hand back
    /// a copy of what was stored.
    pub fn append<F>(&self, build: F) -> T
    where
        F: FnOnce(u64) -> T,
    {
        let mut records = match self.records.write() {
            Ok(guard) => guard,
            // A poisoned lock still holds valid data: appends are a
            // single push, so no record is ever half-written.
            Err(poisoned) => poisoned.into_inner(),
        };
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let record = build(id);
        records.push(record.clone());
        record
    }

    /// Linear scan for the record with the given id.
    pub fn get(&self, id: u64) -> Option<T> {
        let records = match self.records.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.iter().find(|record| record.id() == id).cloned()
    }

    /// Full contents in insertion order.
    pub fn list(&self) -> Vec<T> {
        match self.records.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.records.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: StoredRequest> Default for RequestStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConsultationRequest, RequestStatus};

    fn record(id: u64, name: &str) -> ConsultationRequest {
        ConsultationRequest {
            id,
            name: name.to_string(),
            email: "a@b.com".to_string(),
            company: "Not specified".to_string(),
            message: "hello".to_string(),
            service_interest: "General inquiry".to_string(),
            timestamp: "2026-08-07T00:00:00.000Z".to_string(),
            status: RequestStatus::Pending,
        }
    }

    #[test]
    fn test_ids_are_gapless_and_start_at_one() {
        let store = RequestStore::new();
        let first = store.append(|id| record(id, "first"));
        let second = store.append(|id| record(id, "second"));
        let third = store.append(|id| record(id, "third"));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_get_by_id() {
        let store = RequestStore::new();
        store.append(|id| record(id, "first"));
        store.append(|id| record(id, "second"));

        let found = store.get(2).expect("id 2 should exist");
        assert_eq!(found.name, "second");
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = RequestStore::new();
        for name in ["a", "b", "c"] {
            store.append(|id| record(id, name));
        }

        let names: Vec<String> = store.list().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_store() {
        let store: RequestStore<ConsultationRequest> = RequestStore::new();
        assert!(store.is_empty());
        assert_eq!(store.list().len(), 0);
        assert!(store.get(1).is_none());
    }
}
