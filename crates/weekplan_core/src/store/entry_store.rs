//! Entry list persistence.
//!
//! # Responsibility
//! - Load, append to and prune the per-plan entry list, persisting the full
//!   updated list back under the plan's scope key on every mutation.
//!
//! # Invariants
//! - `add` validates before reading or writing; a rejection never mutates
//!   storage.
//! - A missing scope record reads as an empty list; a corrupt record is a
//!   surfaced error, not silently discarded data.

use crate::model::entry::{EntryId, TimedEntry};
use crate::storage::KvStorage;
use crate::store::{entries_key, StoreError, StoreResult, ValidationError};
use chrono::{Local, NaiveDateTime};
use log::{error, info};

/// Validates an entry at the admission boundary.
///
/// # Contract
/// - Title must contain non-whitespace characters.
/// - The combined start date-time must not be earlier than `now`.
/// - The end time must be after the start time.
pub fn validate_new_entry(entry: &TimedEntry, now: NaiveDateTime) -> Result<(), ValidationError> {
    if entry.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let start = entry.start_date_time();
    if start < now {
        return Err(ValidationError::StartInPast { start, now });
    }

    if entry.end_time <= entry.start_time {
        return Err(ValidationError::EndBeforeStart {
            start: entry.start_time,
            end: entry.end_time,
        });
    }

    Ok(())
}

/// Per-plan entry list store over the key-value port.
pub struct EntryStore<S: KvStorage> {
    storage: S,
}

impl<S: KvStorage> EntryStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the full entry list for one plan scope.
    ///
    /// A missing record is an empty list. An unparseable record surfaces as
    /// `StoreError::InvalidData` so the caller can show an inline message.
    pub fn load(&self, plan_id: &str) -> StoreResult<Vec<TimedEntry>> {
        let key = entries_key(plan_id);
        let Some(raw) = self.storage.get(&key)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|err| {
            error!("event=entries_load module=store status=error key={key} error={err}");
            StoreError::InvalidData(format!("entry list under `{key}` is not valid JSON: {err}"))
        })
    }

    /// Validates and appends one entry, overwriting the persisted list.
    pub fn add(&self, entry: &TimedEntry) -> StoreResult<()> {
        self.add_at(entry, Local::now().naive_local())
    }

    /// `add` with an explicit wall clock, for deterministic callers.
    pub fn add_at(&self, entry: &TimedEntry, now: NaiveDateTime) -> StoreResult<()> {
        if let Err(err) = validate_new_entry(entry, now) {
            info!(
                "event=entry_add module=store status=rejected plan={} reason={err}",
                entry.plan_id
            );
            return Err(err.into());
        }

        let mut entries = self.load(&entry.plan_id)?;
        entries.push(entry.clone());
        self.persist(&entry.plan_id, &entries)?;

        info!(
            "event=entry_add module=store status=ok plan={} entries={}",
            entry.plan_id,
            entries.len()
        );
        Ok(())
    }

    /// Removes one entry by id, overwriting the persisted list.
    pub fn remove(&self, plan_id: &str, id: EntryId) -> StoreResult<()> {
        let mut entries = self.load(plan_id)?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);

        if entries.len() == before {
            return Err(StoreError::NotFound(id));
        }

        self.persist(plan_id, &entries)?;
        info!(
            "event=entry_remove module=store status=ok plan={plan_id} entries={}",
            entries.len()
        );
        Ok(())
    }

    fn persist(&self, plan_id: &str, entries: &[TimedEntry]) -> StoreResult<()> {
        let key = entries_key(plan_id);
        let raw = serde_json::to_string(entries)
            .map_err(|err| StoreError::InvalidData(err.to_string()))?;
        self.storage.set(&key, &raw)?;
        Ok(())
    }
}
