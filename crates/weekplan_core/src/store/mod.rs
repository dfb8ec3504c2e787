//! Store layer: persistence of entries and plan metadata over the
//! key-value port.
//!
//! # Responsibility
//! - Own scope-key construction and the whole-list overwrite discipline.
//! - Enforce admission validation before any write.
//!
//! # Invariants
//! - A rejected add leaves the persisted list untouched.
//! - Concurrent writers to one scope key race last-writer-wins; accepted
//!   under the single-user assumption.

use crate::model::entry::EntryId;
use crate::model::time_of_day::TimeOfDay;
use crate::storage::StorageError;
use chrono::NaiveDateTime;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod entry_store;
mod plan_store;

pub use entry_store::{validate_new_entry, EntryStore};
pub use plan_store::PlanStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Scope key holding one plan's entry list.
pub fn entries_key(plan_id: &str) -> String {
    format!("entries_{plan_id}")
}

/// Scope key holding one plan's metadata record.
pub fn plan_key(plan_id: &str) -> String {
    format!("plan_{plan_id}")
}

/// Admission failure for a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    StartInPast {
        start: NaiveDateTime,
        now: NaiveDateTime,
    },
    EndBeforeStart {
        start: TimeOfDay,
        end: TimeOfDay,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "entry title must not be empty"),
            Self::StartInPast { start, now } => {
                write!(f, "entry start {start} is earlier than current time {now}")
            }
            Self::EndBeforeStart { start, end } => {
                write!(f, "entry end {end} is not after start {start}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Store-level error for entry and plan persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    Storage(StorageError),
    NotFound(EntryId),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "entry not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}
