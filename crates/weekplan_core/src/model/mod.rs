//! Domain model for plans and their scheduled entries.
//!
//! # Responsibility
//! - Define the canonical data structures used by the layout engine and store.
//! - Keep one explicit time-of-day representation for every boundary.
//!
//! # Invariants
//! - Every entry is identified by a stable `EntryId`.
//! - Entry times never span midnight; both endpoints belong to one day.

pub mod entry;
pub mod plan;
pub mod time_of_day;
