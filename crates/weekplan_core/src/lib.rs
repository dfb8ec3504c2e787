//! Core engine for the weekend-plan calendar: entry persistence over a
//! key-value port plus the Day/Week/Month layout engine.
//! This crate is the single source of truth for admission and layout rules.

pub mod db;
pub mod layout;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;
pub mod store;
pub mod ticker;

pub use layout::{
    layout_day, layout_month, layout_week, week_start, DayColumn, DayHeader, DayLayout,
    EventBlock, LabelMode, MonthCell, MonthItem, MonthLayout, WeekLayout,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{ColorTag, EntryId, TimedEntry};
pub use model::plan::{Plan, SubPlan};
pub use model::time_of_day::{TimeOfDay, TimeParseError};
pub use service::calendar_service::{CalendarService, NewEntryRequest};
pub use storage::{KvStorage, MemoryStorage, SqliteStorage, StorageError, StorageResult};
pub use store::{
    entries_key, plan_key, validate_new_entry, EntryStore, PlanStore, StoreError, StoreResult,
    ValidationError,
};
pub use ticker::{NowTicker, DEFAULT_REFRESH_INTERVAL};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
