//! Calendar use-case service.
//!
//! # Responsibility
//! - Tie the entry/plan stores to the layout engine behind one facade the
//!   hosting page talks to.
//! - Own id generation for newly admitted entries.

use crate::layout::{layout_day, layout_month, layout_week, DayLayout, MonthLayout, WeekLayout};
use crate::model::entry::{ColorTag, EntryId, TimedEntry};
use crate::model::plan::Plan;
use crate::model::time_of_day::TimeOfDay;
use crate::storage::KvStorage;
use crate::store::{EntryStore, PlanStore, StoreResult};
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Request model for admitting a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntryRequest {
    pub plan_id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub color: ColorTag,
    pub sub_label: Option<String>,
}

/// Facade over storage, stores and the layout engine.
pub struct CalendarService<S: KvStorage> {
    storage: S,
}

impl<S: KvStorage> CalendarService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn entries(&self) -> EntryStore<&S> {
        EntryStore::new(&self.storage)
    }

    fn plans(&self) -> PlanStore<&S> {
        PlanStore::new(&self.storage)
    }

    /// Admits a new entry and returns its generated id.
    ///
    /// Validation failures reject the request and leave storage untouched.
    pub fn add_entry(&self, request: &NewEntryRequest) -> StoreResult<EntryId> {
        self.add_entry_at(request, Local::now().naive_local())
    }

    /// `add_entry` with an explicit wall clock, for deterministic callers.
    pub fn add_entry_at(
        &self,
        request: &NewEntryRequest,
        now: NaiveDateTime,
    ) -> StoreResult<EntryId> {
        let mut entry = TimedEntry::new(
            request.plan_id.clone(),
            request.title.clone(),
            request.date,
            request.start_time,
            request.end_time,
        );
        entry.color = request.color;
        entry.sub_label = request.sub_label.clone();

        self.entries().add_at(&entry, now)?;
        Ok(entry.id)
    }

    /// Deletes one entry from the plan scope; fired by the delete callback.
    pub fn delete_entry(&self, plan_id: &str, id: EntryId) -> StoreResult<()> {
        self.entries().remove(plan_id, id)
    }

    /// Loads the raw entry list for one plan scope.
    pub fn list_entries(&self, plan_id: &str) -> StoreResult<Vec<TimedEntry>> {
        self.entries().load(plan_id)
    }

    /// Laid-out Day view for the given date.
    pub fn day_view(
        &self,
        plan_id: &str,
        date: NaiveDate,
        now: NaiveDateTime,
    ) -> StoreResult<DayLayout> {
        let entries = self.entries().load(plan_id)?;
        Ok(layout_day(date, &entries, now))
    }

    /// Laid-out Week view for the week containing `date`.
    pub fn week_view(&self, plan_id: &str, date: NaiveDate) -> StoreResult<WeekLayout> {
        let entries = self.entries().load(plan_id)?;
        Ok(layout_week(date, &entries))
    }

    /// Laid-out Month view for the month containing `anchor`.
    pub fn month_view(&self, plan_id: &str, anchor: NaiveDate) -> StoreResult<MonthLayout> {
        let entries = self.entries().load(plan_id)?;
        Ok(layout_month(anchor, &entries))
    }

    /// Loads plan metadata; `Ok(None)` when the plan record is absent.
    pub fn load_plan(&self, plan_id: &str) -> StoreResult<Option<Plan>> {
        self.plans().load(plan_id)
    }

    /// Overwrites plan metadata.
    pub fn save_plan(&self, plan: &Plan) -> StoreResult<()> {
        self.plans().save(plan)
    }
}
