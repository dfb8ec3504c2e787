//! Week view layout.
//!
//! # Responsibility
//! - Lay out the 7 Monday-started calendar days around a focus date as
//!   parallel columns on the shared 64 px/hour grid.
//!
//! # Invariants
//! - Always exactly 7 columns, Monday first.
//! - Week columns carry no top padding; the header row is separate.

use crate::layout::grid::{block_height, top_offset, CONDENSED_DURATION_HOURS};
use crate::layout::{EventBlock, LabelMode};
use crate::model::entry::TimedEntry;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Column header: abbreviated weekday name plus day-of-month number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHeader {
    pub weekday: &'static str,
    pub day: u32,
}

/// One day column of the week grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub header: DayHeader,
    pub blocks: Vec<EventBlock>,
}

/// Laid-out week of 7 columns.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub start: NaiveDate,
    pub days: Vec<DayColumn>,
}

/// The Monday on or before the given date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Lays out the week containing `date`.
pub fn layout_week(date: NaiveDate, entries: &[TimedEntry]) -> WeekLayout {
    let start = week_start(date);
    let days = (0..7)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .map(|day| layout_column(day, entries))
        .collect();

    WeekLayout { start, days }
}

fn layout_column(date: NaiveDate, entries: &[TimedEntry]) -> DayColumn {
    let mut day_entries: Vec<&TimedEntry> =
        entries.iter().filter(|entry| entry.date == date).collect();
    day_entries.sort_by_key(|entry| entry.start_time);

    let blocks = day_entries.into_iter().map(week_block).collect();

    DayColumn {
        date,
        header: DayHeader {
            weekday: weekday_abbrev(date.weekday()),
            day: date.day(),
        },
        blocks,
    }
}

fn week_block(entry: &TimedEntry) -> EventBlock {
    let start_hours = entry.start_time.continuous_hours();
    let end_hours = entry.end_time.continuous_hours();
    let duration = end_hours - start_hours;
    let label = if duration < CONDENSED_DURATION_HOURS {
        LabelMode::Condensed
    } else {
        LabelMode::Full
    };

    EventBlock {
        id: entry.id,
        title: entry.title.clone(),
        sub_label: entry.sub_label.clone(),
        color: entry.color,
        start: entry.start_time,
        end: entry.end_time,
        top: top_offset(start_hours),
        height: block_height(start_hours, end_hours),
        label,
    }
}

fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
        Weekday::Sun => "SUN",
    }
}
