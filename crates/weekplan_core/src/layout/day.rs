//! Day view layout.
//!
//! # Responsibility
//! - Lay out one calendar day as absolutely positioned blocks plus an
//!   optional "now" indicator when the displayed day is today.
//!
//! # Invariants
//! - Pure function of `(date, entries, now)`; rendering twice yields
//!   identical output.
//! - Blocks within the day are ordered by start time.

use crate::layout::grid::{
    block_height, now_indicator_offset, top_offset, CONDENSED_HEIGHT_THRESHOLD, DAY_TOP_PADDING,
};
use crate::layout::{EventBlock, LabelMode};
use crate::model::entry::TimedEntry;
use chrono::{NaiveDate, NaiveDateTime};

/// Laid-out day column.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub blocks: Vec<EventBlock>,
    /// Pixel offset of the "now" line; present only when `date` is today.
    pub now_marker: Option<f64>,
}

/// Lays out the entries of one calendar day.
///
/// Entries on other dates are filtered out. Overlapping entries keep their
/// independent absolute positions; later blocks simply stack on top.
pub fn layout_day(date: NaiveDate, entries: &[TimedEntry], now: NaiveDateTime) -> DayLayout {
    let mut day_entries: Vec<&TimedEntry> =
        entries.iter().filter(|entry| entry.date == date).collect();
    day_entries.sort_by_key(|entry| entry.start_time);

    let blocks = day_entries.into_iter().map(day_block).collect();
    let now_marker = (date == now.date()).then(|| now_indicator_offset(now.time()));

    DayLayout {
        date,
        blocks,
        now_marker,
    }
}

fn day_block(entry: &TimedEntry) -> EventBlock {
    let start_hours = entry.start_time.continuous_hours();
    let end_hours = entry.end_time.continuous_hours();
    let height = block_height(start_hours, end_hours);
    let label = if height <= CONDENSED_HEIGHT_THRESHOLD {
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
        top: top_offset(start_hours) + DAY_TOP_PADDING,
        height,
        label,
    }
}
