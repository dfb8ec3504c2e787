//! Calendar layout engine.
//!
//! # Responsibility
//! - Convert a flat list of timed entries into pixel-positioned block data
//!   for Day, Week and Month views.
//! - Keep layout a pure function of its inputs: no clock reads, no storage.
//!
//! # Invariants
//! - Block heights are never below the 32 px floor, even for inverted
//!   ranges persisted by older versions.
//! - Overlapping entries keep independent absolute positions; the engine
//!   performs no lane packing.

use crate::model::entry::{ColorTag, EntryId};
use crate::model::time_of_day::TimeOfDay;

pub mod day;
pub mod grid;
pub mod month;
pub mod week;

pub use day::{layout_day, DayLayout};
pub use month::{layout_month, MonthCell, MonthItem, MonthLayout};
pub use week::{layout_week, week_start, DayColumn, DayHeader, WeekLayout};

/// How a block renders its text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// Two lines: title plus the time range.
    Full,
    /// Single line, title only; used for blocks too short for two lines.
    Condensed,
}

/// One pixel-positioned visual block in a day or week column.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBlock {
    pub id: EntryId,
    pub title: String,
    pub sub_label: Option<String>,
    pub color: ColorTag,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    /// Offset from the top of the column, in pixels.
    pub top: f64,
    /// Block height in pixels, already clamped to the minimum.
    pub height: f64,
    pub label: LabelMode,
}
