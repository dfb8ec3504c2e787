//! Scheduled entry domain model.
//!
//! # Responsibility
//! - Define the canonical record for a single timed activity inside a plan.
//! - Keep the persisted JSON shape stable, including tolerant date parsing
//!   for records written by earlier versions.
//!
//! # Invariants
//! - `id` is stable and unique within the owning plan scope.
//! - `start_time`/`end_time` are valid times within one calendar day.
//! - Entries are immutable after admission; the lifecycle is add/delete only.

use crate::model::time_of_day::TimeOfDay;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a scheduled entry.
pub type EntryId = Uuid;

/// Enumerated visual palette for entry blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    #[default]
    Blue,
    Green,
    Red,
    Yellow,
}

/// A single scheduled activity belonging to a plan.
///
/// An inverted range (`end_time <= start_time`) is rejected at the admission
/// boundary, but the layout engine still clamps rather than panics when it
/// encounters one in previously persisted data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedEntry {
    pub id: EntryId,
    pub title: String,
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub color: ColorTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_label: Option<String>,
    /// Opaque key of the owning plan, supplied by the hosting page.
    pub plan_id: String,
}

impl TimedEntry {
    /// Creates an entry with a generated stable ID and default color.
    pub fn new(
        plan_id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            date,
            start_time,
            end_time,
            color: ColorTag::default(),
            sub_label: None,
            plan_id: plan_id.into(),
        }
    }

    /// Combined calendar date and start time, used for the not-in-the-past
    /// admission check.
    pub fn start_date_time(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time.to_naive_time())
    }
}

/// Tolerant date (de)serialization.
///
/// Historic records stored the full ISO datetime string of a `Date` object;
/// current records store plain `YYYY-MM-DD`. Reads accept both, writes emit
/// the plain form.
pub(crate) mod flexible_date {
    use chrono::NaiveDate;
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let day_part = raw.split('T').next().unwrap_or(raw.as_str());
        NaiveDate::parse_from_str(day_part, "%Y-%m-%d").map_err(|err| {
            D::Error::custom(format!("invalid date value `{raw}`: {err}"))
        })
    }
}
