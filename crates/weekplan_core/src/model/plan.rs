//! Plan metadata model.
//!
//! # Responsibility
//! - Define the plan record persisted alongside (but separate from) the
//!   entry list: title, date range, visibility flag and nested sub-plans.
//!
//! # Invariants
//! - `id` is the opaque key every scope key for this plan derives from.
//! - The store round-trips this record verbatim; no business rules live here.

use crate::model::entry::flexible_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named collection of entries spanning a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub title: String,
    #[serde(default, with = "optional_flexible_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "optional_flexible_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub sub_plans: Vec<SubPlan>,
}

impl Plan {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_date: None,
            end_date: None,
            is_public: false,
            sub_plans: Vec::new(),
        }
    }
}

/// Nested sub-activity grouping inside a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubPlan {
    pub id: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub friends: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// `Option<NaiveDate>` wrapper over the tolerant date format.
mod optional_flexible_date {
    use super::flexible_date;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(value) => flexible_date::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "flexible_date")] NaiveDate);

        let wrapped: Option<Wrapper> = Option::deserialize(deserializer)?;
        Ok(wrapped.map(|value| value.0))
    }
}
