//! Plan metadata persistence.
//!
//! # Responsibility
//! - Round-trip the plan record under its own scope key, separate from the
//!   entry list.

use crate::model::plan::Plan;
use crate::storage::KvStorage;
use crate::store::{plan_key, StoreError, StoreResult};
use log::{error, info};

/// Plan metadata store over the key-value port.
pub struct PlanStore<S: KvStorage> {
    storage: S,
}

impl<S: KvStorage> PlanStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Loads plan metadata; `Ok(None)` when the plan record does not exist.
    pub fn load(&self, plan_id: &str) -> StoreResult<Option<Plan>> {
        let key = plan_key(plan_id);
        let Some(raw) = self.storage.get(&key)? else {
            return Ok(None);
        };

        let plan = serde_json::from_str(&raw).map_err(|err| {
            error!("event=plan_load module=store status=error key={key} error={err}");
            StoreError::InvalidData(format!("plan record under `{key}` is not valid JSON: {err}"))
        })?;
        Ok(Some(plan))
    }

    /// Overwrites the plan record.
    pub fn save(&self, plan: &Plan) -> StoreResult<()> {
        let key = plan_key(&plan.id);
        let raw =
            serde_json::to_string(plan).map_err(|err| StoreError::InvalidData(err.to_string()))?;
        self.storage.set(&key, &raw)?;
        info!("event=plan_save module=store status=ok plan={}", plan.id);
        Ok(())
    }
}
