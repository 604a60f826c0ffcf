//! # Plan Repository
//!
//! One YAML record per weekly plan at `plans/{plan_id}.yaml`. The
//! schedule serializes with all seven weekday keys, mirroring the wire
//! shape.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use shared::Plan;
use tracing::warn;

use super::connection::{is_safe_id, write_atomic, CsvConnection};
use crate::storage::traits::PlanStorage;

#[derive(Clone)]
pub struct PlanRepository {
    connection: CsvConnection,
}

impl PlanRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn plan_file_path(&self, plan_id: &str) -> PathBuf {
        self.connection.plans_directory().join(format!("{plan_id}.yaml"))
    }

    fn write_plan(&self, plan: &Plan) -> Result<()> {
        let contents = serde_yaml::to_string(plan).context("failed to serialize plan record")?;
        write_atomic(&self.plan_file_path(&plan.id), contents.as_bytes())
    }
}

impl PlanStorage for PlanRepository {
    fn store_plan(&self, plan: &Plan) -> Result<()> {
        self.write_plan(plan)
    }

    fn get_plan(&self, plan_id: &str) -> Result<Option<Plan>> {
        if !is_safe_id(plan_id) {
            return Ok(None);
        }
        let path = self.plan_file_path(plan_id);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let plan = serde_yaml::from_str(&contents)
            .with_context(|| format!("malformed plan record {}", path.display()))?;
        Ok(Some(plan))
    }

    fn list_plans(&self) -> Result<Vec<Plan>> {
        let mut plans = Vec::new();
        for entry in fs::read_dir(self.connection.plans_directory())? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            match serde_yaml::from_str::<Plan>(&contents) {
                Ok(plan) => plans.push(plan),
                Err(e) => warn!("skipping malformed plan record {}: {}", path.display(), e),
            }
        }
        plans.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(plans)
    }

    fn update_plan(&self, plan: &Plan) -> Result<()> {
        self.write_plan(plan)
    }

    fn delete_plan(&self, plan_id: &str) -> Result<bool> {
        if !is_safe_id(plan_id) {
            return Ok(false);
        }
        let path = self.plan_file_path(plan_id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).with_context(|| format!("failed to remove {}", path.display()))?;
        Ok(true)
    }
}
