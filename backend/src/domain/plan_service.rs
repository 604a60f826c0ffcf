//! Plan service: CRUD over weekly plans.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::commands::plans::{CreatePlanCommand, UpdatePlanCommand};
use crate::domain::errors::DomainError;
use crate::storage::csv::{CsvConnection, PlanRepository};
use crate::storage::traits::PlanStorage;
use shared::Plan;

pub struct PlanService {
    plan_repository: PlanRepository,
}

impl PlanService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self {
            plan_repository: PlanRepository::new((*connection).clone()),
        }
    }

    pub fn create_plan(&self, cmd: CreatePlanCommand) -> Result<Plan, DomainError> {
        let name = cmd
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or(DomainError::MissingField("Name"))?;

        let plan = Plan {
            id: Uuid::new_v4().to_string(),
            name,
            schedule: cmd.schedule.unwrap_or_default(),
        };
        self.plan_repository.store_plan(&plan)?;
        info!("Created plan {} ({})", plan.name, plan.id);
        Ok(plan)
    }

    pub fn get_plan(&self, plan_id: &str) -> Result<Plan, DomainError> {
        self.plan_repository
            .get_plan(plan_id)?
            .ok_or(DomainError::NotFound("Plan"))
    }

    pub fn list_plans(&self) -> Result<Vec<Plan>, DomainError> {
        Ok(self.plan_repository.list_plans()?)
    }

    pub fn update_plan(&self, cmd: UpdatePlanCommand) -> Result<Plan, DomainError> {
        let mut plan = self.get_plan(&cmd.plan_id)?;
        if let Some(name) = cmd.name {
            plan.name = name;
        }
        if let Some(schedule) = cmd.schedule {
            plan.schedule = schedule;
        }
        self.plan_repository.update_plan(&plan)?;
        info!("Updated plan {}", plan.id);
        Ok(plan)
    }

    pub fn delete_plan(&self, plan_id: &str) -> Result<(), DomainError> {
        if !self.plan_repository.delete_plan(plan_id)? {
            return Err(DomainError::NotFound("Plan"));
        }
        info!("Deleted plan {}", plan_id);
        Ok(())
    }
}
