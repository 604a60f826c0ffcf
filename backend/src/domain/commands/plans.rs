use shared::WeekSchedule;

/// Create a weekly plan. A missing schedule becomes an empty week.
#[derive(Debug, Clone)]
pub struct CreatePlanCommand {
    pub name: Option<String>,
    pub schedule: Option<WeekSchedule>,
}

/// Partial update of a plan; absent fields are retained.
#[derive(Debug, Clone)]
pub struct UpdatePlanCommand {
    pub plan_id: String,
    pub name: Option<String>,
    pub schedule: Option<WeekSchedule>,
}
