use chrono::NaiveDate;

/// Create a recorded session for a dog. Required fields arrive as
/// `Option` so the validator can name the missing one.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub dog_id: String,
    pub training_id: Option<String>,
    pub plan_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
    pub score: Option<i64>,
    pub notes: Option<String>,
}

/// Partial update of a recorded session. For `score` and `notes` the
/// outer `Option` is "was the field present in the patch", the inner one
/// the new value (explicit null clears).
#[derive(Debug, Clone)]
pub struct UpdateSessionCommand {
    pub dog_id: String,
    pub session_id: String,
    pub status: Option<String>,
    pub score: Option<Option<i64>>,
    pub notes: Option<Option<String>>,
}

/// Date-range query for a dog's merged session list.
#[derive(Debug, Clone)]
pub struct SessionRangeQuery {
    pub dog_id: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
