use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize};

/// A registered dog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
    pub id: String,
    pub name: String,
    /// Public URL path of the uploaded photo
    pub picture: String,
    /// Currently assigned weekly plan, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
}

/// A reusable training exercise. `procedure` and `tips` are markdown,
/// passed through verbatim for the frontend to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    pub id: String,
    pub name: String,
    pub procedure: String,
    pub tips: String,
}

/// A weekly training plan: each weekday maps to an ordered list of
/// training ids. All seven days are always present; a training id may
/// repeat within a day, and every occurrence counts as its own slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
    #[serde(default)]
    pub monday: Vec<String>,
    #[serde(default)]
    pub tuesday: Vec<String>,
    #[serde(default)]
    pub wednesday: Vec<String>,
    #[serde(default)]
    pub thursday: Vec<String>,
    #[serde(default)]
    pub friday: Vec<String>,
    #[serde(default)]
    pub saturday: Vec<String>,
    #[serde(default)]
    pub sunday: Vec<String>,
}

impl WeekSchedule {
    /// The ordered training slots for a given weekday.
    pub fn for_weekday(&self, weekday: Weekday) -> &[String] {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    /// Total number of slots across the week.
    pub fn total_slots(&self) -> usize {
        self.monday.len()
            + self.tuesday.len()
            + self.wednesday.len()
            + self.thursday.len()
            + self.friday.len()
            + self.saturday.len()
            + self.sunday.len()
    }
}

/// A weekly plan composed of training slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub schedule: WeekSchedule,
}

/// Session status on the wire. `Planned` only ever appears on computed
/// (virtual) sessions; persisted records are `Completed` or `Skipped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Planned,
    Completed,
    Skipped,
}

/// A training session for a dog on a date, either projected from the
/// dog's plan (no `id`) or recorded by the user (stable `id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub dog_id: String,
    pub training_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    /// Calendar date (YYYY-MM-DD)
    pub date: NaiveDate,
    pub status: SessionStatus,
    /// 1-10, only on completed sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request to create a training. Fields are optional so the backend can
/// report which required field is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrainingRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub procedure: Option<String>,
    #[serde(default)]
    pub tips: Option<String>,
}

/// Partial update of a training; absent fields are retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrainingRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub procedure: Option<String>,
    #[serde(default)]
    pub tips: Option<String>,
}

/// Response after uploading a training image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingImage {
    pub filename: String,
    pub url: String,
}

/// Request to create a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub schedule: Option<WeekSchedule>,
}

/// Partial update of a plan; absent fields are retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub schedule: Option<WeekSchedule>,
}

/// Request to assign a plan to a dog. The plan id is stored as an
/// opaque reference and is not validated against existing plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignPlanRequest {
    pub plan_id: String,
}

/// Request to record a session outcome. `status` is a raw string so the
/// backend can reject anything outside completed/skipped with a typed
/// error instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub training_id: Option<String>,
    #[serde(default)]
    pub plan_id: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update of a recorded session. `score` and `notes` distinguish
/// "absent" (retain the stored value) from an explicit `null` (clear it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub score: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

/// Deserialize a field that may be absent (outer `None`), explicitly
/// `null` (`Some(None)`), or set (`Some(Some(v))`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_schedule_serializes_all_seven_days() {
        let schedule = WeekSchedule {
            monday: vec!["t1".to_string(), "t2".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(&schedule).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 7);
        assert_eq!(json["monday"], serde_json::json!(["t1", "t2"]));
        assert_eq!(json["sunday"], serde_json::json!([]));
    }

    #[test]
    fn week_schedule_accepts_partial_input() {
        let schedule: WeekSchedule =
            serde_json::from_str(r#"{"monday": ["t1"], "tuesday": []}"#).unwrap();
        assert_eq!(schedule.monday, vec!["t1".to_string()]);
        assert!(schedule.wednesday.is_empty());
        assert!(schedule.sunday.is_empty());
    }

    #[test]
    fn virtual_session_omits_id_score_and_notes() {
        let session = Session {
            id: None,
            dog_id: "d1".to_string(),
            training_id: "t1".to_string(),
            plan_id: Some("p1".to_string()),
            date: NaiveDate::from_ymd_opt(2026, 2, 9).unwrap(),
            status: SessionStatus::Planned,
            score: None,
            notes: None,
        };
        let json = serde_json::to_value(&session).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("score"));
        assert!(!object.contains_key("notes"));
        assert_eq!(json["status"], "planned");
        assert_eq!(json["date"], "2026-02-09");
        assert_eq!(json["trainingId"], "t1");
    }

    #[test]
    fn recorded_session_serializes_camel_case() {
        let session = Session {
            id: Some("s1".to_string()),
            dog_id: "d1".to_string(),
            training_id: "t1".to_string(),
            plan_id: None,
            date: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            status: SessionStatus::Completed,
            score: Some(8),
            notes: Some("Good boy".to_string()),
        };
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["id"], "s1");
        assert_eq!(json["dogId"], "d1");
        assert_eq!(json["status"], "completed");
        assert_eq!(json["score"], 8);
    }

    #[test]
    fn update_request_distinguishes_absent_from_null() {
        let absent: UpdateSessionRequest = serde_json::from_str(r#"{"status": "skipped"}"#).unwrap();
        assert_eq!(absent.score, None);

        let cleared: UpdateSessionRequest =
            serde_json::from_str(r#"{"status": "skipped", "score": null}"#).unwrap();
        assert_eq!(cleared.score, Some(None));

        let set: UpdateSessionRequest = serde_json::from_str(r#"{"score": 7}"#).unwrap();
        assert_eq!(set.score, Some(Some(7)));
    }
}
