//! Domain model for a training session.
//!
//! A session is either projected from the dog's weekly plan (`Planned`,
//! computed on read and never stored) or recorded by the user
//! (`Recorded`, persisted with a stable id). Modelling the two as a sum
//! type keeps "planned sessions have no id, no score, no notes" out of
//! the realm of nullable-field conventions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{Session as SessionDto, SessionStatus};

/// Outcome of a recorded session. Projected sessions are always
/// `planned` on the wire and have no recorded status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordedStatus {
    Completed,
    Skipped,
}

impl RecordedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Skipped => "skipped",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "completed" => Some(Self::Completed),
            "skipped" => Some(Self::Skipped),
            _ => None,
        }
    }
}

/// A session the plan says should happen: one per (date, schedule slot).
/// Born during a single query's projection and gone by the next; its only
/// identity is the (dog, training, date) tuple used for merging.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSession {
    pub dog_id: String,
    pub training_id: String,
    pub plan_id: String,
    pub date: NaiveDate,
}

/// A persisted session outcome, created and edited by the user. Keeps
/// the plan id that was active at creation time even if the dog's plan
/// later changes.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSession {
    pub id: String,
    pub dog_id: String,
    pub training_id: String,
    pub plan_id: Option<String>,
    pub date: NaiveDate,
    pub status: RecordedStatus,
    pub score: Option<u8>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Planned(PlannedSession),
    Recorded(RecordedSession),
}

impl Session {
    pub fn date(&self) -> NaiveDate {
        match self {
            Session::Planned(s) => s.date,
            Session::Recorded(s) => s.date,
        }
    }

    pub fn training_id(&self) -> &str {
        match self {
            Session::Planned(s) => &s.training_id,
            Session::Recorded(s) => &s.training_id,
        }
    }
}

impl From<PlannedSession> for SessionDto {
    fn from(session: PlannedSession) -> Self {
        SessionDto {
            id: None,
            dog_id: session.dog_id,
            training_id: session.training_id,
            plan_id: Some(session.plan_id),
            date: session.date,
            status: SessionStatus::Planned,
            score: None,
            notes: None,
        }
    }
}

impl From<RecordedSession> for SessionDto {
    fn from(session: RecordedSession) -> Self {
        SessionDto {
            id: Some(session.id),
            dog_id: session.dog_id,
            training_id: session.training_id,
            plan_id: session.plan_id,
            date: session.date,
            status: match session.status {
                RecordedStatus::Completed => SessionStatus::Completed,
                RecordedStatus::Skipped => SessionStatus::Skipped,
            },
            score: session.score,
            notes: session.notes,
        }
    }
}

impl From<Session> for SessionDto {
    fn from(session: Session) -> Self {
        match session {
            Session::Planned(s) => s.into(),
            Session::Recorded(s) => s.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        assert_eq!(RecordedStatus::parse("completed"), Some(RecordedStatus::Completed));
        assert_eq!(RecordedStatus::parse("skipped"), Some(RecordedStatus::Skipped));
        assert_eq!(RecordedStatus::parse("planned"), None);
        assert_eq!(RecordedStatus::parse("invalid"), None);
        assert_eq!(RecordedStatus::Completed.as_str(), "completed");
    }

    #[test]
    fn planned_session_maps_to_dto_without_id() {
        let planned = PlannedSession {
            dog_id: "d1".to_string(),
            training_id: "t1".to_string(),
            plan_id: "p1".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 9).unwrap(),
        };
        let dto = SessionDto::from(planned);
        assert_eq!(dto.id, None);
        assert_eq!(dto.status, SessionStatus::Planned);
        assert_eq!(dto.plan_id.as_deref(), Some("p1"));
        assert_eq!(dto.score, None);
    }
}
