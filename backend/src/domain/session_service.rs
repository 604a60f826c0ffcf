//! Session service: validation, recording, and the merged session list.
//!
//! The list operation is where the plan meets reality: the dog's weekly
//! schedule is projected across the queried range and reconciled with
//! the recorded outcomes, recorded always winning per (date, training)
//! slot.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::commands::sessions::{
    CreateSessionCommand, SessionRangeQuery, UpdateSessionCommand,
};
use crate::domain::errors::DomainError;
use crate::domain::models::session::{RecordedSession, RecordedStatus, Session};
use crate::domain::schedule::{merge_sessions, project_sessions};
use crate::storage::csv::{CsvConnection, DogRepository, PlanRepository, SessionRepository};
use crate::storage::traits::{DogStorage, PlanStorage, SessionStorage};
use shared::Dog;

pub struct SessionService {
    session_repository: SessionRepository,
    dog_repository: DogRepository,
    plan_repository: PlanRepository,
}

impl SessionService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self {
            session_repository: SessionRepository::new((*connection).clone()),
            dog_repository: DogRepository::new((*connection).clone()),
            plan_repository: PlanRepository::new((*connection).clone()),
        }
    }

    fn require_dog(&self, dog_id: &str) -> Result<Dog, DomainError> {
        self.dog_repository
            .get_dog(dog_id)?
            .ok_or(DomainError::NotFound("Dog"))
    }

    /// Check the status/score coupling against an effective (post-patch)
    /// state and narrow the score into range.
    fn validate_score(status: RecordedStatus, score: Option<i64>) -> Result<Option<u8>, DomainError> {
        match (status, score) {
            (_, None) => Ok(None),
            (RecordedStatus::Skipped, Some(_)) => Err(DomainError::ScoreNotAllowed),
            (RecordedStatus::Completed, Some(s)) if (1..=10).contains(&s) => Ok(Some(s as u8)),
            (RecordedStatus::Completed, Some(s)) => Err(DomainError::ScoreOutOfRange(s)),
        }
    }

    pub fn create_session(&self, cmd: CreateSessionCommand) -> Result<RecordedSession, DomainError> {
        self.require_dog(&cmd.dog_id)?;

        let training_id = cmd
            .training_id
            .filter(|t| !t.is_empty())
            .ok_or(DomainError::MissingField("trainingId"))?;
        let date = cmd.date.ok_or(DomainError::MissingField("date"))?;
        let raw_status = cmd.status.ok_or(DomainError::MissingField("status"))?;
        let status = RecordedStatus::parse(&raw_status)
            .ok_or(DomainError::InvalidStatus(raw_status))?;
        let score = Self::validate_score(status, cmd.score)?;

        let session = RecordedSession {
            id: Uuid::new_v4().to_string(),
            dog_id: cmd.dog_id,
            training_id,
            plan_id: cmd.plan_id,
            date,
            status,
            score,
            notes: cmd.notes,
        };
        self.session_repository.store_session(&session)?;
        info!(
            "Recorded {} session {} for dog {} on {}",
            session.status.as_str(),
            session.id,
            session.dog_id,
            session.date
        );
        Ok(session)
    }

    pub fn get_session(&self, dog_id: &str, session_id: &str) -> Result<RecordedSession, DomainError> {
        self.require_dog(dog_id)?;
        self.session_repository
            .get_session(dog_id, session_id)?
            .ok_or(DomainError::NotFound("Session"))
    }

    /// Apply a partial patch. Validation runs against the patched state:
    /// the effective status is the patch's if given, else the stored
    /// one, and likewise for the score — so flipping a scored session to
    /// skipped is rejected unless the patch also clears the score.
    pub fn update_session(&self, cmd: UpdateSessionCommand) -> Result<RecordedSession, DomainError> {
        self.require_dog(&cmd.dog_id)?;
        let mut session = self
            .session_repository
            .get_session(&cmd.dog_id, &cmd.session_id)?
            .ok_or(DomainError::NotFound("Session"))?;

        let status = match cmd.status {
            Some(raw) => RecordedStatus::parse(&raw).ok_or(DomainError::InvalidStatus(raw))?,
            None => session.status,
        };
        let effective_score = match cmd.score {
            Some(patched) => patched,
            None => session.score.map(i64::from),
        };
        let score = Self::validate_score(status, effective_score)?;
        let notes = match cmd.notes {
            Some(patched) => patched,
            None => session.notes.take(),
        };

        session.status = status;
        session.score = score;
        session.notes = notes;
        self.session_repository.update_session(&session)?;
        info!("Updated session {} for dog {}", session.id, session.dog_id);
        Ok(session)
    }

    pub fn delete_session(&self, dog_id: &str, session_id: &str) -> Result<(), DomainError> {
        self.require_dog(dog_id)?;
        if !self.session_repository.delete_session(dog_id, session_id)? {
            return Err(DomainError::NotFound("Session"));
        }
        info!("Deleted session {} for dog {}", session_id, dog_id);
        Ok(())
    }

    /// Merged session view for a dog over an inclusive date range:
    /// everything the plan schedules, shadowed by everything recorded.
    pub fn list_sessions(&self, query: SessionRangeQuery) -> Result<Vec<Session>, DomainError> {
        let dog = self.require_dog(&query.dog_id)?;
        let from = query
            .from
            .ok_or_else(|| DomainError::InvalidRange("from is required".to_string()))?;
        let to = query
            .to
            .ok_or_else(|| DomainError::InvalidRange("to is required".to_string()))?;
        if from > to {
            return Err(DomainError::InvalidRange(format!(
                "from {from} is after to {to}"
            )));
        }

        let recorded = self.session_repository.list_sessions(&dog.id, from, to)?;

        let planned = match dog.plan_id.as_deref() {
            Some(plan_id) => match self.plan_repository.get_plan(plan_id)? {
                Some(plan) => project_sessions(&plan.schedule, &dog.id, plan_id, from, to),
                None => {
                    warn!("dog {} references missing plan {}, projecting nothing", dog.id, plan_id);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        info!(
            "Listing sessions for dog {} {}..{}: {} planned, {} recorded",
            dog.id,
            from,
            to,
            planned.len(),
            recorded.len()
        );
        Ok(merge_sessions(planned, recorded))
    }
}
