//! # Session Repository
//!
//! Per-dog CSV storage for recorded sessions, one file per dog at
//! `dogs/{dog_id}/sessions.csv`. Keeping each dog's sessions in its own
//! file makes dog ownership structural: a lookup can only ever see the
//! rows of the dog it was asked about.
//!
//! ## CSV Format
//!
//! ```csv
//! id,dog_id,training_id,plan_id,date,status,score,notes
//! 6f9b…,d0c4…,sit-basic,plan-1,2026-02-09,completed,9,"Great focus"
//! 7a21…,d0c4…,stay,,2026-02-10,skipped,,
//! ```
//!
//! Optional columns (`plan_id`, `score`, `notes`) are empty strings on
//! disk; dates are `YYYY-MM-DD` so lexicographic order is date order.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::connection::{is_safe_id, write_atomic, CsvConnection};
use crate::domain::models::session::{RecordedSession, RecordedStatus};
use crate::storage::traits::SessionStorage;

/// CSV row for a recorded session. Stringly typed; conversion to the
/// domain model validates status, date, and score.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionRecord {
    id: String,
    dog_id: String,
    training_id: String,
    plan_id: String,
    date: String,
    status: String,
    score: String,
    notes: String,
}

impl From<&RecordedSession> for SessionRecord {
    fn from(session: &RecordedSession) -> Self {
        SessionRecord {
            id: session.id.clone(),
            dog_id: session.dog_id.clone(),
            training_id: session.training_id.clone(),
            plan_id: session.plan_id.clone().unwrap_or_default(),
            date: session.date.format("%Y-%m-%d").to_string(),
            status: session.status.as_str().to_string(),
            score: session.score.map(|s| s.to_string()).unwrap_or_default(),
            notes: session.notes.clone().unwrap_or_default(),
        }
    }
}

impl TryFrom<SessionRecord> for RecordedSession {
    type Error = anyhow::Error;

    fn try_from(record: SessionRecord) -> Result<Self> {
        let status = RecordedStatus::parse(&record.status)
            .ok_or_else(|| anyhow!("invalid session status in store: {}", record.status))?;
        let date: NaiveDate = record
            .date
            .parse()
            .with_context(|| format!("invalid session date in store: {}", record.date))?;
        let score = if record.score.is_empty() {
            None
        } else {
            Some(
                record
                    .score
                    .parse::<u8>()
                    .with_context(|| format!("invalid session score in store: {}", record.score))?,
            )
        };
        Ok(RecordedSession {
            id: record.id,
            dog_id: record.dog_id,
            training_id: record.training_id,
            plan_id: (!record.plan_id.is_empty()).then_some(record.plan_id),
            date,
            status,
            score,
            notes: (!record.notes.is_empty()).then_some(record.notes),
        })
    }
}

/// CSV-backed session repository with per-dog files.
#[derive(Clone)]
pub struct SessionRepository {
    connection: CsvConnection,
}

impl SessionRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn sessions_file_path(&self, dog_id: &str) -> PathBuf {
        self.connection.dog_directory(dog_id).join("sessions.csv")
    }

    fn read_all(&self, dog_id: &str) -> Result<Vec<RecordedSession>> {
        if !is_safe_id(dog_id) {
            return Ok(Vec::new());
        }
        let path = self.sessions_file_path(dog_id);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        let mut reader = csv::Reader::from_reader(BufReader::new(file));
        let mut sessions = Vec::new();
        for record in reader.deserialize::<SessionRecord>() {
            let record = record.with_context(|| format!("malformed row in {}", path.display()))?;
            sessions.push(RecordedSession::try_from(record)?);
        }
        Ok(sessions)
    }

    fn write_all(&self, dog_id: &str, sessions: &[RecordedSession]) -> Result<()> {
        let directory = self.connection.dog_directory(dog_id);
        fs::create_dir_all(&directory)
            .with_context(|| format!("failed to create {}", directory.display()))?;
        let mut writer = csv::Writer::from_writer(Vec::new());
        for session in sessions {
            writer.serialize(SessionRecord::from(session))?;
        }
        let contents = writer.into_inner().context("failed to flush session rows")?;
        write_atomic(&self.sessions_file_path(dog_id), &contents)
    }
}

impl SessionStorage for SessionRepository {
    fn store_session(&self, session: &RecordedSession) -> Result<()> {
        let mut sessions = self.read_all(&session.dog_id)?;
        sessions.push(session.clone());
        self.write_all(&session.dog_id, &sessions)
    }

    fn get_session(&self, dog_id: &str, session_id: &str) -> Result<Option<RecordedSession>> {
        let sessions = self.read_all(dog_id)?;
        Ok(sessions.into_iter().find(|s| s.id == session_id))
    }

    fn update_session(&self, session: &RecordedSession) -> Result<()> {
        let mut sessions = self.read_all(&session.dog_id)?;
        let slot = sessions
            .iter_mut()
            .find(|s| s.id == session.id)
            .ok_or_else(|| anyhow!("session {} not found for update", session.id))?;
        *slot = session.clone();
        self.write_all(&session.dog_id, &sessions)
    }

    fn delete_session(&self, dog_id: &str, session_id: &str) -> Result<bool> {
        let mut sessions = self.read_all(dog_id)?;
        let before = sessions.len();
        sessions.retain(|s| s.id != session_id);
        if sessions.len() == before {
            return Ok(false);
        }
        self.write_all(dog_id, &sessions)?;
        Ok(true)
    }

    fn list_sessions(&self, dog_id: &str, from: NaiveDate, to: NaiveDate) -> Result<Vec<RecordedSession>> {
        let mut sessions: Vec<RecordedSession> = self
            .read_all(dog_id)?
            .into_iter()
            .filter(|s| s.date >= from && s.date <= to)
            .collect();
        sessions.sort_by_key(|s| s.date);
        Ok(sessions)
    }
}
