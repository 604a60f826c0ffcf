//! # DogTrainr Backend
//!
//! Backend for the dog-training tracker: register dogs, define reusable
//! trainings, compose them into weekly plans, and record session
//! outcomes. The session list endpoint projects a dog's assigned plan
//! across a date range and merges it with what was actually recorded;
//! everything else is record storage behind the REST API.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

pub mod domain;
pub mod rest;
pub mod storage;

pub use storage::csv::CsvConnection;

/// Main backend struct that wires every service onto one storage
/// connection.
pub struct Backend {
    pub dog_service: domain::DogService,
    pub training_service: domain::TrainingService,
    pub plan_service: domain::PlanService,
    pub session_service: domain::SessionService,
    connection: Arc<CsvConnection>,
}

impl Backend {
    /// Create a backend instance rooted in the given data directory.
    pub fn new(data_directory: impl AsRef<Path>) -> Result<Self> {
        let connection = Arc::new(CsvConnection::new(data_directory)?);

        Ok(Backend {
            dog_service: domain::DogService::new(connection.clone()),
            training_service: domain::TrainingService::new(connection.clone()),
            plan_service: domain::PlanService::new(connection.clone()),
            session_service: domain::SessionService::new(connection.clone()),
            connection,
        })
    }

    /// Directory holding uploaded images, served statically by the REST
    /// layer.
    pub fn uploads_directory(&self) -> PathBuf {
        self.connection.uploads_directory()
    }
}
