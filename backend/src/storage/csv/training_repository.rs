//! # Training Repository
//!
//! One YAML record per training at `trainings/{training_id}.yaml`.
//! Procedure and tips are stored verbatim; YAML block scalars keep the
//! markdown readable on disk.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use shared::Training;
use tracing::warn;

use super::connection::{is_safe_id, write_atomic, CsvConnection};
use crate::storage::traits::TrainingStorage;

#[derive(Clone)]
pub struct TrainingRepository {
    connection: CsvConnection,
}

impl TrainingRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn training_file_path(&self, training_id: &str) -> PathBuf {
        self.connection
            .trainings_directory()
            .join(format!("{training_id}.yaml"))
    }

    fn write_training(&self, training: &Training) -> Result<()> {
        let contents =
            serde_yaml::to_string(training).context("failed to serialize training record")?;
        write_atomic(&self.training_file_path(&training.id), contents.as_bytes())
    }
}

impl TrainingStorage for TrainingRepository {
    fn store_training(&self, training: &Training) -> Result<()> {
        self.write_training(training)
    }

    fn get_training(&self, training_id: &str) -> Result<Option<Training>> {
        if !is_safe_id(training_id) {
            return Ok(None);
        }
        let path = self.training_file_path(training_id);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let training = serde_yaml::from_str(&contents)
            .with_context(|| format!("malformed training record {}", path.display()))?;
        Ok(Some(training))
    }

    fn list_trainings(&self) -> Result<Vec<Training>> {
        let mut trainings = Vec::new();
        for entry in fs::read_dir(self.connection.trainings_directory())? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            match serde_yaml::from_str::<Training>(&contents) {
                Ok(training) => trainings.push(training),
                Err(e) => warn!("skipping malformed training record {}: {}", path.display(), e),
            }
        }
        trainings.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(trainings)
    }

    fn update_training(&self, training: &Training) -> Result<()> {
        self.write_training(training)
    }

    fn delete_training(&self, training_id: &str) -> Result<bool> {
        if !is_safe_id(training_id) {
            return Ok(false);
        }
        let path = self.training_file_path(training_id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).with_context(|| format!("failed to remove {}", path.display()))?;
        Ok(true)
    }
}
