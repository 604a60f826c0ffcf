//! Training service: CRUD over reusable exercises and their images.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::commands::trainings::{
    AddTrainingImageCommand, CreateTrainingCommand, UpdateTrainingCommand,
};
use crate::domain::errors::DomainError;
use crate::storage::csv::{CsvConnection, ImageRepository, TrainingRepository};
use crate::storage::traits::{ImageStorage, TrainingStorage};
use shared::{Training, TrainingImage};

pub struct TrainingService {
    training_repository: TrainingRepository,
    image_repository: ImageRepository,
}

impl TrainingService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self {
            training_repository: TrainingRepository::new((*connection).clone()),
            image_repository: ImageRepository::new((*connection).clone()),
        }
    }

    pub fn create_training(&self, cmd: CreateTrainingCommand) -> Result<Training, DomainError> {
        let name = cmd
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or(DomainError::MissingField("Name"))?;

        let training = Training {
            id: Uuid::new_v4().to_string(),
            name,
            procedure: cmd.procedure.unwrap_or_default(),
            tips: cmd.tips.unwrap_or_default(),
        };
        self.training_repository.store_training(&training)?;
        info!("Created training {} ({})", training.name, training.id);
        Ok(training)
    }

    pub fn get_training(&self, training_id: &str) -> Result<Training, DomainError> {
        self.training_repository
            .get_training(training_id)?
            .ok_or(DomainError::NotFound("Training"))
    }

    pub fn list_trainings(&self) -> Result<Vec<Training>, DomainError> {
        Ok(self.training_repository.list_trainings()?)
    }

    pub fn update_training(&self, cmd: UpdateTrainingCommand) -> Result<Training, DomainError> {
        let mut training = self.get_training(&cmd.training_id)?;
        if let Some(name) = cmd.name {
            training.name = name;
        }
        if let Some(procedure) = cmd.procedure {
            training.procedure = procedure;
        }
        if let Some(tips) = cmd.tips {
            training.tips = tips;
        }
        self.training_repository.update_training(&training)?;
        info!("Updated training {}", training.id);
        Ok(training)
    }

    pub fn delete_training(&self, training_id: &str) -> Result<(), DomainError> {
        if !self.training_repository.delete_training(training_id)? {
            return Err(DomainError::NotFound("Training"));
        }
        info!("Deleted training {}", training_id);
        Ok(())
    }

    /// Store an illustration image for an existing training.
    pub fn add_image(&self, cmd: AddTrainingImageCommand) -> Result<TrainingImage, DomainError> {
        self.get_training(&cmd.training_id)?;
        let image = cmd.image.ok_or(DomainError::MissingField("Image"))?;
        let stored =
            self.image_repository
                .store_training_image(&cmd.training_id, &image.filename, &image.bytes)?;
        info!("Stored image {} for training {}", stored.filename, cmd.training_id);
        Ok(stored)
    }
}
