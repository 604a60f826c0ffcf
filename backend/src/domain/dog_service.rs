//! Dog service: registration, lookup, and plan assignment.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::commands::dogs::{AssignPlanCommand, CreateDogCommand};
use crate::domain::errors::DomainError;
use crate::storage::csv::{CsvConnection, DogRepository, ImageRepository};
use crate::storage::traits::{DogStorage, ImageStorage};
use shared::Dog;

pub struct DogService {
    dog_repository: DogRepository,
    image_repository: ImageRepository,
}

impl DogService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self {
            dog_repository: DogRepository::new((*connection).clone()),
            image_repository: ImageRepository::new((*connection).clone()),
        }
    }

    pub fn create_dog(&self, cmd: CreateDogCommand) -> Result<Dog, DomainError> {
        let name = cmd
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or(DomainError::MissingField("Name"))?;
        let picture = cmd.picture.ok_or(DomainError::MissingField("Picture"))?;

        let id = Uuid::new_v4().to_string();
        let picture_url =
            self.image_repository
                .store_dog_picture(&id, &picture.filename, &picture.bytes)?;

        let dog = Dog {
            id,
            name,
            picture: picture_url,
            plan_id: None,
        };
        self.dog_repository.store_dog(&dog)?;
        info!("Registered dog {} ({})", dog.name, dog.id);
        Ok(dog)
    }

    pub fn get_dog(&self, dog_id: &str) -> Result<Dog, DomainError> {
        self.dog_repository
            .get_dog(dog_id)?
            .ok_or(DomainError::NotFound("Dog"))
    }

    pub fn list_dogs(&self) -> Result<Vec<Dog>, DomainError> {
        Ok(self.dog_repository.list_dogs()?)
    }

    /// Delete a dog, its recorded sessions, and its stored pictures.
    pub fn delete_dog(&self, dog_id: &str) -> Result<(), DomainError> {
        if !self.dog_repository.delete_dog(dog_id)? {
            return Err(DomainError::NotFound("Dog"));
        }
        self.image_repository.delete_dog_pictures(dog_id)?;
        info!("Deleted dog {}", dog_id);
        Ok(())
    }

    /// Point the dog at a plan. The plan id is stored as-is; projection
    /// simply yields nothing if it never resolves.
    pub fn assign_plan(&self, cmd: AssignPlanCommand) -> Result<Dog, DomainError> {
        let mut dog = self.get_dog(&cmd.dog_id)?;
        dog.plan_id = Some(cmd.plan_id);
        self.dog_repository.update_dog(&dog)?;
        info!("Assigned plan {:?} to dog {}", dog.plan_id, dog.id);
        Ok(dog)
    }

    pub fn clear_plan(&self, dog_id: &str) -> Result<Dog, DomainError> {
        let mut dog = self.get_dog(dog_id)?;
        dog.plan_id = None;
        self.dog_repository.update_dog(&dog)?;
        info!("Unassigned plan from dog {}", dog.id);
        Ok(dog)
    }
}
