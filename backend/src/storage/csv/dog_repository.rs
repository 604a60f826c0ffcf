//! # Dog Repository
//!
//! YAML record per dog at `dogs/{dog_id}/dog.yaml`, discovered by
//! scanning the dogs directory. The per-dog directory also holds the
//! dog's session rows, so deleting a dog removes its history with it.

use std::fs;

use anyhow::{Context, Result};
use shared::Dog;
use tracing::warn;

use super::connection::{is_safe_id, write_atomic, CsvConnection};
use crate::storage::traits::DogStorage;

#[derive(Clone)]
pub struct DogRepository {
    connection: CsvConnection,
}

impl DogRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn dog_file_path(&self, dog_id: &str) -> std::path::PathBuf {
        self.connection.dog_directory(dog_id).join("dog.yaml")
    }

    fn write_dog(&self, dog: &Dog) -> Result<()> {
        let directory = self.connection.dog_directory(&dog.id);
        fs::create_dir_all(&directory)
            .with_context(|| format!("failed to create {}", directory.display()))?;
        let contents = serde_yaml::to_string(dog).context("failed to serialize dog record")?;
        write_atomic(&self.dog_file_path(&dog.id), contents.as_bytes())
    }
}

impl DogStorage for DogRepository {
    fn store_dog(&self, dog: &Dog) -> Result<()> {
        self.write_dog(dog)
    }

    fn get_dog(&self, dog_id: &str) -> Result<Option<Dog>> {
        if !is_safe_id(dog_id) {
            return Ok(None);
        }
        let path = self.dog_file_path(dog_id);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let dog = serde_yaml::from_str(&contents)
            .with_context(|| format!("malformed dog record {}", path.display()))?;
        Ok(Some(dog))
    }

    fn list_dogs(&self) -> Result<Vec<Dog>> {
        let mut dogs = Vec::new();
        for entry in fs::read_dir(self.connection.dogs_directory())? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let dog_id = entry.file_name().to_string_lossy().to_string();
            match self.get_dog(&dog_id) {
                Ok(Some(dog)) => dogs.push(dog),
                Ok(None) => warn!("dog directory {} has no dog.yaml, skipping", dog_id),
                Err(e) => warn!("skipping unreadable dog record {}: {:#}", dog_id, e),
            }
        }
        dogs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(dogs)
    }

    fn update_dog(&self, dog: &Dog) -> Result<()> {
        self.write_dog(dog)
    }

    fn delete_dog(&self, dog_id: &str) -> Result<bool> {
        if !is_safe_id(dog_id) {
            return Ok(false);
        }
        let directory = self.connection.dog_directory(dog_id);
        if !directory.exists() {
            return Ok(false);
        }
        fs::remove_dir_all(&directory)
            .with_context(|| format!("failed to remove {}", directory.display()))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;

    fn dog(id: &str, name: &str) -> Dog {
        Dog {
            id: id.to_string(),
            name: name.to_string(),
            picture: format!("/uploads/dogs/{}_photo.jpg", id),
            plan_id: None,
        }
    }

    #[test]
    fn stores_and_reads_back_a_dog() {
        let env = TestEnvironment::new().unwrap();
        let repo = DogRepository::new(env.connection.clone());

        let original = dog("dog-1", "Buddy");
        repo.store_dog(&original).unwrap();

        assert_eq!(repo.get_dog("dog-1").unwrap().unwrap(), original);
        assert!(repo.get_dog("dog-2").unwrap().is_none());
    }

    #[test]
    fn list_is_ordered_by_name() {
        let env = TestEnvironment::new().unwrap();
        let repo = DogRepository::new(env.connection.clone());

        repo.store_dog(&dog("dog-1", "Rex")).unwrap();
        repo.store_dog(&dog("dog-2", "Buddy")).unwrap();

        let names: Vec<String> = repo.list_dogs().unwrap().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Buddy".to_string(), "Rex".to_string()]);
    }

    #[test]
    fn update_persists_plan_assignment() {
        let env = TestEnvironment::new().unwrap();
        let repo = DogRepository::new(env.connection.clone());

        let mut stored = dog("dog-1", "Buddy");
        repo.store_dog(&stored).unwrap();

        stored.plan_id = Some("plan-123".to_string());
        repo.update_dog(&stored).unwrap();

        assert_eq!(
            repo.get_dog("dog-1").unwrap().unwrap().plan_id.as_deref(),
            Some("plan-123")
        );
    }

    #[test]
    fn delete_removes_the_whole_dog_directory() {
        let env = TestEnvironment::new().unwrap();
        let repo = DogRepository::new(env.connection.clone());

        repo.store_dog(&dog("dog-1", "Buddy")).unwrap();
        assert!(repo.delete_dog("dog-1").unwrap());
        assert!(!env.connection.dog_directory("dog-1").exists());
        assert!(!repo.delete_dog("dog-1").unwrap());
    }
}
