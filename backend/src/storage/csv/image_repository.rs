//! # Image Repository
//!
//! Raw blob storage for uploaded images under `uploads/`. Dog photos go
//! to `uploads/dogs/{dog_id}_{filename}`, training illustrations to
//! `uploads/trainings/{training_id}_{suffix}_{filename}`. The returned
//! URL paths are served statically by the HTTP layer.

use std::fs;

use anyhow::{Context, Result};
use shared::TrainingImage;
use uuid::Uuid;

use super::connection::{write_atomic, CsvConnection};
use crate::storage::traits::ImageStorage;

/// Reduce a client-supplied filename to a single safe path component.
fn sanitize_filename(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if safe.trim_matches(['_', '.']).is_empty() {
        "image".to_string()
    } else {
        safe
    }
}

#[derive(Clone)]
pub struct ImageRepository {
    connection: CsvConnection,
}

impl ImageRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

impl ImageStorage for ImageRepository {
    fn store_dog_picture(&self, dog_id: &str, filename: &str, bytes: &[u8]) -> Result<String> {
        let stored_name = format!("{}_{}", dog_id, sanitize_filename(filename));
        let path = self.connection.uploads_directory().join("dogs").join(&stored_name);
        write_atomic(&path, bytes)
            .with_context(|| format!("failed to store picture for dog {dog_id}"))?;
        Ok(format!("/uploads/dogs/{stored_name}"))
    }

    fn store_training_image(&self, training_id: &str, filename: &str, bytes: &[u8]) -> Result<TrainingImage> {
        // A short random suffix keeps repeated uploads of the same
        // filename from clobbering each other.
        let suffix = Uuid::new_v4().simple().to_string();
        let stored_name = format!("{}_{}_{}", training_id, &suffix[..8], sanitize_filename(filename));
        let path = self
            .connection
            .uploads_directory()
            .join("trainings")
            .join(&stored_name);
        write_atomic(&path, bytes)
            .with_context(|| format!("failed to store image for training {training_id}"))?;
        Ok(TrainingImage {
            filename: stored_name.clone(),
            url: format!("/uploads/trainings/{stored_name}"),
        })
    }

    fn delete_dog_pictures(&self, dog_id: &str) -> Result<()> {
        let prefix = format!("{dog_id}_");
        let directory = self.connection.uploads_directory().join("dogs");
        for entry in fs::read_dir(&directory)? {
            let entry = entry?;
            if entry.file_name().to_string_lossy().starts_with(&prefix) {
                fs::remove_file(entry.path())
                    .with_context(|| format!("failed to remove {}", entry.path().display()))?;
            }
        }
        Ok(())
    }
}
