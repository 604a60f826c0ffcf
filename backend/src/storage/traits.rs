//! # Storage Traits
//!
//! Storage abstraction traits that let the domain layer work against
//! interchangeable backends. The shipped implementation is file-based
//! (YAML records, CSV session rows), but nothing in the domain assumes
//! local-disk semantics beyond these interfaces.

use anyhow::Result;
use chrono::NaiveDate;
use shared::{Dog, Plan, Training, TrainingImage};

use crate::domain::models::session::RecordedSession;

/// Interface for recorded-session storage.
///
/// Sessions are scoped to a single dog; every by-id operation takes the
/// owning dog's id and must treat a session held by a different dog as
/// absent.
pub trait SessionStorage: Send + Sync {
    /// Store a new recorded session.
    fn store_session(&self, session: &RecordedSession) -> Result<()>;

    /// Retrieve a session by id, if it exists and belongs to the dog.
    fn get_session(&self, dog_id: &str, session_id: &str) -> Result<Option<RecordedSession>>;

    /// Rewrite an existing session record in place.
    fn update_session(&self, session: &RecordedSession) -> Result<()>;

    /// Delete a session by id.
    /// Returns true if the session was found under this dog and deleted.
    fn delete_session(&self, dog_id: &str, session_id: &str) -> Result<bool>;

    /// List a dog's sessions with `date` in `[from, to]` inclusive,
    /// ordered by date ascending.
    fn list_sessions(&self, dog_id: &str, from: NaiveDate, to: NaiveDate) -> Result<Vec<RecordedSession>>;
}

/// Interface for dog record storage.
pub trait DogStorage: Send + Sync {
    /// Store a new dog.
    fn store_dog(&self, dog: &Dog) -> Result<()>;

    /// Retrieve a dog by id.
    fn get_dog(&self, dog_id: &str) -> Result<Option<Dog>>;

    /// List all dogs ordered by name.
    fn list_dogs(&self) -> Result<Vec<Dog>>;

    /// Update an existing dog.
    fn update_dog(&self, dog: &Dog) -> Result<()>;

    /// Delete a dog and everything stored under it (sessions included).
    /// Returns true if the dog existed.
    fn delete_dog(&self, dog_id: &str) -> Result<bool>;
}

/// Interface for training record storage.
pub trait TrainingStorage: Send + Sync {
    /// Store a new training.
    fn store_training(&self, training: &Training) -> Result<()>;

    /// Retrieve a training by id.
    fn get_training(&self, training_id: &str) -> Result<Option<Training>>;

    /// List all trainings ordered by name.
    fn list_trainings(&self) -> Result<Vec<Training>>;

    /// Update an existing training.
    fn update_training(&self, training: &Training) -> Result<()>;

    /// Delete a training by id. Returns true if it existed.
    fn delete_training(&self, training_id: &str) -> Result<bool>;
}

/// Interface for plan record storage.
pub trait PlanStorage: Send + Sync {
    /// Store a new plan.
    fn store_plan(&self, plan: &Plan) -> Result<()>;

    /// Retrieve a plan by id.
    fn get_plan(&self, plan_id: &str) -> Result<Option<Plan>>;

    /// List all plans ordered by name.
    fn list_plans(&self) -> Result<Vec<Plan>>;

    /// Update an existing plan.
    fn update_plan(&self, plan: &Plan) -> Result<()>;

    /// Delete a plan by id. Returns true if it existed.
    fn delete_plan(&self, plan_id: &str) -> Result<bool>;
}

/// Interface for uploaded image blobs (dog photos, training images).
pub trait ImageStorage: Send + Sync {
    /// Store a dog's photo and return its public URL path.
    fn store_dog_picture(&self, dog_id: &str, filename: &str, bytes: &[u8]) -> Result<String>;

    /// Store an illustration image for a training.
    fn store_training_image(&self, training_id: &str, filename: &str, bytes: &[u8]) -> Result<TrainingImage>;

    /// Remove all stored pictures for a dog.
    fn delete_dog_pictures(&self, dog_id: &str) -> Result<()>;
}
