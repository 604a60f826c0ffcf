//! # File Storage Module
//!
//! File-based storage for the dog trainer: one YAML record per dog,
//! plan, and training, CSV session rows per dog, and raw image blobs
//! under `uploads/`. All repositories implement the traits in
//! `storage::traits`, keeping the domain layer storage-agnostic.
//!
//! ## Directory Layout
//!
//! ```text
//! data/
//! ├── dogs/
//! │   └── {dog_id}/
//! │       ├── dog.yaml
//! │       └── sessions.csv
//! ├── plans/
//! │   └── {plan_id}.yaml
//! ├── trainings/
//! │   └── {training_id}.yaml
//! └── uploads/
//!     ├── dogs/
//!     └── trainings/
//! ```
//!
//! Mutations rewrite whole files through a temp file + rename, so a
//! crash mid-write never leaves a half-written record behind.

pub mod connection;
pub mod dog_repository;
pub mod image_repository;
pub mod plan_repository;
pub mod session_repository;
pub mod training_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use dog_repository::DogRepository;
pub use image_repository::ImageRepository;
pub use plan_repository::PlanRepository;
pub use session_repository::SessionRepository;
pub use training_repository::TrainingRepository;
