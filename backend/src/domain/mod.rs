//! Domain layer: services, models, and the projection/merge core.

pub mod commands;
pub mod dog_service;
pub mod errors;
pub mod models;
pub mod plan_service;
pub mod schedule;
pub mod session_service;
pub mod training_service;

pub use dog_service::DogService;
pub use errors::DomainError;
pub use plan_service::PlanService;
pub use session_service::SessionService;
pub use training_service::TrainingService;
