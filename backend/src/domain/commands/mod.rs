//! Command and query objects consumed by the domain services.

pub mod dogs;
pub mod plans;
pub mod sessions;
pub mod trainings;
