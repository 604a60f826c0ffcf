pub mod csv;
pub mod traits;

pub use traits::{DogStorage, ImageStorage, PlanStorage, SessionStorage, TrainingStorage};
