use crate::domain::commands::dogs::PictureUpload;

/// Create a training exercise. `procedure` and `tips` default to empty
/// markdown when absent.
#[derive(Debug, Clone)]
pub struct CreateTrainingCommand {
    pub name: Option<String>,
    pub procedure: Option<String>,
    pub tips: Option<String>,
}

/// Partial update of a training; absent fields are retained.
#[derive(Debug, Clone)]
pub struct UpdateTrainingCommand {
    pub training_id: String,
    pub name: Option<String>,
    pub procedure: Option<String>,
    pub tips: Option<String>,
}

/// Attach an illustration image to a training.
#[derive(Debug, Clone)]
pub struct AddTrainingImageCommand {
    pub training_id: String,
    pub image: Option<PictureUpload>,
}
