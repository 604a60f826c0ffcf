/// Uploaded picture bytes plus the client-supplied filename.
#[derive(Debug, Clone)]
pub struct PictureUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Register a new dog.
#[derive(Debug, Clone)]
pub struct CreateDogCommand {
    pub name: Option<String>,
    pub picture: Option<PictureUpload>,
}

/// Assign a plan to a dog. The plan id is stored opaque.
#[derive(Debug, Clone)]
pub struct AssignPlanCommand {
    pub dog_id: String,
    pub plan_id: String,
}
