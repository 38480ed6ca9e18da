use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Cycle detected in location hierarchy at: {0}")]
    CycleDetected(String),

    #[error("Duplicate location id: {0}")]
    DuplicateId(String),

    #[error("Location {id} references unknown parent: {parent_id}")]
    ParentNotFound { id: String, parent_id: String },

    #[error("Location {id} claims parent {parent_id}, which does not list it as a child")]
    ParentChildMismatch { id: String, parent_id: String },

    #[error("Failed to parse location payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),
}

pub type TreeResult<T> = Result<T, TreeError>;
