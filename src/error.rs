use thiserror::Error;

/// Errors that can occur when loading a workflow document.
#[derive(Error, Debug, Clone)]
pub enum ImportError {
    #[error("Failed to parse workflow JSON: {0}")]
    JsonParse(String),

    #[error("Invalid workflow file structure")]
    InvalidStructure,
}

/// Errors that can occur when serializing a workflow for export.
#[derive(Error, Debug, Clone)]
pub enum ExportError {
    #[error("Failed to serialize workflow: {0}")]
    Serialize(String),
}
