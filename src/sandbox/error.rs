use thiserror::Error;

#[derive(Error, Debug)]
pub enum SandboxError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Resource too large: {size} bytes (max: {max})")]
    ResourceTooLarge { size: u64, max: u64 },

    #[error("Failed to read resource archive: {0}")]
    ArchiveFailed(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
