use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoomwalkError {
    #[error("Malformed problem file at line {line}: {reason}")]
    MalformedProblem { line: usize, reason: String },

    #[error("Malformed solution file at line {line}: {reason}")]
    MalformedSolution { line: usize, reason: String },

    #[error("Unknown check name: {0}")]
    UnknownCheck(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoomwalkError>;
