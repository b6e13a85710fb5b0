use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlannerError>;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Column '{0}' cannot be used in a filter")]
    UnsupportedColumn(String),

    #[error("Operator '{op}' is not valid for {kind} columns")]
    InvalidOperator { op: &'static str, kind: &'static str },

    #[error("Invalid value '{value}' for column {column}")]
    InvalidLiteral { column: String, value: String },

    #[error("Malformed filter clause: {0}")]
    MalformedClause(String),

    #[error("Command cannot be empty")]
    EmptyCommand,

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Index out of range: {index} (valid: 1-{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
