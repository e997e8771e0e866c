//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including incomplete maze coverage)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex, invalid map)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, invalid map (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphwalk operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("unknown vertex: {id}")]
    UnknownVertex { id: String },

    #[error("no exit {direction} from room {room}")]
    BlockedExit { room: String, direction: String },

    #[error("invalid map: {reason}")]
    InvalidMap { reason: String },

    #[error("recursion depth limit of {depth} exceeded")]
    RecursionLimit { depth: usize },

    // Generic failures (exit code 1)
    #[error("incomplete traversal: {shortfall} unvisited rooms")]
    IncompleteCoverage { shortfall: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a vertex that is not registered in the graph
    pub fn unknown_vertex(id: impl std::fmt::Display) -> Self {
        GraphError::UnknownVertex { id: id.to_string() }
    }

    /// Create an error for a move through a missing exit
    pub fn blocked_exit(room: impl std::fmt::Display, direction: impl std::fmt::Display) -> Self {
        GraphError::BlockedExit {
            room: room.to_string(),
            direction: direction.to_string(),
        }
    }

    /// Create an error for a structurally invalid room map
    pub fn invalid_map(reason: impl Into<String>) -> Self {
        GraphError::InvalidMap {
            reason: reason.into(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::UnknownVertex { .. }
            | GraphError::BlockedExit { .. }
            | GraphError::InvalidMap { .. }
            | GraphError::RecursionLimit { .. } => ExitCode::Data,

            GraphError::IncompleteCoverage { .. }
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::BlockedExit { .. } => "blocked_exit",
            GraphError::InvalidMap { .. } => "invalid_map",
            GraphError::RecursionLimit { .. } => "recursion_limit",
            GraphError::IncompleteCoverage { .. } => "incomplete_coverage",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;
