use thiserror::Error;

/// Error types that can occur when talking to the workspace backend.
///
/// Reading or projecting a workspace config never fails; these errors only
/// come out of the I/O boundary.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// The backend answered with a non-success status
    #[error("Backend returned {status}: {body}")]
    ApiError { status: u16, body: String },
    /// The requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),
    /// Invalid request parameters or format
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    JsonError(String),
    /// API response parsing or format error
    #[error("Response format error: {message}. Raw response: {raw_response}")]
    ResponseFormatError {
        message: String,
        raw_response: String,
    },
}

impl From<reqwest::Error> for WorkspaceError {
    fn from(err: reqwest::Error) -> Self {
        WorkspaceError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for WorkspaceError {
    fn from(err: serde_json::Error) -> Self {
        WorkspaceError::JsonError(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}
