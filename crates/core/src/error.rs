use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaygroundError {
    #[error("example name must not be empty")]
    InvalidName,
    #[error("duplicate example name: {0}")]
    DuplicateName(String),
    #[error("no example named '{0}' (try `playground list`)")]
    UnknownExample(String),
    #[error("example '{name}' failed: {reason}")]
    ExampleFailed { name: String, reason: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;
