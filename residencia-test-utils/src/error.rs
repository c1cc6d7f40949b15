use thiserror::Error;

/// Errors shared test helpers can bubble up to a test body.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Core(#[from] residencia::error::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
