use overscope_api::BoxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("override provider already bound for namespace '{0}'")]
    Conflict(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no root mounted for namespace '{0}'")]
    UnknownNamespace(String),
    #[error("backend error: {0}")]
    Backend(BoxError),
}

impl From<BoxError> for OverlayError {
    fn from(err: BoxError) -> Self {
        OverlayError::Backend(err)
    }
}

pub type Result<T> = std::result::Result<T, OverlayError>;
