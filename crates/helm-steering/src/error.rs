use thiserror::Error;

#[derive(Debug, Error)]
pub enum SteeringError {
    #[error("steering action {0:?} is already registered")]
    DuplicateAction(String),

    #[error("unknown steering action {0:?}")]
    UnknownAction(String),
}

pub type SteeringResult<T> = Result<T, SteeringError>;
