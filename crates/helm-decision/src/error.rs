use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("definition configuration error: {0}")]
    Config(String),

    #[error("unknown condition kind {0:?}")]
    UnknownConditionKind(String),

    #[error("unknown decision strategy kind {0:?}")]
    UnknownStrategyKind(String),

    #[error("transition in state {state:?} targets undefined state {target:?}")]
    UnresolvedStateReference { state: String, target: String },

    #[error("definition parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DecisionResult<T> = Result<T, DecisionError>;
