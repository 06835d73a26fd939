use helm_decision::DecisionError;
use helm_steering::SteeringError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent has no decision strategy configured")]
    NoStrategyConfigured,

    #[error("decision error: {0}")]
    Decision(#[from] DecisionError),

    #[error("steering error: {0}")]
    Steering(#[from] SteeringError),
}

pub type AgentResult<T> = Result<T, AgentError>;
