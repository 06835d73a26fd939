use helm_agent::AgentError;
use helm_decision::DecisionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("decision error: {0}")]
    Decision(#[from] DecisionError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),
}

pub type SimResult<T> = Result<T, SimError>;
