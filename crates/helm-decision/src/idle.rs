//! An inert strategy — agents never produce actions.

use helm_core::AgentSnapshot;

use crate::condition::ConditionRegistry;
use crate::definition::StrategyDefinition;
use crate::error::DecisionResult;
use crate::strategy::DecisionStrategy;

/// A [`DecisionStrategy`] that always returns an empty action list.
///
/// Useful as a placeholder in tests or for "passive" agent populations that
/// coast under friction without acting.  Definitions are accepted and
/// ignored.
pub struct IdleStrategy;

impl DecisionStrategy for IdleStrategy {
    fn load(
        &mut self,
        _definition: &StrategyDefinition,
        _conditions: &ConditionRegistry,
    ) -> DecisionResult<()> {
        Ok(())
    }

    fn evaluate(&mut self, _snapshot: &AgentSnapshot<'_>) -> Vec<String> {
        vec![]
    }
}
