//! Fluent builder for constructing a [`Manager`].

use helm_agent::HostActor;
use helm_core::AiConfig;
use helm_decision::{ConditionRegistry, StrategyRegistry};
use helm_steering::ActionRegistry;

use crate::Manager;

/// Fluent builder for [`Manager<H>`].
///
/// Every input has a default, so `ManagerBuilder::new(config).build()` yields
/// a working manager with the built-in actions, conditions, and strategies.
///
/// | Method            | Default                              |
/// |-------------------|--------------------------------------|
/// | `.actions(r)`     | `ActionRegistry::with_builtins()`    |
/// | `.conditions(r)`  | `ConditionRegistry::with_builtins()` |
/// | `.strategies(r)`  | `StrategyRegistry::with_builtins()`  |
///
/// # Example
///
/// ```rust,ignore
/// let mut actions = ActionRegistry::with_builtins();
/// actions.register("patrol", Arc::new(Patrol::new(route)))?;
///
/// let mut manager: Manager<GodotActor> = ManagerBuilder::new(config)
///     .actions(actions)
///     .build();
/// ```
pub struct ManagerBuilder {
    config:     AiConfig,
    actions:    ActionRegistry,
    conditions: ConditionRegistry,
    strategies: StrategyRegistry,
}

impl ManagerBuilder {
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            actions:    ActionRegistry::with_builtins(),
            conditions: ConditionRegistry::with_builtins(),
            strategies: StrategyRegistry::with_builtins(),
        }
    }

    /// Replace the action registry (register host-specific actions first).
    pub fn actions(mut self, actions: ActionRegistry) -> Self {
        self.actions = actions;
        self
    }

    /// Replace the condition registry.
    pub fn conditions(mut self, conditions: ConditionRegistry) -> Self {
        self.conditions = conditions;
        self
    }

    /// Replace the strategy registry.
    pub fn strategies(mut self, strategies: StrategyRegistry) -> Self {
        self.strategies = strategies;
        self
    }

    /// Freeze the action registry and return a ready manager.
    ///
    /// After this point the action set is fixed for the manager's lifetime;
    /// conditions and strategies stay available for later definition loads.
    pub fn build<H: HostActor>(self) -> Manager<H> {
        Manager::from_parts(
            self.config,
            self.actions.freeze(),
            self.conditions,
            self.strategies,
        )
    }
}

impl Default for ManagerBuilder {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}
