//! The `DecisionStrategy` trait — the main extension point for decision logic.

use helm_core::AgentSnapshot;
use rustc_hash::FxHashMap;

use crate::condition::ConditionRegistry;
use crate::definition::StrategyDefinition;
use crate::error::{DecisionError, DecisionResult};
use crate::idle::IdleStrategy;
use crate::state_machine::StateMachine;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Pluggable per-agent decision policy.
///
/// Exactly one strategy instance lives inside each agent.  Each tick the
/// agent calls [`evaluate`][Self::evaluate] once and resolves the returned
/// action names against the shared action table.
///
/// # Contract
///
/// - `load` either fully succeeds or leaves the strategy unusable (a
///   subsequent `evaluate` returns no actions).  It must never expose a
///   partially loaded definition.
/// - `evaluate` makes at most one decision per call and reads the agent only
///   through the snapshot.
pub trait DecisionStrategy {
    /// Consume a declarative definition, building conditions via `conditions`.
    fn load(
        &mut self,
        definition: &StrategyDefinition,
        conditions: &ConditionRegistry,
    ) -> DecisionResult<()>;

    /// Produce the action names to run this tick.
    fn evaluate(&mut self, snapshot: &AgentSnapshot<'_>) -> Vec<String>;
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Constructs a fresh, unloaded strategy instance.
pub type StrategyConstructor = fn() -> Box<dyn DecisionStrategy>;

/// Kind → constructor table for decision strategies.
///
/// Agents are built against a kind string (so hosts can pick strategies from
/// data); the registry turns that string into an instance or fails with
/// [`DecisionError::UnknownStrategyKind`].
pub struct StrategyRegistry {
    constructors: FxHashMap<String, StrategyConstructor>,
}

impl StrategyRegistry {
    /// An empty registry with no kinds.
    pub fn empty() -> Self {
        Self { constructors: FxHashMap::default() }
    }

    /// A registry with the built-in kinds: `STATE_MACHINE`, `IDLE`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry
            .register("STATE_MACHINE", || Box::new(StateMachine::new()))
            .expect("builtin kinds are unique");
        registry
            .register("IDLE", || Box::new(IdleStrategy))
            .expect("builtin kinds are unique");
        registry
    }

    /// Register a strategy kind under a unique name.
    pub fn register(&mut self, kind: &str, constructor: StrategyConstructor) -> DecisionResult<()> {
        if self.constructors.contains_key(kind) {
            return Err(DecisionError::Config(format!(
                "strategy kind {kind:?} is already registered"
            )));
        }
        self.constructors.insert(kind.to_string(), constructor);
        Ok(())
    }

    /// `true` if `kind` has a registered constructor.
    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    /// Construct a fresh strategy of the given kind.
    pub fn create(&self, kind: &str) -> DecisionResult<Box<dyn DecisionStrategy>> {
        let constructor = self
            .constructors
            .get(kind)
            .ok_or_else(|| DecisionError::UnknownStrategyKind(kind.to_string()))?;
        Ok(constructor())
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
