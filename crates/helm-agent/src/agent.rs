//! The stateful agent record.

use std::rc::{Rc, Weak};
use std::sync::Arc;

use glam::Vec3;
use rustc_hash::FxHashMap;

use helm_core::{AgentSnapshot, MotionLimits, TargetInfo};
use helm_decision::{
    ConditionRegistry, DecisionStrategy, StateMachine, StrategyDefinition, StrategyRegistry,
};
use helm_steering::{ActionTable, SteeringAccumulator, SteeringAction, SteeringOutput};

use crate::error::{AgentError, AgentResult};
use crate::host::HostActor;

/// An autonomous agent backed by a host actor.
///
/// The agent owns its kinematic state (`velocity`, `angular_velocity`)
/// exclusively and updates it once per tick; position and orientation are
/// read from the host every time they are needed.  Exactly one decision
/// strategy drives it; the default is a state machine.
///
/// The target is held weakly: the agent never owns the target's lifetime,
/// and a target that is dropped or host-invalidated reads as absent from
/// that tick's snapshot onward.
pub struct Agent<H: HostActor> {
    host: Rc<H>,
    target: Option<Weak<H>>,
    limits: MotionLimits,

    velocity: Vec3,
    angular_velocity: f32,

    strategy: Option<Box<dyn DecisionStrategy>>,

    /// This tick's resolved actions; overwritten by every `update_actions`.
    actions: Vec<Arc<dyn SteeringAction>>,

    /// The blended steering command awaiting `apply_steering`.
    pending: SteeringOutput,

    /// Application-defined named attributes read by conditions.
    attributes: FxHashMap<String, f32>,
}

impl<H: HostActor> Agent<H> {
    // ── Construction ──────────────────────────────────────────────────────

    /// An agent with the default state-machine strategy (unloaded).
    pub fn new(host: Rc<H>, limits: MotionLimits) -> Self {
        let mut agent = Self::without_strategy(host, limits);
        agent.strategy = Some(Box::new(StateMachine::new()));
        agent
    }

    /// An agent with a strategy created from `kind` via the registry.
    pub fn with_strategy_kind(
        host: Rc<H>,
        limits: MotionLimits,
        kind: &str,
        strategies: &StrategyRegistry,
    ) -> AgentResult<Self> {
        let mut agent = Self::without_strategy(host, limits);
        agent.strategy = Some(strategies.create(kind)?);
        Ok(agent)
    }

    /// An agent with no strategy at all.
    ///
    /// It never produces actions and `load_definition` fails with
    /// [`AgentError::NoStrategyConfigured`] until a strategy is installed.
    pub fn without_strategy(host: Rc<H>, limits: MotionLimits) -> Self {
        Self {
            host,
            target: None,
            limits,
            velocity: Vec3::ZERO,
            angular_velocity: 0.0,
            strategy: None,
            actions: Vec::new(),
            pending: SteeringOutput::NONE,
            attributes: FxHashMap::default(),
        }
    }

    /// Replace the decision strategy with an already-built instance.
    pub fn set_strategy(&mut self, strategy: Box<dyn DecisionStrategy>) {
        self.strategy = Some(strategy);
    }

    /// Replace the decision strategy by kind via the registry.
    pub fn set_strategy_kind(
        &mut self,
        kind: &str,
        strategies: &StrategyRegistry,
    ) -> AgentResult<()> {
        self.strategy = Some(strategies.create(kind)?);
        Ok(())
    }

    // ── Definition loading ────────────────────────────────────────────────

    /// Load a declarative definition into the current strategy.
    ///
    /// Load errors are fatal to this load only: the strategy is left
    /// unusable, never half-linked, and can be loaded again.
    pub fn load_definition(
        &mut self,
        definition: &StrategyDefinition,
        conditions: &ConditionRegistry,
    ) -> AgentResult<()> {
        let strategy = self.strategy.as_mut().ok_or(AgentError::NoStrategyConfigured)?;
        strategy.load(definition, conditions)?;
        Ok(())
    }

    /// Load from a file path or inline JSON (see [`StrategyDefinition::load`]).
    pub fn load_definition_source(
        &mut self,
        source: &str,
        conditions: &ConditionRegistry,
    ) -> AgentResult<()> {
        if self.strategy.is_none() {
            return Err(AgentError::NoStrategyConfigured);
        }
        let definition = StrategyDefinition::load(source)?;
        self.load_definition(&definition, conditions)
    }

    // ── Tick pipeline ─────────────────────────────────────────────────────

    /// Ask the strategy for this tick's action names and resolve them
    /// against `table`, replacing the cached action list.
    ///
    /// Fails with an `UnknownAction` steering error if the strategy names an
    /// action absent from the table; the cache is left holding whatever
    /// resolved before the miss, which the manager discards by evicting the
    /// agent.
    pub fn update_actions(&mut self, table: &ActionTable) -> AgentResult<()> {
        // Take the strategy out so the snapshot can borrow `self` freely.
        let mut strategy = self.strategy.take();
        let names = match strategy.as_mut() {
            Some(strategy) => strategy.evaluate(&self.snapshot()),
            None => vec![],
        };
        self.strategy = strategy;

        self.actions.clear();
        for name in &names {
            self.actions.push(table.resolve(name)?);
        }
        Ok(())
    }

    /// Run every cached action against the current snapshot and store the
    /// blended result as the pending steering command.
    ///
    /// `dt` is accepted for forward compatibility with time-scaled
    /// aggregation; blending itself is tick-based.
    pub fn update_steering(&mut self, _dt: f32) {
        let pending = {
            let snapshot = self.snapshot();
            let mut accumulator = SteeringAccumulator::new();
            for action in &self.actions {
                accumulator.add(action.steer(&snapshot));
            }
            accumulator.finish()
        };
        self.pending = pending;
    }

    /// Integrate the pending command and hand the result to the host actor.
    ///
    /// Linear: `velocity += pending.linear * dt - friction * velocity` with
    /// `friction = max_speed / max_acceleration`, so velocity settles at or
    /// below `max_speed` without hard truncation.  Angular: the pending
    /// value hard-clamped to `±turn_speed`.
    pub fn apply_steering(&mut self, dt: f32) {
        let friction = self.limits.friction();
        self.velocity += self.pending.linear * dt - self.velocity * friction;

        let turn = self.limits.turn_speed;
        self.angular_velocity = self.pending.angular.clamp(-turn, turn);

        self.host.apply_movement(self.velocity);
        self.host.apply_rotation(self.angular_velocity);
    }

    // ── State access ──────────────────────────────────────────────────────

    /// `true` while the backing host actor still exists.
    #[inline]
    pub fn valid(&self) -> bool {
        self.host.is_valid()
    }

    /// The shared handle to this agent's host actor.
    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    /// Track `target` weakly.  Pass another agent's [`host`](Self::host) to
    /// chase that agent.
    pub fn set_target(&mut self, target: &Rc<H>) {
        self.target = Some(Rc::downgrade(target));
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Set or overwrite a named attribute visible to conditions.
    pub fn set_attribute(&mut self, name: &str, value: f32) {
        self.attributes.insert(name.to_string(), value);
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    /// Resolve a named attribute with the snapshot's rules (derived
    /// properties first, then the attribute map).
    pub fn attribute(&self, name: &str) -> Option<f32> {
        self.snapshot().attribute(name)
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    #[inline]
    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    #[inline]
    pub fn limits(&self) -> MotionLimits {
        self.limits
    }

    /// The command computed by the last `update_steering`.
    #[inline]
    pub fn pending_steering(&self) -> SteeringOutput {
        self.pending
    }

    /// Number of actions resolved by the last `update_actions`.
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Build this tick's read-only view of the agent.
    ///
    /// An invalid or dropped target is reported as no target at all.
    pub fn snapshot(&self) -> AgentSnapshot<'_> {
        AgentSnapshot {
            position:         self.host.position(),
            orientation:      self.host.orientation(),
            velocity:         self.velocity,
            angular_velocity: self.angular_velocity,
            limits:           self.limits,
            target:           self.current_target(),
            attributes:       &self.attributes,
        }
    }

    fn current_target(&self) -> Option<TargetInfo> {
        let target = self.target.as_ref()?.upgrade()?;
        if target.is_valid() {
            Some(TargetInfo { position: target.position() })
        } else {
            None
        }
    }
}
