//! The `Manager` struct and its per-tick sweep.

use std::rc::Rc;

use helm_agent::{Agent, AgentResult, HostActor};
use helm_core::{AgentId, AiConfig};
use helm_decision::{ConditionRegistry, StrategyDefinition, StrategyRegistry};
use helm_steering::ActionTable;

use crate::SimResult;

/// Owner of every live agent and the registries they share.
///
/// The manager drives the whole population once per engine tick via
/// [`update`](Self::update): each agent runs the decide → steer → apply
/// pipeline in turn, in stable spawn order.  A failing or host-invalidated
/// agent never aborts the tick — it is marked during the sweep and removed
/// after the sweep completes, so every other agent still updates and agent
/// order is preserved.
///
/// Create via [`ManagerBuilder`][crate::ManagerBuilder].
pub struct Manager<H: HostActor> {
    config:     AiConfig,
    actions:    ActionTable,
    conditions: ConditionRegistry,
    strategies: StrategyRegistry,

    /// Live agents in spawn order.  IDs are monotonically assigned and never
    /// reused within one manager's lifetime.
    agents:  Vec<(AgentId, Agent<H>)>,
    next_id: u32,
}

impl<H: HostActor> Manager<H> {
    pub(crate) fn from_parts(
        config:     AiConfig,
        actions:    ActionTable,
        conditions: ConditionRegistry,
        strategies: StrategyRegistry,
    ) -> Self {
        Self {
            config,
            actions,
            conditions,
            strategies,
            agents: Vec::new(),
            next_id: 0,
        }
    }

    // ── Spawning & removal ────────────────────────────────────────────────

    /// Spawn an agent around `host` with the default motion limits and load
    /// `definition` into its strategy.
    pub fn spawn(
        &mut self,
        host: Rc<H>,
        definition: &StrategyDefinition,
    ) -> SimResult<AgentId> {
        let mut agent = Agent::new(host, self.config.limits);
        agent.load_definition(definition, &self.conditions)?;
        Ok(self.add_agent(agent))
    }

    /// Spawn from a definition source: a bare file name (resolved against the
    /// configured definition directory), a path, or inline JSON.
    pub fn spawn_from_source(&mut self, host: Rc<H>, source: &str) -> SimResult<AgentId> {
        let resolved = self.config.definition_path(source);
        let definition = if resolved.is_file() {
            StrategyDefinition::from_path(&resolved)?
        } else {
            StrategyDefinition::load(source)?
        };
        self.spawn(host, &definition)
    }

    /// Register an agent built by hand (custom limits, strategy, or target).
    pub fn add_agent(&mut self, agent: Agent<H>) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        self.agents.push((id, agent));
        id
    }

    /// Remove an agent, returning it if it was present.
    pub fn remove(&mut self, id: AgentId) -> Option<Agent<H>> {
        let ix = self.agents.iter().position(|(aid, _)| *aid == id)?;
        Some(self.agents.remove(ix).1)
    }

    // ── The tick sweep ────────────────────────────────────────────────────

    /// Update every live agent once and return the number updated.
    ///
    /// Sweep order is spawn order.  Agents whose host has been destroyed are
    /// skipped; agents whose pipeline fails are logged and dropped.  Both are
    /// collected during the sweep and removed after it, so one agent's fate
    /// never affects another's update this tick.
    pub fn update(&mut self, dt: f32) -> usize {
        let mut doomed: Vec<AgentId> = Vec::new();
        let mut updated = 0;

        for (id, agent) in &mut self.agents {
            if !agent.valid() {
                doomed.push(*id);
                continue;
            }
            match Self::tick_agent(agent, &self.actions, dt) {
                Ok(()) => updated += 1,
                Err(e) => {
                    tracing::warn!(agent = %id, error = %e, "evicting agent after tick failure");
                    doomed.push(*id);
                }
            }
        }

        if !doomed.is_empty() {
            self.agents.retain(|(id, _)| !doomed.contains(id));
        }
        updated
    }

    fn tick_agent(agent: &mut Agent<H>, actions: &ActionTable, dt: f32) -> AgentResult<()> {
        agent.update_actions(actions)?;
        agent.update_steering(dt);
        agent.apply_steering(dt);
        Ok(())
    }

    // ── Access ────────────────────────────────────────────────────────────

    pub fn agent(&self, id: AgentId) -> Option<&Agent<H>> {
        self.agents.iter().find(|(aid, _)| *aid == id).map(|(_, a)| a)
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent<H>> {
        self.agents.iter_mut().find(|(aid, _)| *aid == id).map(|(_, a)| a)
    }

    /// Live agent IDs in sweep order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(|(id, _)| *id)
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn actions(&self) -> &ActionTable {
        &self.actions
    }

    pub fn conditions(&self) -> &ConditionRegistry {
        &self.conditions
    }

    pub fn strategies(&self) -> &StrategyRegistry {
        &self.strategies
    }
}
