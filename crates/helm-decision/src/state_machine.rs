//! The built-in state-machine decision strategy.
//!
//! # Linking model
//!
//! States live in a `Vec<State>` in declaration order and transitions hold a
//! [`StateId`] index instead of a name or reference.  Loading is two-phase:
//!
//! 1. Materialize every state (building each transition's condition) with
//!    `StateId::INVALID` targets, recording the target *names* on the side.
//! 2. Re-walk all transitions and resolve each name to its `StateId`.
//!
//! A dangling target name fails phase 2 with `UnresolvedStateReference`, and
//! because the machine under construction is only installed after both
//! phases succeed, a failed load can never leave half-linked states
//! reachable — the machine simply stays (or becomes) unloaded.

use helm_core::{AgentSnapshot, StateId};
use rustc_hash::FxHashMap;

use crate::condition::{Condition, ConditionRegistry};
use crate::definition::StrategyDefinition;
use crate::error::{DecisionError, DecisionResult};
use crate::strategy::DecisionStrategy;

// ── State & Transition ────────────────────────────────────────────────────────

/// A guarded edge to another state.
pub struct Transition {
    condition: Box<dyn Condition>,
    target: StateId,
}

/// One state: resident actions, entry/exit actions, and outgoing edges.
///
/// All fields are immutable after the owning machine finishes loading.
pub struct State {
    pub name: String,
    pub actions: Vec<String>,
    pub entry_actions: Vec<String>,
    pub exit_actions: Vec<String>,
    transitions: Vec<Transition>,
}

// ── StateMachine ──────────────────────────────────────────────────────────────

/// Fully linked machine data.  Exists only in the all-or-nothing loaded state.
struct Linked {
    states: Vec<State>,
    current: StateId,
}

/// A finite-state decision strategy.
///
/// The first state in the definition is the initial state.  Each
/// [`evaluate`](DecisionStrategy::evaluate) call performs **at most one**
/// transition: the current state's edges are checked in definition order and
/// the first satisfied condition fires.  A state with no satisfiable edges is
/// absorbing; there are no terminal states.
#[derive(Default)]
pub struct StateMachine {
    linked: Option<Linked>,
}

impl StateMachine {
    /// An unloaded machine.  Evaluates to no actions until `load` succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once a definition has been loaded successfully.
    pub fn is_loaded(&self) -> bool {
        self.linked.is_some()
    }

    /// Name of the current state, if loaded.
    pub fn current_state_name(&self) -> Option<&str> {
        self.linked
            .as_ref()
            .map(|l| l.states[l.current.index()].name.as_str())
    }

    /// Number of states, if loaded.
    pub fn state_count(&self) -> usize {
        self.linked.as_ref().map_or(0, |l| l.states.len())
    }
}

impl DecisionStrategy for StateMachine {
    fn load(
        &mut self,
        definition: &StrategyDefinition,
        conditions: &ConditionRegistry,
    ) -> DecisionResult<()> {
        // Drop any previous machine up front: after a failed load the
        // strategy must be unusable, not stale.
        self.linked = None;

        if definition.states.is_empty() {
            return Err(DecisionError::Config("definition contains no states".to_string()));
        }

        // ── Phase 1: materialize states ───────────────────────────────────
        let mut names: FxHashMap<String, StateId> =
            FxHashMap::with_capacity_and_hasher(definition.states.len(), Default::default());
        let mut states: Vec<State> = Vec::with_capacity(definition.states.len());
        let mut target_names: Vec<Vec<String>> = Vec::with_capacity(definition.states.len());

        for (ix, state_def) in definition.states.iter().enumerate() {
            let id = StateId::try_from(ix).map_err(|_| {
                DecisionError::Config(format!("definition exceeds {} states", StateId::INVALID.0))
            })?;
            if names.insert(state_def.name.clone(), id).is_some() {
                return Err(DecisionError::Config(format!(
                    "duplicate state name {:?}",
                    state_def.name
                )));
            }

            let mut transitions = Vec::with_capacity(state_def.transitions.len());
            let mut targets = Vec::with_capacity(state_def.transitions.len());
            for transition_def in &state_def.transitions {
                transitions.push(Transition {
                    condition: conditions.build(transition_def.condition())?,
                    target: StateId::INVALID,
                });
                targets.push(transition_def.target().to_string());
            }

            states.push(State {
                name:          state_def.name.clone(),
                actions:       state_def.actions.clone(),
                entry_actions: state_def.entry_actions.clone(),
                exit_actions:  state_def.exit_actions.clone(),
                transitions,
            });
            target_names.push(targets);
        }

        // ── Phase 2: resolve transition targets ───────────────────────────
        for (state_ix, targets) in target_names.iter().enumerate() {
            for (transition_ix, target_name) in targets.iter().enumerate() {
                let target = *names.get(target_name).ok_or_else(|| {
                    DecisionError::UnresolvedStateReference {
                        state:  states[state_ix].name.clone(),
                        target: target_name.clone(),
                    }
                })?;
                states[state_ix].transitions[transition_ix].target = target;
            }
        }

        self.linked = Some(Linked { states, current: StateId(0) });
        Ok(())
    }

    fn evaluate(&mut self, snapshot: &AgentSnapshot<'_>) -> Vec<String> {
        let Some(linked) = self.linked.as_mut() else {
            return vec![];
        };
        let current_ix = linked.current.index();

        // First satisfied edge wins; later edges are not evaluated.
        let mut fired: Option<StateId> = None;
        for transition in &linked.states[current_ix].transitions {
            if transition.condition.test(snapshot) {
                fired = Some(transition.target);
                break;
            }
        }

        match fired {
            Some(target) => {
                let mut actions = linked.states[current_ix].exit_actions.clone();
                actions.extend_from_slice(&linked.states[target.index()].entry_actions);
                linked.current = target;
                actions
            }
            None => linked.states[current_ix].actions.clone(),
        }
    }
}
