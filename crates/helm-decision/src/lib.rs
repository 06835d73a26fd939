//! `helm-decision` — decision strategies and the conditions that drive them.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                   |
//! |-------------------|------------------------------------------------------------|
//! | [`definition`]    | Serde model of the declarative strategy definition format  |
//! | [`condition`]     | `Condition` trait, `ValueCondition`, `ConditionRegistry`   |
//! | [`state_machine`] | `State`, `Transition`, `StateMachine`                      |
//! | [`strategy`]      | `DecisionStrategy` trait, `StrategyRegistry`               |
//! | [`idle`]          | `IdleStrategy` — placeholder that never produces actions   |
//! | [`error`]         | `DecisionError`, `DecisionResult<T>`                       |
//!
//! # Design notes
//!
//! A strategy produces the list of **action names** to run this tick; it
//! never touches steering itself.  The per-tick flow in helm-agent is:
//!
//! 1. Build an [`AgentSnapshot`](helm_core::AgentSnapshot) (read-only).
//! 2. Call [`DecisionStrategy::evaluate`] — the only mutation is the
//!    strategy's own bookkeeping (e.g. the state machine's current state).
//! 3. Resolve the returned names against the shared action table.
//!
//! Strategies are constructed once per agent and load an immutable
//! definition; after `load` succeeds only the current-state cursor mutates.

pub mod condition;
pub mod definition;
pub mod error;
pub mod idle;
pub mod state_machine;
pub mod strategy;


pub use condition::{Condition, ConditionBuilder, ConditionRegistry, ValueCondition};
pub use definition::{ConditionSpec, StateDefinition, StrategyDefinition, TransitionDefinition};
pub use error::{DecisionError, DecisionResult};
pub use idle::IdleStrategy;
pub use state_machine::{State, StateMachine};
pub use strategy::{DecisionStrategy, StrategyConstructor, StrategyRegistry};
