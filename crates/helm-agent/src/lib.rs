//! `helm-agent` — the per-agent decide → steer → apply pipeline.
//!
//! # Crate layout
//!
//! | Module    | Contents                                       |
//! |-----------|------------------------------------------------|
//! | [`host`]  | `HostActor` capability trait                   |
//! | [`agent`] | `Agent<H>` — the stateful agent record         |
//! | [`error`] | `AgentError`, `AgentResult<T>`                 |
//!
//! # Tick pipeline
//!
//! The manager drives each agent through three steps per tick, in order:
//!
//! 1. [`update_actions`](agent::Agent::update_actions) — ask the decision
//!    strategy for this tick's action names and resolve them against the
//!    shared action table.
//! 2. [`update_steering`](agent::Agent::update_steering) — run every cached
//!    action against a fresh snapshot and blend the contributions into one
//!    pending command.
//! 3. [`apply_steering`](agent::Agent::apply_steering) — integrate the
//!    command into the agent's kinematic state and hand the result to the
//!    host actor.  This handoff is the only point where the core touches the
//!    host.

pub mod agent;
pub mod error;
pub mod host;


pub use agent::Agent;
pub use error::{AgentError, AgentResult};
pub use host::HostActor;
