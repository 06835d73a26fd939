//! `helm-core` — foundational types for the `helm` agent framework.
//!
//! This crate is a dependency of every other `helm-*` crate.  It intentionally
//! has no `helm-*` dependencies and minimal external ones (`glam`,
//! `rustc-hash`, `serde`, and `thiserror`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `AgentId`, `StateId`                                  |
//! | [`limits`]   | `MotionLimits` (per-agent motion configuration)       |
//! | [`config`]   | `AiConfig` (explicit engine-wide configuration)       |
//! | [`snapshot`] | `AgentSnapshot`, `TargetInfo` (per-tick read view)    |
//! | [`error`]    | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod error;
pub mod ids;
pub mod limits;
pub mod snapshot;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::AiConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, StateId};
pub use limits::MotionLimits;
pub use snapshot::{AgentSnapshot, TargetInfo};
