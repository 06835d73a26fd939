//! `helm-sim` — the agent manager that drives the whole population.
//!
//! # Per-tick sweep
//!
//! ```text
//! for each (id, agent) in spawn order:
//!   invalid host?            → mark for removal, skip
//!   update_actions(table)    → decide this tick's steering actions
//!   update_steering(dt)      → blend them into one pending command
//!   apply_steering(dt)       → integrate and hand off to the host
//!   pipeline error?          → warn, mark for removal
//! remove everything marked
//! ```
//!
//! Marked agents are removed only after the sweep, so a failure or a
//! destroyed host mid-population never disturbs the agents behind it.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use helm_core::AiConfig;
//! use helm_sim::ManagerBuilder;
//!
//! let mut manager = ManagerBuilder::new(AiConfig::default()).build();
//! let guard = manager.spawn_from_source(host, "guard.json")?;
//! loop {
//!     manager.update(dt);
//! }
//! ```

pub mod builder;
pub mod error;
pub mod manager;

#[cfg(test)]
mod tests;

pub use builder::ManagerBuilder;
pub use error::{SimError, SimResult};
pub use manager::Manager;
