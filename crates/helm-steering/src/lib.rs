//! `helm-steering` — steering outputs and the named action library.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`output`] | `SteeringOutput`, `SteeringAccumulator`                   |
//! | [`action`] | `SteeringAction` trait, built-in `Seek`                   |
//! | [`table`]  | `ActionRegistry` (build phase) → `ActionTable` (frozen)   |
//! | [`error`]  | `SteeringError`, `SteeringResult<T>`                      |
//!
//! # Aggregation semantics
//!
//! Contributions from all of an agent's active actions are summed, then the
//! linear sum is divided by the number of actions that produced a *nonzero
//! linear* contribution and the angular sum by the number that produced a
//! *nonzero angular* one — two independent counts, never the total action
//! count.  Division only happens when a count exceeds 1, so a single
//! contributor passes through bit-exactly.

pub mod action;
pub mod error;
pub mod output;
pub mod table;


pub use action::{Seek, SteeringAction};
pub use error::{SteeringError, SteeringResult};
pub use output::{SteeringAccumulator, SteeringOutput};
pub use table::{ActionRegistry, ActionTable};
