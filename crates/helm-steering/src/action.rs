//! The `SteeringAction` trait and the built-in action library.

use helm_core::AgentSnapshot;

use crate::output::SteeringOutput;

/// A pure steering function: snapshot in, contribution out.
///
/// Actions never mutate agent state — they read the snapshot (position,
/// target, motion limits) and return a value.  One boxed instance per name
/// lives in the shared [`ActionTable`](crate::ActionTable) and is invoked for
/// every agent whose strategy selected it, so implementations must be
/// `Send + Sync` and keep any state immutable.
pub trait SteeringAction: Send + Sync {
    fn steer(&self, snapshot: &AgentSnapshot<'_>) -> SteeringOutput;
}

/// Accelerate straight toward the target at full strength.
///
/// With no (valid) target this contributes nothing.  The linear output is
/// the normalized direction to the target scaled by `max_acceleration`; if
/// agent and target are coincident the direction degenerates to zero rather
/// than NaN.
pub struct Seek;

impl SteeringAction for Seek {
    fn steer(&self, snapshot: &AgentSnapshot<'_>) -> SteeringOutput {
        let Some(target) = snapshot.target_position() else {
            return SteeringOutput::NONE;
        };
        let direction = (target - snapshot.position).normalize_or_zero();
        SteeringOutput::new(direction * snapshot.limits.max_acceleration, 0.0)
    }
}
