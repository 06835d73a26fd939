//! The host actor capability trait.

use glam::Vec3;

/// What the core needs from the host engine's actor, and nothing more.
///
/// Host bindings implement this for a *handle* into an engine-owned object
/// (a scene-node proxy, an entity ID wrapper, …); the core never inherits
/// from or owns host types.  Methods take `&self` because mutation happens
/// on the host side of the handle — the core shares one `Rc<H>` per actor so
/// agents can also observe each other as targets.
///
/// # Contract
///
/// - `position`/`orientation` reflect the actor's state *this tick*; the
///   core re-reads them at every pipeline step.
/// - `is_valid` turns false once the engine destroys the actor and never
///   turns true again.  The manager evicts the agent on the next sweep.
/// - `apply_movement`/`apply_rotation` are called at most once per tick,
///   after steering is resolved.
pub trait HostActor {
    /// World position.
    fn position(&self) -> Vec3;

    /// Heading angle in radians about the host's up axis.
    fn orientation(&self) -> f32;

    /// `false` once the backing engine object has been destroyed.
    fn is_valid(&self) -> bool;

    /// Apply this tick's linear velocity to the actor.
    fn apply_movement(&self, velocity: Vec3);

    /// Apply this tick's angular velocity to the actor.
    fn apply_rotation(&self, angular: f32);
}
