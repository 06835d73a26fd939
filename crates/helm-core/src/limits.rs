//! Per-agent motion configuration.

/// Motion configuration scalars for one agent, immutable after construction.
///
/// `MotionLimits` is cheap to copy and intentionally holds no heap data.
/// Units follow the host engine's convention (world units per tick-second);
/// the core never interprets them beyond the relations below.
#[derive(Copy, Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct MotionLimits {
    /// Upper bound on the magnitude of a single steering action's linear
    /// contribution (actions scale their normalized direction by this).
    pub max_acceleration: f32,

    /// Speed the velocity decays toward under friction.  Velocity is kept at
    /// or below this by the friction model, not by hard truncation.
    pub max_speed: f32,

    /// Hard clamp on per-tick angular velocity, applied symmetrically.
    pub turn_speed: f32,
}

impl MotionLimits {
    #[inline]
    pub fn new(max_acceleration: f32, max_speed: f32, turn_speed: f32) -> Self {
        Self { max_acceleration, max_speed, turn_speed }
    }

    /// Per-tick velocity decay coefficient: `max_speed / max_acceleration`.
    ///
    /// Each `apply_steering` subtracts `friction() * velocity`, so an agent
    /// with no active steering returns to rest geometrically.
    #[inline]
    pub fn friction(&self) -> f32 {
        self.max_speed / self.max_acceleration
    }
}

impl Default for MotionLimits {
    /// Defaults tuned for a character-scale actor in a 60 Hz host.
    fn default() -> Self {
        Self {
            max_acceleration: 0.5,
            max_speed:        0.1,
            turn_speed:       0.1,
        }
    }
}
