//! Read-only agent state passed to every condition and steering action.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::limits::MotionLimits;

/// The target an agent is currently tracking, reduced to what the core reads.
///
/// Built fresh each tick from the target's host actor; if the target has been
/// destroyed host-side the snapshot simply carries `None` instead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TargetInfo {
    /// The target's world position this tick.
    pub position: Vec3,
}

/// A read-only view of one agent's state for a single tick.
///
/// `AgentSnapshot` is what conditions and steering actions evaluate against:
/// both are pure functions over this view and never see the agent itself.
/// The snapshot is rebuilt at each pipeline step so mid-tick host movement is
/// always reflected.
///
/// # Lifetimes
///
/// `attributes` borrows the agent's attribute map for the duration of one
/// evaluation; the agent never mutates it while a snapshot is live.
pub struct AgentSnapshot<'a> {
    /// World position, sourced from the host actor.
    pub position: Vec3,

    /// Heading angle (radians about the host's up axis), sourced from the
    /// host actor.
    pub orientation: f32,

    /// Current linear velocity, owned by the agent.
    pub velocity: Vec3,

    /// Current angular velocity, owned by the agent.
    pub angular_velocity: f32,

    /// The agent's motion configuration.
    pub limits: MotionLimits,

    /// The agent's target, if it has one and the target is still valid.
    pub target: Option<TargetInfo>,

    /// Application-defined named attributes (health, alertness, …).
    pub attributes: &'a FxHashMap<String, f32>,
}

impl AgentSnapshot<'_> {
    /// Resolve a named numeric attribute.
    ///
    /// Derived properties take precedence over the attribute map:
    ///
    /// | Name           | Value                                      |
    /// |----------------|--------------------------------------------|
    /// | `speed`        | `velocity.length()`                        |
    /// | `orientation`  | `orientation`                              |
    /// | `target_range` | distance to the target (`None` if absent)  |
    ///
    /// Anything else is looked up in [`attributes`](Self::attributes).
    /// Returns `None` for names that resolve nowhere; conditions treat a
    /// missing attribute as a failed test.
    pub fn attribute(&self, name: &str) -> Option<f32> {
        match name {
            "speed"        => Some(self.velocity.length()),
            "orientation"  => Some(self.orientation),
            "target_range" => self.target.map(|t| (t.position - self.position).length()),
            _              => self.attributes.get(name).copied(),
        }
    }

    /// The target's position, if a valid target is present.
    #[inline]
    pub fn target_position(&self) -> Option<Vec3> {
        self.target.map(|t| t.position)
    }
}
