//! Steering outputs and their per-tick aggregation.

use glam::Vec3;

// ── SteeringOutput ────────────────────────────────────────────────────────────

/// One steering contribution: a linear force and an angular force.
///
/// Actions that have nothing to contribute (e.g. `seek` with no target)
/// return [`SteeringOutput::NONE`]; the accumulator ignores zero components
/// entirely, including in its divisor counts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteeringOutput {
    pub linear: Vec3,
    pub angular: f32,
}

impl SteeringOutput {
    /// The no-op contribution.
    pub const NONE: SteeringOutput = SteeringOutput { linear: Vec3::ZERO, angular: 0.0 };

    #[inline]
    pub fn new(linear: Vec3, angular: f32) -> Self {
        Self { linear, angular }
    }

    /// `true` if the linear component is nonzero.
    #[inline]
    pub fn has_linear(&self) -> bool {
        self.linear != Vec3::ZERO
    }

    /// `true` if the angular component is nonzero.
    #[inline]
    pub fn has_angular(&self) -> bool {
        self.angular != 0.0
    }
}

impl Default for SteeringOutput {
    fn default() -> Self {
        Self::NONE
    }
}

// ── SteeringAccumulator ───────────────────────────────────────────────────────

/// Blends the steering contributions of one agent's active actions.
///
/// Reset at the start of every `update_steering`; the component sums and the
/// two nonzero-contributor counts are tracked separately so the divisor
/// semantics reproduce bit-for-bit regardless of action order (the sums are
/// commutative, the counts order-independent).
#[derive(Debug, Default)]
pub struct SteeringAccumulator {
    linear: Vec3,
    angular: f32,
    linear_count: u32,
    angular_count: u32,
}

impl SteeringAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in one action's contribution.
    ///
    /// A zero component is neither summed nor counted toward its divisor.
    pub fn add(&mut self, output: SteeringOutput) {
        if output.has_linear() {
            self.linear += output.linear;
            self.linear_count += 1;
        }
        if output.has_angular() {
            self.angular += output.angular;
            self.angular_count += 1;
        }
    }

    /// Produce the blended command.
    ///
    /// Each sum is averaged over its own nonzero-contributor count, and only
    /// when that count exceeds 1: a count of 0 or 1 means the sum is already
    /// the correct result and must not be divided.
    pub fn finish(&self) -> SteeringOutput {
        let mut result = SteeringOutput::new(self.linear, self.angular);
        if self.linear_count > 1 {
            result.linear /= self.linear_count as f32;
        }
        if self.angular_count > 1 {
            result.angular /= self.angular_count as f32;
        }
        result
    }
}
