// extensions/easing.rs
//
// Pure interpolation helpers shared by the scroll source and the motion stages.
// Plain math, no poses or runner state.

use glam::Vec3;

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec3 values, channel by channel.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Clamp `(value - from) / distance` into [0, 1].
///
/// A non-positive `distance` behaves like a step at `from`.
#[inline]
pub fn unit_range(value: f32, from: f32, distance: f32) -> f32 {
    if distance <= 0.0 {
        return if value >= from { 1.0 } else { 0.0 };
    }
    ((value - from) / distance).clamp(0.0, 1.0)
}

// ── Smooth damp ──────────────────────────────────────────────────────────

/// Critically damped follower for a single scalar.
///
/// Carries its own velocity so that a moving target is chased without
/// overshoot. `smooth_time` is roughly the time (seconds) to reach the target.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmoothDamp {
    pub value: f32,
    velocity: f32,
}

impl SmoothDamp {
    /// Distance below which the follower snaps onto the target.
    pub const EPSILON: f32 = 1e-4;

    pub fn new(value: f32) -> Self {
        Self { value, velocity: 0.0 }
    }

    /// Jump to `value` and forget any velocity.
    pub fn reset(&mut self, value: f32) {
        self.value = value;
        self.velocity = 0.0;
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Advance toward `target` by `dt` seconds. Returns true while still moving.
    pub fn step(&mut self, target: f32, smooth_time: f32, dt: f32) -> bool {
        if smooth_time <= 0.0 || (self.value - target).abs() <= Self::EPSILON {
            let moved = self.value != target;
            self.reset(target);
            return moved;
        }
        if dt <= 0.0 {
            return false;
        }

        let omega = 2.0 / smooth_time;
        let x = omega * dt;
        // Polynomial approximation of e^-x, accurate for the small x seen per frame.
        let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

        let change = self.value - target;
        let temp = (self.velocity + omega * change) * dt;
        self.velocity = (self.velocity - omega * temp) * decay;
        let mut output = target + (change + temp) * decay;

        // Never overshoot the target.
        if (target - self.value > 0.0) == (output > target) {
            output = target;
            self.velocity = 0.0;
        }

        self.value = output;
        true
    }
}
