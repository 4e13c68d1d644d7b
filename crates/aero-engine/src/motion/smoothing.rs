//! Per-tick exponential smoothing of the current pose toward the target.

use crate::core::pose::Pose;
use crate::extensions::easing::lerp_vec3;

/// Exponential low-pass filter over the six pose channels.
///
/// No velocity is carried: each tick the current pose covers a fixed fraction
/// `alpha` of its remaining distance to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothing {
    alpha: f32,
}

impl Default for Smoothing {
    fn default() -> Self {
        Self::new(0.05)
    }
}

impl Smoothing {
    /// `alpha` is clamped to [0, 1].
    pub fn new(alpha: f32) -> Self {
        Self { alpha: alpha.clamp(0.0, 1.0) }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// One smoothing tick: `current + alpha * (target - current)` per channel.
    pub fn step(&self, current: &Pose, target: &Pose) -> Pose {
        Pose {
            position: lerp_vec3(current.position, target.position, self.alpha),
            rotation: lerp_vec3(current.rotation, target.rotation, self.alpha),
        }
    }

    /// One tick honouring the reduced-motion flag: snap instead of blend.
    pub fn apply(&self, current: &Pose, target: &Pose, reduced_motion: bool) -> Pose {
        if reduced_motion {
            *target
        } else {
            self.step(current, target)
        }
    }
}
