//! Idle bobbing layered on top of the smoothed pose.

use crate::core::pose::Pose;

/// Sinusoidal vertical offset driven by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdleFloat {
    /// Peak offset in world units.
    pub amplitude: f32,
    /// Angular frequency in rad/s.
    pub frequency: f32,
}

impl Default for IdleFloat {
    fn default() -> Self {
        Self {
            amplitude: 0.1,
            frequency: 2.0,
        }
    }
}

impl IdleFloat {
    pub fn new(amplitude: f32, frequency: f32) -> Self {
        Self { amplitude, frequency }
    }

    /// Y offset at `elapsed` seconds. Always zero under reduced motion.
    pub fn offset(&self, elapsed: f32, reduced_motion: bool) -> f32 {
        if reduced_motion {
            0.0
        } else {
            self.amplitude * (self.frequency * elapsed).sin()
        }
    }

    /// Copy of `pose` with the offset added to its Y position.
    pub fn apply(&self, pose: &Pose, elapsed: f32, reduced_motion: bool) -> Pose {
        let mut out = *pose;
        out.position.y += self.offset(elapsed, reduced_motion);
        out
    }
}
