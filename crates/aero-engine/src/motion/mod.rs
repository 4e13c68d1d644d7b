// motion/mod.rs
//
// Per-frame motion stages applied after the choreography:
// smoothing toward the target, then idle floating on the rendered pose.

pub mod idle_float;
pub mod smoothing;

pub use idle_float::IdleFloat;
pub use smoothing::Smoothing;

use crate::api::config::SiteConfig;
use crate::core::pose::Pose;

/// Holds the persistent "current" pose and turns targets into rendered poses.
///
/// The idle float is added to the returned pose only, so it never leaks
/// into the smoothing history.
#[derive(Debug, Clone, Copy)]
pub struct MotionRig {
    smoothing: Smoothing,
    float: IdleFloat,
    current: Pose,
}

impl MotionRig {
    pub fn new(smoothing: Smoothing, float: IdleFloat, initial: Pose) -> Self {
        Self {
            smoothing,
            float,
            current: initial,
        }
    }

    pub fn from_config(config: &SiteConfig, initial: Pose) -> Self {
        Self::new(
            Smoothing::new(config.smoothing),
            IdleFloat::new(config.float_amplitude, config.float_frequency),
            initial,
        )
    }

    /// Smoothed pose without the idle offset.
    pub fn current(&self) -> Pose {
        self.current
    }

    /// Place the rig without smoothing (e.g. when a session starts).
    pub fn reset(&mut self, pose: Pose) {
        self.current = pose;
    }

    /// Advance one animation tick and return the pose to render.
    pub fn tick(&mut self, target: &Pose, elapsed: f32, reduced_motion: bool) -> Pose {
        self.current = self.smoothing.apply(&self.current, target, reduced_motion);
        self.float.apply(&self.current, elapsed, reduced_motion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choreography::{target_pose, HERO_POSE};

    #[test]
    fn float_does_not_feed_back_into_smoothing() {
        let mut rig = MotionRig::from_config(&SiteConfig::default(), HERO_POSE);
        let target = HERO_POSE;
        // At rest on the target: the smoothed pose must stay put while the
        // rendered pose bobs.
        let rendered = rig.tick(&target, std::f32::consts::FRAC_PI_4, false);
        assert_eq!(rig.current(), HERO_POSE);
        assert!((rendered.position.y - (HERO_POSE.position.y + 0.1)).abs() < 1e-6);
    }

    #[test]
    fn reduced_motion_renders_target_exactly() {
        let mut rig = MotionRig::from_config(&SiteConfig::default(), HERO_POSE);
        let target = target_pose(0.9);
        let rendered = rig.tick(&target, 12.34, true);
        assert_eq!(rendered, target);
        assert_eq!(rig.current(), target);
    }

    #[test]
    fn reset_places_without_blend() {
        let mut rig = MotionRig::from_config(&SiteConfig::default(), Pose::IDENTITY);
        rig.reset(HERO_POSE);
        assert_eq!(rig.current(), HERO_POSE);
    }
}
