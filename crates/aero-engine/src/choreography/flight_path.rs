//! Scroll-to-pose choreography for the aircraft.
//!
//! The page scrolls through three legs of equal length. Each leg owns a
//! closed-form affine function of its local fraction; a later leg takes over
//! as soon as its fraction leaves zero. The coefficients are the shipped
//! flight path and must not be re-derived from waypoints.

use std::f32::consts::PI;

use glam::Vec3;

use crate::core::pose::Pose;
use crate::extensions::easing::unit_range;

/// Length of one leg in scroll progress.
pub const LEG_LENGTH: f32 = 1.0 / 3.0;

/// Resting pose shown before the first scroll (hero section).
pub const HERO_POSE: Pose = Pose {
    position: Vec3::new(2.0, 0.0, 2.0),
    rotation: Vec3::new(0.0, -PI / 6.0, PI / 12.0),
};

/// Which formula produced a target pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    /// Before the first scroll: the resting hero pose.
    Hero,
    /// Features: swing left and climb while spinning around.
    Features,
    /// Stats: sweep right and turn back.
    Stats,
    /// Call to action: settle in front of the camera.
    Cta,
}

/// Local fractions `(r1, r2, r3)` of the three legs for a progress value.
pub fn leg_fractions(progress: f32) -> (f32, f32, f32) {
    let p = progress.clamp(0.0, 1.0);
    (
        unit_range(p, 0.0, LEG_LENGTH),
        unit_range(p, LEG_LENGTH, LEG_LENGTH),
        unit_range(p, 2.0 * LEG_LENGTH, LEG_LENGTH),
    )
}

/// Features leg, evaluated at local fraction `r1`.
pub fn features_leg(r1: f32) -> Pose {
    Pose {
        position: Vec3::new(2.0 - r1 * 6.0, r1 * 2.0, 2.0 - r1 * 4.0),
        rotation: Vec3::new(0.0, -PI / 6.0 + r1 * PI, PI / 12.0 - r1 * (PI / 6.0)),
    }
}

/// Stats leg, evaluated at local fraction `r2`.
pub fn stats_leg(r2: f32) -> Pose {
    Pose {
        position: Vec3::new(-4.0 + r2 * 8.0, 2.0 + r2, -2.0 + r2 * 6.0),
        rotation: Vec3::new(0.0, (5.0 * PI) / 6.0 - r2 * PI, -PI / 12.0 + r2 * (PI / 4.0)),
    }
}

/// Call-to-action leg, evaluated at local fraction `r3`.
pub fn cta_leg(r3: f32) -> Pose {
    Pose {
        position: Vec3::new(4.0 - r3 * 4.0, 3.0 - r3 * 3.0, 4.0 + r3 * 2.0),
        rotation: Vec3::new(
            r3 * (PI / 8.0),
            -PI / 6.0 - r3 * (PI / 12.0),
            PI / 6.0 - r3 * (PI / 6.0),
        ),
    }
}

/// The leg whose formula is active at `progress`.
pub fn active_leg(progress: f32) -> Leg {
    let (r1, r2, r3) = leg_fractions(progress);
    if r3 > 0.0 {
        Leg::Cta
    } else if r2 > 0.0 {
        Leg::Stats
    } else if r1 > 0.0 {
        Leg::Features
    } else {
        Leg::Hero
    }
}

/// Target pose for a scroll progress in [0, 1]. Out-of-range input is clamped.
pub fn target_pose(progress: f32) -> Pose {
    let (r1, r2, r3) = leg_fractions(progress);
    match active_leg(progress) {
        Leg::Hero => HERO_POSE,
        Leg::Features => features_leg(r1),
        Leg::Stats => stats_leg(r2),
        Leg::Cta => cta_leg(r3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn zero_progress_is_hero_pose_exactly() {
        assert_eq!(target_pose(0.0), HERO_POSE);
        assert_eq!(active_leg(0.0), Leg::Hero);
    }

    #[test]
    fn first_leg_uses_three_times_progress() {
        for i in 1..10 {
            let p = i as f32 * (LEG_LENGTH / 10.0);
            let expected = features_leg(p * 3.0);
            assert!(
                target_pose(p).abs_diff_eq(&expected, EPS),
                "p={} got {:?} expected {:?}",
                p,
                target_pose(p),
                expected
            );
        }
    }

    #[test]
    fn features_leg_starts_at_hero() {
        assert!(features_leg(0.0).abs_diff_eq(&HERO_POSE, 0.0));
    }

    #[test]
    fn legs_meet_at_boundaries() {
        assert!(features_leg(1.0).abs_diff_eq(&stats_leg(0.0), 1e-6));
        assert!(stats_leg(1.0).abs_diff_eq(&cta_leg(0.0), 1e-6));
    }

    #[test]
    fn no_jump_across_boundaries() {
        for boundary in [LEG_LENGTH, 2.0 * LEG_LENGTH] {
            let before = target_pose(boundary - 1e-4);
            let after = target_pose(boundary + 1e-4);
            // Steepest channel moves 24 units per unit progress.
            assert!(
                before.max_channel_delta(&after) < 1e-2,
                "jump at {}: {:?} vs {:?}",
                boundary,
                before,
                after
            );
        }
    }

    #[test]
    fn end_of_scroll_pose() {
        let end = target_pose(1.0);
        let expected = Pose {
            position: Vec3::new(0.0, 0.0, 6.0),
            rotation: Vec3::new(PI / 8.0, -PI / 6.0 - PI / 12.0, 0.0),
        };
        assert!(end.abs_diff_eq(&expected, EPS), "{:?}", end);
        assert_eq!(active_leg(1.0), Leg::Cta);
    }

    #[test]
    fn middle_of_second_leg() {
        let p = 0.5;
        let pose = target_pose(p);
        assert_eq!(active_leg(p), Leg::Stats);
        assert!(pose.abs_diff_eq(&stats_leg(0.5), EPS));
        assert!((pose.position.x - 0.0).abs() < EPS);
        assert!((pose.position.y - 2.5).abs() < EPS);
        assert!((pose.position.z - 1.0).abs() < EPS);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(target_pose(-0.5), HERO_POSE);
        assert!(target_pose(1.5).abs_diff_eq(&target_pose(1.0), 0.0));
    }
}
