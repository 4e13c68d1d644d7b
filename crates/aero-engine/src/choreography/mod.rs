pub mod flight_path;

pub use flight_path::{target_pose, active_leg, leg_fractions, Leg, HERO_POSE, LEG_LENGTH};
