// extensions/mod.rs
//
// Small math helpers used across the crate.
// Decoupled from poses and the runner so they can be tested in isolation.

pub mod easing;

pub use easing::{lerp, lerp_vec3, unit_range, SmoothDamp};
