use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position and rotation of a rigid object.
///
/// Rotation is stored as Euler angles in radians, applied in XYZ order
/// (the convention used by the browser-side renderer).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Pose {
    /// Number of scalar channels (xyz position + xyz rotation).
    pub const CHANNELS: usize = 6;

    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    /// Rotation as a quaternion (XYZ Euler order).
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Rigid transform for this pose with a uniform or per-axis scale.
    pub fn to_matrix(&self, scale: Vec3) -> Mat4 {
        Mat4::from_scale_rotation_translation(scale, self.orientation(), self.position)
    }

    /// Flatten to `[px, py, pz, rx, ry, rz]`.
    pub fn to_array(&self) -> [f32; Self::CHANNELS] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        ]
    }

    pub fn from_array(a: [f32; Self::CHANNELS]) -> Self {
        Self {
            position: Vec3::new(a[0], a[1], a[2]),
            rotation: Vec3::new(a[3], a[4], a[5]),
        }
    }

    /// Largest absolute per-channel difference between two poses.
    pub fn max_channel_delta(&self, other: &Pose) -> f32 {
        let dp = (self.position - other.position).abs().max_element();
        let dr = (self.rotation - other.rotation).abs().max_element();
        dp.max(dr)
    }

    /// Channel-wise approximate equality.
    pub fn abs_diff_eq(&self, other: &Pose, eps: f32) -> bool {
        self.max_channel_delta(other) <= eps
    }
}
