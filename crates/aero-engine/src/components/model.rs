use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::assets::manifest::ModelEntry;
use crate::components::posable::{ModelDescriptor, Posable};
use crate::core::pose::Pose;

/// Wraps a mesh file listed in the manifest.
///
/// The entry's scale and rotation are applied in model space, beneath the
/// choreographed pose, so files authored in any orientation fly the same path.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    entry: ModelEntry,
    pose: Pose,
}

impl LoadedModel {
    pub fn new(entry: ModelEntry) -> Self {
        Self {
            entry,
            pose: Pose::IDENTITY,
        }
    }

    fn base_transform(&self) -> Mat4 {
        let r = self.entry.rotation;
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.entry.scale),
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            Vec3::ZERO,
        )
    }
}

impl Posable for LoadedModel {
    fn set_pose(&mut self, pose: &Pose) {
        self.pose = *pose;
    }

    fn pose(&self) -> Pose {
        self.pose
    }

    fn transform(&self) -> Mat4 {
        self.pose.to_matrix(Vec3::ONE) * self.base_transform()
    }

    fn descriptor(&self) -> ModelDescriptor {
        ModelDescriptor::Asset {
            path: self.entry.path.clone(),
            scale: self.entry.scale,
            rotation: self.entry.rotation,
        }
    }
}
