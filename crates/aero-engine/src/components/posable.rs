use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::mesh::MeshPart;
use crate::core::pose::Pose;

/// What the browser-side renderer needs to build the object once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelDescriptor {
    /// Assemble from primitive parts.
    Procedural { scale: Vec3, parts: Vec<MeshPart> },
    /// Load a mesh file (e.g. glTF) from the asset root.
    Asset { path: String, scale: f32, rotation: Vec3 },
}

/// A renderable that the choreography can move.
///
/// The choreography only ever calls `set_pose`; how the object is drawn is
/// up to the implementation.
pub trait Posable {
    fn set_pose(&mut self, pose: &Pose);

    /// Pose most recently set.
    fn pose(&self) -> Pose;

    /// Object-to-world transform, including any intrinsic scale.
    fn transform(&self) -> Mat4;

    fn descriptor(&self) -> ModelDescriptor;
}

impl<T: Posable + ?Sized> Posable for Box<T> {
    fn set_pose(&mut self, pose: &Pose) {
        (**self).set_pose(pose)
    }

    fn pose(&self) -> Pose {
        (**self).pose()
    }

    fn transform(&self) -> Mat4 {
        (**self).transform()
    }

    fn descriptor(&self) -> ModelDescriptor {
        (**self).descriptor()
    }
}
