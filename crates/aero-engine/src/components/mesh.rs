use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::pose::Pose;

/// Surface material for a mesh part. Colors are 0xRRGGBB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Material {
    /// Physically based, lit by the scene lights and environment.
    Standard {
        color: u32,
        roughness: f32,
        metalness: f32,
        #[serde(default)]
        emissive: u32,
        #[serde(default)]
        emissive_intensity: f32,
    },
    /// Unlit flat color.
    Basic { color: u32 },
}

impl Material {
    pub fn standard(color: u32, roughness: f32, metalness: f32) -> Self {
        Material::Standard {
            color,
            roughness,
            metalness,
            emissive: 0,
            emissive_intensity: 0.0,
        }
    }

    pub fn with_emissive(self, emissive: u32, intensity: f32) -> Self {
        match self {
            Material::Standard { color, roughness, metalness, .. } => Material::Standard {
                color,
                roughness,
                metalness,
                emissive,
                emissive_intensity: intensity,
            },
            basic => basic,
        }
    }
}

/// Primitive geometry, in the renderer's argument order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32, segments: u32 },
    Cone { radius: f32, height: f32, segments: u32 },
    Capsule { radius: f32, length: f32, cap_segments: u32, radial_segments: u32 },
    Box { width: f32, height: f32, depth: f32 },
    Circle { radius: f32, segments: u32 },
}

/// One mesh inside a group, placed relative to the group origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshPart {
    pub name: String,
    pub geometry: Geometry,
    pub material: Material,
    #[serde(default)]
    pub offset: Pose,
}

impl MeshPart {
    pub fn new(name: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        Self {
            name: name.into(),
            geometry,
            material,
            offset: Pose::IDENTITY,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.offset.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.offset.rotation = rotation;
        self
    }

    /// Transform relative to the parent group.
    pub fn local_transform(&self) -> Mat4 {
        self.offset.to_matrix(Vec3::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_serializes_with_tag() {
        let m = Material::standard(0xffffff, 0.2, 0.8);
        let json = serde_json::to_value(m).unwrap();
        assert_eq!(json["type"], "standard");
        assert_eq!(json["color"], 0xffffff);
    }

    #[test]
    fn emissive_ignored_on_basic() {
        let m = Material::Basic { color: 0x00ffff }.with_emissive(0x0055ff, 0.5);
        assert_eq!(m, Material::Basic { color: 0x00ffff });
    }

    #[test]
    fn part_offset_moves_origin() {
        let part = MeshPart::new("nose", Geometry::Cone { radius: 0.6, height: 1.6, segments: 32 },
            Material::standard(0xffffff, 0.2, 0.8))
            .at(Vec3::new(0.0, 0.0, 3.8));
        let origin = part.local_transform().transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(0.0, 0.0, 3.8)).length() < 1e-6);
    }
}
