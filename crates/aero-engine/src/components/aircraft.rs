//! Procedurally assembled supersonic aircraft.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};

use crate::components::mesh::{Geometry, Material, MeshPart};
use crate::components::posable::{ModelDescriptor, Posable};
use crate::core::pose::Pose;

const WHITE: u32 = 0xffffff;
const CYAN: u32 = 0x00d2ff;
const DEEP_BLUE: u32 = 0x0055ff;
const NEAR_BLACK: u32 = 0x111111;
const GLOW: u32 = 0x00ffff;

fn body() -> Material {
    Material::standard(WHITE, 0.2, 0.8)
}

fn accent() -> Material {
    Material::standard(CYAN, 0.3, 0.9).with_emissive(DEEP_BLUE, 0.5)
}

fn dark() -> Material {
    Material::standard(NEAR_BLACK, 0.5, 0.8)
}

/// Aircraft built from primitive meshes under one group transform.
#[derive(Debug, Clone)]
pub struct ProceduralAircraft {
    parts: Vec<MeshPart>,
    scale: Vec3,
    pose: Pose,
}

impl Default for ProceduralAircraft {
    fn default() -> Self {
        Self::new()
    }
}

impl ProceduralAircraft {
    pub fn new() -> Self {
        let nose_down = Vec3::new(FRAC_PI_2, 0.0, 0.0);
        let engine = Geometry::Cylinder { radius_top: 0.4, radius_bottom: 0.4, height: 1.5, segments: 32 };
        let accent_strip = Geometry::Box { width: 0.1, height: 0.15, depth: 2.5 };
        let glow = Geometry::Circle { radius: 0.35, segments: 32 };

        let parts = vec![
            MeshPart::new(
                "fuselage",
                Geometry::Cylinder { radius_top: 0.6, radius_bottom: 0.4, height: 6.0, segments: 32 },
                body(),
            )
            .rotated(nose_down),
            MeshPart::new("nose", Geometry::Cone { radius: 0.6, height: 1.6, segments: 32 }, body())
                .at(Vec3::new(0.0, 0.0, 3.8))
                .rotated(nose_down),
            MeshPart::new(
                "cockpit",
                Geometry::Capsule { radius: 0.3, length: 0.3, cap_segments: 1, radial_segments: 16 },
                dark(),
            )
            .at(Vec3::new(0.0, 0.4, 3.2))
            .rotated(Vec3::new(FRAC_PI_2 - 0.2, 0.0, 0.0)),
            MeshPart::new("wings", Geometry::Box { width: 7.0, height: 0.1, depth: 2.0 }, body())
                .at(Vec3::new(0.0, -0.1, 0.0)),
            MeshPart::new("wing_accent_right", accent_strip, accent()).at(Vec3::new(3.45, -0.1, 0.5)),
            MeshPart::new("wing_accent_left", accent_strip, accent()).at(Vec3::new(-3.45, -0.1, 0.5)),
            MeshPart::new("engine_right", engine, dark())
                .at(Vec3::new(1.5, -0.3, -0.5))
                .rotated(nose_down),
            MeshPart::new("engine_left", engine, dark())
                .at(Vec3::new(-1.5, -0.3, -0.5))
                .rotated(nose_down),
            MeshPart::new("engine_glow_right", glow, Material::Basic { color: GLOW })
                .at(Vec3::new(1.5, -0.3, -1.26)),
            MeshPart::new("engine_glow_left", glow, Material::Basic { color: GLOW })
                .at(Vec3::new(-1.5, -0.3, -1.26)),
            MeshPart::new("tail_vertical", Geometry::Box { width: 0.1, height: 2.0, depth: 1.5 }, accent())
                .at(Vec3::new(0.0, 1.2, -2.5))
                .rotated(Vec3::new(-0.2, 0.0, 0.0)),
            MeshPart::new("tail_horizontal", Geometry::Box { width: 2.8, height: 0.1, depth: 1.0 }, body())
                .at(Vec3::new(0.0, 0.2, -2.7)),
        ];

        Self {
            parts,
            scale: Vec3::splat(0.5),
            pose: Pose::IDENTITY,
        }
    }

    pub fn parts(&self) -> &[MeshPart] {
        &self.parts
    }

    pub fn part(&self, name: &str) -> Option<&MeshPart> {
        self.parts.iter().find(|p| p.name == name)
    }

    /// World transform of every part, in part order.
    pub fn world_transforms(&self) -> impl Iterator<Item = Mat4> + '_ {
        let group = self.transform();
        self.parts.iter().map(move |p| group * p.local_transform())
    }
}

impl Posable for ProceduralAircraft {
    fn set_pose(&mut self, pose: &Pose) {
        self.pose = *pose;
    }

    fn pose(&self) -> Pose {
        self.pose
    }

    fn transform(&self) -> Mat4 {
        self.pose.to_matrix(self.scale)
    }

    fn descriptor(&self) -> ModelDescriptor {
        ModelDescriptor::Procedural {
            scale: self.scale,
            parts: self.parts.clone(),
        }
    }
}
