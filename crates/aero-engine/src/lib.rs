pub mod api;
pub mod core;
pub mod choreography;
pub mod motion;
pub mod scroll;
pub mod scene;
pub mod components;
pub mod systems;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::{SiteConfig, SiteFlags};
pub use api::types::SiteEvent;
pub use core::pose::Pose;
pub use core::time::{Clock, IntervalTimer};
pub use choreography::{target_pose, active_leg, Leg, HERO_POSE};
pub use motion::{MotionRig, Smoothing, IdleFloat};
pub use scroll::{ScrollState, Section, offset_from_scroll};
pub use scene::{FlightScene, SceneTick};
pub use components::posable::{Posable, ModelDescriptor};
pub use components::aircraft::ProceduralAircraft;
pub use components::model::LoadedModel;
pub use components::mesh::{MeshPart, Geometry, Material};
pub use systems::preloader::{Preloader, PreloaderTick};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{SiteManifest, ModelEntry, SoundCue, SoundDescriptor};
pub use bridge::protocol::{ProtocolLayout, FrameBuffer, FrameHeader};

// Math helpers
pub use extensions::{lerp, lerp_vec3, unit_range, SmoothDamp};
