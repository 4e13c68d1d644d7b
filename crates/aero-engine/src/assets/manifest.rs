use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::types::SiteEvent;

/// Asset manifest for the landing page.
/// Loaded from a JSON file shipped next to the built page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteManifest {
    /// Mesh file to fly instead of the procedural aircraft.
    #[serde(default)]
    pub model: Option<ModelEntry>,
    /// Optional audio assets, played only while sound is enabled.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

/// Describes a loadable 3D model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Relative path to the mesh file (e.g., "models/aircraft.glb").
    pub path: String,
    /// Uniform scale applied beneath the choreographed pose (default: 1).
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Euler XYZ rotation correcting the file's native orientation, in radians.
    #[serde(default)]
    pub rotation: Vec3,
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
    /// Site event kind that fires this sound once (see `SiteEvent::KIND_*`).
    #[serde(default)]
    pub event_id: Option<u32>,
    /// Loop for as long as sound stays enabled (ambient tracks).
    #[serde(default)]
    pub looping: bool,
}

/// A sound the renderer should be playing this frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundCue {
    pub name: String,
    pub path: String,
    pub looping: bool,
}

impl SoundCue {
    fn new(name: &str, sound: &SoundDescriptor) -> Self {
        Self {
            name: name.to_owned(),
            path: sound.path.clone(),
            looping: sound.looping,
        }
    }
}

fn default_scale() -> f32 {
    1.0
}

impl SiteManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sounds that should start when the visitor enables sound.
    pub fn ambient_sounds(&self) -> impl Iterator<Item = (&str, &SoundDescriptor)> {
        self.sounds
            .iter()
            .filter(|(_, s)| s.looping)
            .map(|(name, s)| (name.as_str(), s))
    }

    /// One-shot sounds bound to a site event kind.
    pub fn triggered_by(&self, kind: u32) -> impl Iterator<Item = (&str, &SoundDescriptor)> {
        self.sounds
            .iter()
            .filter(move |(_, s)| !s.looping && s.event_id == Some(kind))
            .map(|(name, s)| (name.as_str(), s))
    }

    /// Everything that should play this frame, sorted by name.
    ///
    /// Empty while sound is off. Ambient tracks are listed every frame;
    /// one-shots only on the frame whose events include their kind.
    pub fn cues(&self, sound_enabled: bool, events: &[SiteEvent]) -> Vec<SoundCue> {
        if !sound_enabled {
            return Vec::new();
        }
        let mut cues: Vec<SoundCue> = self
            .ambient_sounds()
            .map(|(name, s)| SoundCue::new(name, s))
            .collect();
        for event in events {
            let kind = event.kind as u32;
            cues.extend(self.triggered_by(kind).map(|(name, s)| SoundCue::new(name, s)));
        }
        cues.sort_by(|a, b| a.name.cmp(&b.name));
        cues.dedup();
        cues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest_with_sounds() {
        let json = r#"{
            "sounds": {
                "engine_hum": { "path": "hum.ogg", "looping": true },
                "click": { "path": "click.mp3", "event_id": 1 }
            }
        }"#;
        let manifest = SiteManifest::from_json(json).unwrap();
        assert!(manifest.model.is_none());
        assert_eq!(manifest.sounds.len(), 2);
        assert_eq!(manifest.sounds["click"].event_id, Some(1));

        let ambient: Vec<_> = manifest.ambient_sounds().map(|(n, _)| n).collect();
        assert_eq!(ambient, vec!["engine_hum"]);
    }

    fn sound_manifest() -> SiteManifest {
        SiteManifest::from_json(
            r#"{
                "sounds": {
                    "engine_hum": { "path": "hum.ogg", "looping": true },
                    "whoosh": { "path": "whoosh.ogg", "event_id": 3 },
                    "chime": { "path": "chime.ogg", "event_id": 2 }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn no_cues_while_sound_is_off() {
        let manifest = sound_manifest();
        let events = [SiteEvent::section_changed(1, 0)];
        assert!(manifest.cues(false, &events).is_empty());
    }

    #[test]
    fn cues_list_ambient_and_triggered_sounds() {
        let manifest = sound_manifest();
        let quiet = manifest.cues(true, &[]);
        assert_eq!(quiet.len(), 1);
        assert_eq!(quiet[0].name, "engine_hum");
        assert!(quiet[0].looping);

        let events = [SiteEvent::section_changed(1, 0), SiteEvent::section_changed(2, 1)];
        let names: Vec<_> = manifest.cues(true, &events).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["engine_hum", "whoosh"]);
    }

    #[test]
    fn parse_model_with_defaults() {
        let json = r#"{ "model": { "path": "models/aircraft.glb" } }"#;
        let manifest = SiteManifest::from_json(json).unwrap();
        let model = manifest.model.unwrap();
        assert_eq!(model.path, "models/aircraft.glb");
        assert_eq!(model.scale, 1.0);
        assert_eq!(model.rotation, Vec3::ZERO);
    }

    #[test]
    fn empty_object_is_valid() {
        let manifest = SiteManifest::from_json("{}").unwrap();
        assert!(manifest.model.is_none());
        assert!(manifest.sounds.is_empty());
    }

    #[test]
    fn rejects_garbage() {
        assert!(SiteManifest::from_json("not json").is_err());
    }
}
