use bytemuck::{Pod, Zeroable};

/// An event communicated from Rust to TypeScript via the shared buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SiteEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl SiteEvent {
    pub const FLOATS: usize = 4;

    /// `a` = new preloader percentage.
    pub const KIND_PRELOAD_PROGRESS: f32 = 1.0;
    /// Preloader finished; the scene is mounted from the next frame on.
    pub const KIND_PRELOAD_COMPLETE: f32 = 2.0;
    /// `a` = new section index, `b` = previous section index.
    pub const KIND_SECTION_CHANGED: f32 = 3.0;
    /// `a` = 1.0 when sound was enabled, 0.0 when disabled.
    pub const KIND_SOUND_TOGGLED: f32 = 4.0;

    pub fn preload_progress(percent: u32) -> Self {
        Self { kind: Self::KIND_PRELOAD_PROGRESS, a: percent as f32, ..Default::default() }
    }

    pub fn preload_complete() -> Self {
        Self { kind: Self::KIND_PRELOAD_COMPLETE, ..Default::default() }
    }

    pub fn section_changed(current: u32, previous: u32) -> Self {
        Self {
            kind: Self::KIND_SECTION_CHANGED,
            a: current as f32,
            b: previous as f32,
            ..Default::default()
        }
    }

    pub fn sound_toggled(enabled: bool) -> Self {
        Self {
            kind: Self::KIND_SOUND_TOGGLED,
            a: if enabled { 1.0 } else { 0.0 },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_event_is_4_floats() {
        assert_eq!(std::mem::size_of::<SiteEvent>(), SiteEvent::FLOATS * 4);
        let events = [SiteEvent::section_changed(2, 1)];
        let floats: &[f32] = bytemuck::cast_slice(&events);
        assert_eq!(floats, &[SiteEvent::KIND_SECTION_CHANGED, 2.0, 1.0, 0.0]);
    }
}
