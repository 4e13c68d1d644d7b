//! Shared frame buffer layout.
//! Must stay in sync with the TypeScript `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Pose: 6 floats]        px, py, pz, rx, ry, rz
//! [Transform: 16 floats]  column-major object-to-world matrix
//! [Events: max_events × 4 floats]
//! ```
//!
//! Section offsets are written into the header every frame.
//! TypeScript reads them from the header instead of hard-coding them.

use glam::Mat4;

use crate::api::config::SiteConfig;
use crate::api::types::SiteEvent;
use crate::core::pose::Pose;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_FLAGS: usize = 3;
pub const HEADER_PRELOAD_PROGRESS: usize = 4;
pub const HEADER_SCROLL_OFFSET: usize = 5;
pub const HEADER_SECTION: usize = 6;
pub const HEADER_NAV_SCROLLED: usize = 7;
pub const HEADER_ELAPSED: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_MAX_EVENTS: usize = 10;
pub const HEADER_POSE_OFFSET: usize = 11;
pub const HEADER_TRANSFORM_OFFSET: usize = 12;
pub const HEADER_EVENT_OFFSET: usize = 13;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the pose section (fixed wire format).
pub const POSE_FLOATS: usize = Pose::CHANNELS;

/// Floats in the transform section (fixed wire format).
pub const TRANSFORM_FLOATS: usize = 16;

/// Floats per site event: kind, a, b, c (fixed wire format).
pub const EVENT_FLOATS: usize = SiteEvent::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum site events per frame.
    pub max_events: usize,

    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where the pose begins.
    pub pose_offset: usize,
    /// Offset (in floats) where the transform begins.
    pub transform_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from the event capacity.
    pub fn new(max_events: usize) -> Self {
        let event_data_floats = max_events * EVENT_FLOATS;

        let pose_offset = HEADER_FLOATS;
        let transform_offset = pose_offset + POSE_FLOATS;
        let event_data_offset = transform_offset + TRANSFORM_FLOATS;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_events,
            event_data_floats,
            pose_offset,
            transform_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a SiteConfig.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.max_events)
    }
}

/// Per-frame header values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameHeader {
    pub flags: u32,
    pub preload_progress: u32,
    pub scroll_offset: f32,
    pub section: u32,
    pub nav_scrolled: bool,
    pub elapsed: f32,
}

/// Flat f32 buffer laid out per [`ProtocolLayout`], read by TypeScript.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    layout: ProtocolLayout,
    data: Vec<f32>,
    frame: u32,
}

impl FrameBuffer {
    pub fn new(layout: ProtocolLayout) -> Self {
        let mut data = vec![0.0; layout.buffer_total_floats];
        data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        data[HEADER_MAX_EVENTS] = layout.max_events as f32;
        data[HEADER_POSE_OFFSET] = layout.pose_offset as f32;
        data[HEADER_TRANSFORM_OFFSET] = layout.transform_offset as f32;
        data[HEADER_EVENT_OFFSET] = layout.event_data_offset as f32;
        Self { layout, data, frame: 0 }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    /// Write one complete frame. Events beyond capacity are dropped (and logged).
    pub fn publish(&mut self, header: &FrameHeader, pose: &Pose, transform: &Mat4, events: &[SiteEvent]) {
        self.data[HEADER_LOCK] = 1.0;

        self.frame = self.frame.wrapping_add(1);
        self.data[HEADER_FRAME_COUNTER] = self.frame as f32;
        self.data[HEADER_FLAGS] = header.flags as f32;
        self.data[HEADER_PRELOAD_PROGRESS] = header.preload_progress as f32;
        self.data[HEADER_SCROLL_OFFSET] = header.scroll_offset;
        self.data[HEADER_SECTION] = header.section as f32;
        self.data[HEADER_NAV_SCROLLED] = if header.nav_scrolled { 1.0 } else { 0.0 };
        self.data[HEADER_ELAPSED] = header.elapsed;

        let p = self.layout.pose_offset;
        self.data[p..p + POSE_FLOATS].copy_from_slice(&pose.to_array());

        let t = self.layout.transform_offset;
        self.data[t..t + TRANSFORM_FLOATS].copy_from_slice(&transform.to_cols_array());

        let count = events.len().min(self.layout.max_events);
        if count < events.len() {
            log::warn!("dropping {} site events over capacity", events.len() - count);
        }
        let e = self.layout.event_data_offset;
        let floats: &[f32] = bytemuck::cast_slice(&events[..count]);
        self.data[e..e + floats.len()].copy_from_slice(floats);
        self.data[HEADER_EVENT_COUNT] = count as f32;

        self.data[HEADER_LOCK] = 0.0;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Raw pointer for zero-copy reads from the wasm memory.
    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&SiteConfig::default());
        assert_eq!(layout.max_events, 32);
        assert_eq!(layout.pose_offset, 16);
        assert_eq!(layout.transform_offset, 22);
        assert_eq!(layout.event_data_offset, 38);
        assert_eq!(layout.buffer_total_floats, 38 + 32 * 4);
        assert_eq!(layout.buffer_total_bytes, (38 + 32 * 4) * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(7);
        assert_eq!(layout.pose_offset, HEADER_FLOATS);
        assert_eq!(layout.transform_offset, layout.pose_offset + POSE_FLOATS);
        assert_eq!(layout.event_data_offset, layout.transform_offset + TRANSFORM_FLOATS);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn publish_writes_every_section() {
        let mut buf = FrameBuffer::new(ProtocolLayout::new(4));
        let pose = Pose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.1, 0.2, 0.3));
        let header = FrameHeader {
            flags: 0b110,
            preload_progress: 100,
            scroll_offset: 0.25,
            section: 1,
            nav_scrolled: true,
            elapsed: 4.5,
        };
        let events = [SiteEvent::section_changed(1, 0)];
        buf.publish(&header, &pose, &Mat4::IDENTITY, &events);

        let d = buf.as_slice();
        assert_eq!(d[HEADER_LOCK], 0.0);
        assert_eq!(d[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(d[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(d[HEADER_FLAGS], 6.0);
        assert_eq!(d[HEADER_SECTION], 1.0);
        assert_eq!(d[HEADER_NAV_SCROLLED], 1.0);
        assert_eq!(d[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(&d[16..22], &pose.to_array());
        assert_eq!(d[22], 1.0); // m00
        assert_eq!(d[37], 1.0); // m33
        assert_eq!(d[38], SiteEvent::KIND_SECTION_CHANGED);
    }

    #[test]
    fn events_over_capacity_are_dropped() {
        let mut buf = FrameBuffer::new(ProtocolLayout::new(2));
        let events = [SiteEvent::preload_progress(5); 5];
        buf.publish(&FrameHeader::default(), &Pose::IDENTITY, &Mat4::IDENTITY, &events);
        assert_eq!(buf.as_slice()[HEADER_EVENT_COUNT], 2.0);
        assert_eq!(buf.len(), buf.layout().buffer_total_floats);
    }
}
