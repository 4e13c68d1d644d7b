//! Normalized scroll progress for a virtual multi-page scroll region.
//!
//! The host reports the raw scroll position in pixels; the state keeps a
//! damped offset in [0, 1] that the choreography reads every frame.

use std::f32::consts::PI;

use crate::api::config::SiteConfig;
use crate::extensions::easing::{unit_range, SmoothDamp};

/// Map a pixel scroll position to [0, 1].
///
/// The scroll region is `pages * distance` viewports tall, so the scrollable
/// extent is one viewport less than that. Returns 0 when nothing can scroll.
pub fn offset_from_scroll(top_px: f32, viewport_px: f32, pages: f32, distance: f32) -> f32 {
    let extent = viewport_px * (pages * distance - 1.0);
    if extent <= 0.0 || !top_px.is_finite() {
        return 0.0;
    }
    (top_px / extent).clamp(0.0, 1.0)
}

/// Scroll position tracking with optional damping.
#[derive(Debug, Clone)]
pub struct ScrollState {
    pages: f32,
    distance: f32,
    /// Smooth time in seconds; 0 means the offset follows the raw value exactly.
    damping: f32,
    raw_offset: f32,
    raw_top_px: f32,
    offset: SmoothDamp,
}

impl ScrollState {
    pub fn new(pages: f32, distance: f32, damping: f32) -> Self {
        Self {
            pages,
            distance,
            damping: damping.max(0.0),
            raw_offset: 0.0,
            raw_top_px: 0.0,
            offset: SmoothDamp::new(0.0),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.scroll_pages, config.scroll_distance, config.scroll_damping)
    }

    pub fn pages(&self) -> f32 {
        self.pages
    }

    /// Record a new pixel scroll position from the host.
    pub fn set_scroll(&mut self, top_px: f32, viewport_px: f32) {
        self.raw_top_px = top_px.max(0.0);
        self.raw_offset = offset_from_scroll(top_px, viewport_px, self.pages, self.distance);
    }

    /// Record an already-normalized offset.
    pub fn set_offset(&mut self, offset: f32) {
        self.raw_offset = offset.clamp(0.0, 1.0);
    }

    /// Jump the damped offset onto the raw one.
    pub fn settle(&mut self) {
        self.offset.reset(self.raw_offset);
    }

    /// Advance damping by `dt` seconds. Returns true while the offset is still moving.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.offset.step(self.raw_offset, self.damping, dt)
    }

    /// Damped offset in [0, 1].
    pub fn offset(&self) -> f32 {
        self.offset.value.clamp(0.0, 1.0)
    }

    /// Raw scroll position in pixels as last reported by the host.
    pub fn raw_top_px(&self) -> f32 {
        self.raw_top_px
    }

    /// 0 before `from`, 1 after `from + distance`, linear in between.
    pub fn range(&self, from: f32, distance: f32) -> f32 {
        unit_range(self.offset(), from, distance)
    }

    /// Rises 0 → 1 → 0 across the range.
    pub fn curve(&self, from: f32, distance: f32) -> f32 {
        (self.range(from, distance) * PI).sin()
    }

    /// Whether the offset lies inside `[from, from + distance]`.
    pub fn visible(&self, from: f32, distance: f32) -> bool {
        let offset = self.offset();
        offset >= from && offset <= from + distance
    }
}
