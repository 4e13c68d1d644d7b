/// Tunables for the landing page, provided by the host.
///
/// Defaults reproduce the shipped page; the host may override any field
/// before handing the config to the runner.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Exponential smoothing factor applied per frame (default: 0.05).
    pub smoothing: f32,
    /// Idle float amplitude in world units (default: 0.1).
    pub float_amplitude: f32,
    /// Idle float angular frequency in rad/s (default: 2.0).
    pub float_frequency: f32,
    /// Viewport pages of scrollable content (default: 4).
    pub scroll_pages: f32,
    /// Scroll length multiplier per page (default: 1.5).
    pub scroll_distance: f32,
    /// Smooth time in seconds for the scroll offset (default: 0.25, 0 disables).
    pub scroll_damping: f32,
    /// Raw scroll distance in pixels after which the navbar is drawn solid (default: 50).
    pub navbar_threshold_px: f32,
    /// Preloader increment per interval, in percent (default: 5).
    pub preloader_step: u32,
    /// Preloader interval in seconds (default: 0.05).
    pub preloader_interval: f32,
    /// Delay between reaching 100% and completion, in seconds (default: 0.5).
    pub preloader_exit_delay: f32,
    /// Maximum number of site events per frame (default: 32).
    pub max_events: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.05,
            float_amplitude: 0.1,
            float_frequency: 2.0,
            scroll_pages: 4.0,
            scroll_distance: 1.5,
            scroll_damping: 0.25,
            navbar_threshold_px: 50.0,
            preloader_step: 5,
            preloader_interval: 0.05,
            preloader_exit_delay: 0.5,
            max_events: 32,
        }
    }
}

/// Parent-owned UI state, passed down explicitly every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteFlags {
    /// Preloader still showing; the 3D scene is not mounted yet.
    pub loading: bool,
    pub sound_enabled: bool,
    /// Accessibility: no smoothing, no idle float.
    pub reduced_motion: bool,
}

impl Default for SiteFlags {
    fn default() -> Self {
        Self {
            loading: true,
            sound_enabled: false,
            reduced_motion: false,
        }
    }
}

impl SiteFlags {
    pub const LOADING: u32 = 1 << 0;
    pub const SOUND: u32 = 1 << 1;
    pub const REDUCED_MOTION: u32 = 1 << 2;

    /// Pack into a bitmask for the shared buffer header.
    pub fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.loading {
            bits |= Self::LOADING;
        }
        if self.sound_enabled {
            bits |= Self::SOUND;
        }
        if self.reduced_motion {
            bits |= Self::REDUCED_MOTION;
        }
        bits
    }
}
