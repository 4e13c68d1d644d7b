//! The mounted 3D scene: scroll in, posed aircraft out.

use crate::api::config::SiteConfig;
use crate::choreography::flight_path::{target_pose, HERO_POSE};
use crate::components::posable::Posable;
use crate::core::pose::Pose;
use crate::core::time::Clock;
use crate::motion::MotionRig;
use crate::scroll::{ScrollState, Section};

/// What changed during one scene tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTick {
    /// Pose handed to the renderable this tick.
    pub rendered: Pose,
    /// Set when the visible overlay section changed: `(current, previous)`.
    pub section_change: Option<(Section, Section)>,
}

/// Drives one renderable along the flight path.
///
/// Generic over the renderable so the same choreography moves a procedural
/// aircraft or a loaded model.
pub struct FlightScene<P: Posable> {
    scroll: ScrollState,
    rig: MotionRig,
    clock: Clock,
    object: P,
    section: Section,
    navbar_threshold_px: f32,
}

impl<P: Posable> FlightScene<P> {
    pub fn new(config: &SiteConfig, mut object: P) -> Self {
        object.set_pose(&HERO_POSE);
        Self {
            scroll: ScrollState::from_config(config),
            rig: MotionRig::from_config(config, HERO_POSE),
            clock: Clock::new(),
            object,
            section: Section::Hero,
            navbar_threshold_px: config.navbar_threshold_px,
        }
    }

    /// Start a fresh session: clock back to zero, aircraft at the group origin.
    ///
    /// Smoothing then glides it into the current target over the next frames.
    pub fn mount(&mut self) {
        self.clock.reset();
        self.scroll.settle();
        self.rig.reset(Pose::IDENTITY);
        self.object.set_pose(&Pose::IDENTITY);
        self.section = Section::at(self.scroll.offset(), self.scroll.pages());
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn object(&self) -> &P {
        &self.object
    }

    /// Swap the renderable, placing the new one where the old one was.
    pub fn replace_object(&mut self, mut object: P) -> P {
        object.set_pose(&self.object.pose());
        std::mem::replace(&mut self.object, object)
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Smoothed pose without the idle float.
    pub fn smoothed_pose(&self) -> Pose {
        self.rig.current()
    }

    /// Navbar switches to its solid style once the page has scrolled a little.
    pub fn nav_scrolled(&self) -> bool {
        self.scroll.raw_top_px() > self.navbar_threshold_px
    }

    /// One animation frame.
    pub fn tick(&mut self, dt: f32, reduced_motion: bool) -> SceneTick {
        self.clock.tick(dt);
        self.scroll.tick(dt);

        let progress = self.scroll.offset();
        let target = target_pose(progress);
        let rendered = self.rig.tick(&target, self.clock.elapsed(), reduced_motion);
        self.object.set_pose(&rendered);

        let section = Section::at(progress, self.scroll.pages());
        let section_change = if section != self.section {
            let previous = std::mem::replace(&mut self.section, section);
            log::debug!("section {:?} -> {:?}", previous, section);
            Some((section, previous))
        } else {
            None
        };

        SceneTick { rendered, section_change }
    }
}
