//! Preloader: counts to 100% on a fixed interval, then completes once.

use crate::api::config::SiteConfig;
use crate::core::time::IntervalTimer;

pub const FULL_PERCENT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Counting,
    /// Reached 100%; waiting out the exit delay (seconds left).
    Exiting { remaining: f32 },
    Done,
}

/// What happened during one preloader tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreloaderTick {
    pub progress_changed: bool,
    /// True on exactly one tick for the lifetime of the preloader.
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct Preloader {
    progress: u32,
    step: u32,
    exit_delay: f32,
    timer: IntervalTimer,
    phase: Phase,
}

impl Preloader {
    pub fn new(step: u32, interval: f32, exit_delay: f32) -> Self {
        Self {
            progress: 0,
            step,
            exit_delay,
            timer: IntervalTimer::new(interval),
            phase: Phase::Counting,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            config.preloader_step,
            config.preloader_interval,
            config.preloader_exit_delay,
        )
    }

    /// Percentage shown on the progress bar (0..=100).
    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advance by a frame delta.
    pub fn tick(&mut self, dt: f32) -> PreloaderTick {
        let mut out = PreloaderTick::default();
        let mut carry = 0.0;

        match self.phase {
            Phase::Counting => {
                let steps = self.timer.accumulate(dt);
                for i in 0..steps {
                    if self.progress >= FULL_PERCENT {
                        // The exit delay starts at this interval; the rest of
                        // the frame already counts against it.
                        let leftover = (steps - i - 1) as f32 + self.timer.alpha();
                        carry = leftover * self.timer.interval();
                        self.phase = Phase::Exiting { remaining: self.exit_delay };
                        break;
                    }
                    self.progress = (self.progress + self.step).min(FULL_PERCENT);
                    out.progress_changed = true;
                }
            }
            Phase::Exiting { .. } => carry = dt.max(0.0),
            Phase::Done => {}
        }

        if let Phase::Exiting { remaining } = &mut self.phase {
            *remaining -= carry;
            if *remaining <= 0.0 {
                self.phase = Phase::Done;
                out.completed = true;
                log::debug!("preloader complete");
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_in_steps_of_five() {
        let mut p = Preloader::from_config(&SiteConfig::default());
        assert_eq!(p.progress(), 0);
        let t = p.tick(0.05);
        assert!(t.progress_changed);
        assert_eq!(p.progress(), 5);
        let t = p.tick(0.02);
        assert!(!t.progress_changed);
        assert_eq!(p.progress(), 5);
    }

    #[test]
    fn completes_after_delay_exactly_once() {
        let mut p = Preloader::from_config(&SiteConfig::default());
        for _ in 0..20 {
            assert!(!p.tick(0.05).completed);
        }
        assert_eq!(p.progress(), 100);

        // The interval after reaching 100% starts the exit delay.
        assert!(!p.tick(0.05).completed);
        assert!(!p.tick(0.49).completed);
        assert!(!p.is_complete());

        let t = p.tick(0.02);
        assert!(t.completed);
        assert!(p.is_complete());

        for _ in 0..10 {
            assert!(!p.tick(0.5).completed);
        }
        assert_eq!(p.progress(), 100);
    }

    #[test]
    fn one_long_frame_runs_every_interval() {
        let mut p = Preloader::from_config(&SiteConfig::default());
        let t = p.tick(0.51);
        assert!(t.progress_changed);
        assert_eq!(p.progress(), 50);
    }

    #[test]
    fn huge_frame_completes_in_one_tick() {
        let mut p = Preloader::from_config(&SiteConfig::default());
        let t = p.tick(5.0);
        assert!(t.completed);
        assert_eq!(p.progress(), 100);
    }

    #[test]
    fn uneven_step_caps_at_full() {
        let mut p = Preloader::new(30, 0.05, 0.0);
        p.tick(0.21);
        assert_eq!(p.progress(), 100);
    }
}
