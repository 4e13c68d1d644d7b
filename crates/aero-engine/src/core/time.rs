/// Monotonic elapsed-time clock owned by the frame loop.
/// Reset only when a scene session starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    elapsed: f32,
    frames: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame. Negative deltas are ignored.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
        self.frames += 1;
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.frames = 0;
    }

    /// Seconds since the last reset.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Frames ticked since the last reset.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Fixed-interval accumulator.
/// Turns variable frame deltas into a count of whole intervals, like `setInterval`.
#[derive(Debug, Clone, Copy)]
pub struct IntervalTimer {
    /// Interval length in seconds.
    interval: f32,
    /// Time carried over from previous frames.
    accumulator: f32,
}

impl IntervalTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of intervals that elapsed.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if self.interval <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt.max(0.0);
        let steps = (self.accumulator / self.interval) as u32;
        self.accumulator -= steps as f32 * self.interval;
        steps
    }

    /// Fraction of the current interval already elapsed (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        if self.interval <= 0.0 {
            0.0
        } else {
            self.accumulator / self.interval
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
