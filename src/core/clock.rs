use std::time::{Duration, Instant};

/// Wall clock for a capture batch - lap time per frame and total elapsed
#[derive(Debug)]
pub struct Clock {
    started: Instant,
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_tick: now,
        }
    }

    /// Time since the last tick (or creation), advancing the lap
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let lap = now.duration_since(self.last_tick);
        self.last_tick = now;
        lap
    }

    /// Time since the clock was created
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
