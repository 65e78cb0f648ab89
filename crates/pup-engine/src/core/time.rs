/// Wall-clock frame timer.
/// Turns absolute timestamps into per-tick deltas for the simulation.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Timestamp of the previous tick, in seconds.
    previous: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tick at `now` seconds and return the time since the previous
    /// one. The first tick returns 0.0. A clock going backwards yields 0.0.
    pub fn tick(&mut self, now: f64) -> f64 {
        let dt = match self.previous {
            Some(previous) => (now - previous).max(0.0),
            None => 0.0,
        };
        self.previous = Some(now);
        dt
    }

    /// Forget the previous timestamp (e.g. after the game was paused).
    pub fn reset(&mut self) {
        self.previous = None;
    }
}
