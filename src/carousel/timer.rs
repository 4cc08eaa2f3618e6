use std::time::Duration;

/// Recurring frame-time timer driving auto-advance.
///
/// Time only moves when the frame loop feeds it, so a timer that is no longer
/// held by anyone can never fire.
#[derive(Debug, Clone)]
pub struct AutoAdvanceTimer {
    interval: f32,
    elapsed: f32,
}

impl AutoAdvanceTimer {
    pub fn start(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f32(),
            elapsed: 0.0,
        }
    }

    /// Accumulates `dt` seconds and returns how many full intervals elapsed.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.interval <= 0.0 || dt <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }

    #[cfg(test)]
    fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
