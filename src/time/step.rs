// Fixed Step
// Converts elapsed wall time into a whole number of fixed ticks

/// Ticks run per call at most, so a stall does not turn into a burst
pub const MAX_STEPS_PER_UPDATE: u32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct FixedStep {
    step: f64,
    accumulator: f64,
}

impl FixedStep {
    /// A step of `1 / hz` seconds. Zero is treated as 1 Hz.
    pub fn from_hz(hz: u32) -> Self {
        Self {
            step: 1.0 / f64::from(hz.max(1)),
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Add elapsed time and return how many ticks are due.
    ///
    /// Time beyond [`MAX_STEPS_PER_UPDATE`] ticks is dropped.
    pub fn accumulate(&mut self, elapsed: f64) -> u32 {
        self.accumulator += elapsed.max(0.0);
        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_STEPS_PER_UPDATE {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == MAX_STEPS_PER_UPDATE && self.accumulator >= self.step {
            log::debug!("dropping {:.3}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        steps
    }
}
