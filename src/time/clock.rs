// Frame Clock
// Monotonic seconds for the per-frame tick

use std::time::{Duration, Instant};

/// Source of the `now` passed to every tick.
///
/// A real clock reads the monotonic system clock; a simulated one only moves
/// when advanced, which lets the runner go faster than real time.
#[derive(Debug, Clone)]
pub enum FrameClock {
    Real { start: Instant },
    Simulated { now: f64 },
}

impl FrameClock {
    pub fn real() -> Self {
        FrameClock::Real {
            start: Instant::now(),
        }
    }

    pub fn simulated() -> Self {
        FrameClock::Simulated { now: 0.0 }
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self, FrameClock::Simulated { .. })
    }

    /// Seconds since the clock was created
    pub fn now(&self) -> f64 {
        match self {
            FrameClock::Real { start } => start.elapsed().as_secs_f64(),
            FrameClock::Simulated { now } => *now,
        }
    }

    /// Move a simulated clock forward. Real clocks ignore this.
    pub fn advance(&mut self, dt: f64) {
        if let FrameClock::Simulated { now } = self {
            *now += dt.max(0.0);
        }
    }

    /// Wait until `deadline` on a real clock; a simulated clock jumps there.
    pub fn wait_until(&mut self, deadline: f64) {
        match self {
            FrameClock::Real { start } => {
                let elapsed = start.elapsed().as_secs_f64();
                if deadline > elapsed {
                    std::thread::sleep(Duration::from_secs_f64(deadline - elapsed));
                }
            }
            FrameClock::Simulated { now } => {
                if deadline > *now {
                    *now = deadline;
                }
            }
        }
    }
}
