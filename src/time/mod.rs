//! Timekeeping for the frame loop
//!
//! Every component takes `now` in seconds as a plain `f64`; this module
//! only decides where that number comes from and how often ticks run.

pub mod clock;
pub mod step;

pub use clock::FrameClock;
pub use step::{FixedStep, MAX_STEPS_PER_UPDATE};
