//! Takeover-request orchestration
//!
//! [`TorController`] owns the reading presenter and decides each frame
//! whether the task runs, is interrupted by a takeover request, or is done.
//! Its output is a [`HudFrame`] describing text and styling.

pub mod controller;
pub mod hud;

pub use controller::{PauseStage, TorController, TorState, DEFAULT_RESUME_DELAY};
pub use hud::{HudColor, HudFrame, HudLayout, COMPLETE_TEXT, EMERGENCY_TEXT, RESUMING_TEXT};
