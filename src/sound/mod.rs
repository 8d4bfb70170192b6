//! Cockpit sound cues
//!
//! # Architecture
//!
//! - [`SoundCue`] names the few sounds the HUD can make
//! - [`AudioSink`] is what the controller and dashboard call
//! - [`NullAudio`] records playback state without output; used headless and
//!   in tests
//! - `rodio_audio` (feature `rodio-audio`) plays synthesized tones on a
//!   dedicated audio thread

pub mod null;
#[cfg(feature = "rodio-audio")]
pub mod rodio_audio;

pub use null::NullAudio;
#[cfg(feature = "rodio-audio")]
pub use rodio_audio::RodioAudio;

use std::fmt;

/// Sounds the cockpit can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Takeover request alarm; loops until stopped
    TorAlert,
    /// Indicator click on activation
    TurnSignal,
    /// Gear change chime
    GearShift,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::TorAlert, SoundCue::TurnSignal, SoundCue::GearShift];

    /// Whether the cue keeps playing until stopped
    pub fn loops(self) -> bool {
        matches!(self, SoundCue::TorAlert)
    }
}

impl fmt::Display for SoundCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SoundCue::TorAlert => "tor-alert",
            SoundCue::TurnSignal => "turn-signal",
            SoundCue::GearShift => "gear-shift",
        };
        f.write_str(name)
    }
}

/// Output for sound cues. Calls never block and never fail; a backend that
/// cannot play logs and carries on.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
    fn stop(&mut self, cue: SoundCue);
    fn is_playing(&self, cue: SoundCue) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_alert_loops() {
        assert!(SoundCue::TorAlert.loops());
        assert!(!SoundCue::TurnSignal.loops());
        assert!(!SoundCue::GearShift.loops());
    }

    #[test]
    fn test_cue_display() {
        assert_eq!(SoundCue::TorAlert.to_string(), "tor-alert");
        assert_eq!(SoundCue::GearShift.to_string(), "gear-shift");
    }
}
