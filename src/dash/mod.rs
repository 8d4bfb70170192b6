//! Dashboard and control-surface animation
//!
//! Pure per-frame helpers: speed conversion, blinker timing, gear state and
//! the steering wheel animator. [`Dashboard`] combines the first three into
//! the readout drawn next to the HUD.

pub mod gear;
pub mod speedometer;
pub mod steering;
pub mod turn_signal;

pub use gear::{Gear, GearIndicator};
pub use speedometer::{SpeedConverter, SpeedUnit};
pub use steering::{SteeringParams, SteeringWheelAnimator};
pub use turn_signal::{TurnIndicator, TurnSignalTimer};

use crate::sound::{AudioSink, SoundCue};

/// Dashboard text for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashReadout {
    pub speed: i32,
    pub unit: SpeedUnit,
    pub turn: TurnIndicator,
    pub gear: Gear,
}

impl DashReadout {
    pub fn speed_text(&self) -> String {
        self.speed.to_string()
    }

    pub fn turn_text(&self) -> &'static str {
        self.turn.glyph()
    }

    pub fn gear_text(&self) -> &'static str {
        self.gear.glyph()
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    speed: SpeedConverter,
    turn_signals: TurnSignalTimer,
    gear: GearIndicator,
    turn_signals_enabled: bool,
}

impl Dashboard {
    pub fn new(unit: SpeedUnit, turn_signal_duration: f64, turn_signals_enabled: bool) -> Self {
        Self {
            speed: SpeedConverter::new(unit),
            turn_signals: TurnSignalTimer::new(turn_signal_duration),
            gear: GearIndicator::new(),
            turn_signals_enabled,
        }
    }

    pub fn signal_left(&mut self, now: f64, audio: &mut dyn AudioSink) {
        if self.turn_signals_enabled {
            self.turn_signals.activate_left(now);
            audio.play(SoundCue::TurnSignal);
        }
    }

    pub fn signal_right(&mut self, now: f64, audio: &mut dyn AudioSink) {
        if self.turn_signals_enabled {
            self.turn_signals.activate_right(now);
            audio.play(SoundCue::TurnSignal);
        }
    }

    pub fn toggle_reverse(&mut self, audio: &mut dyn AudioSink) -> Gear {
        let gear = self.gear.toggle_reverse();
        log::debug!("gear changed to {}", gear.glyph());
        audio.play(SoundCue::GearShift);
        gear
    }

    pub fn readout(&self, now: f64, speed_cm_s: f64) -> DashReadout {
        DashReadout {
            speed: self.speed.convert(speed_cm_s),
            unit: self.speed.unit(),
            turn: self.turn_signals.display(now),
            gear: self.gear.gear(),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(SpeedUnit::Mph, 3.0, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound::NullAudio;

    #[test]
    fn test_readout() {
        let mut audio = NullAudio::new();
        let mut dash = Dashboard::new(SpeedUnit::Kph, 3.0, true);
        dash.signal_right(1.0, &mut audio);
        let readout = dash.readout(2.0, 1000.0);
        assert_eq!(readout.speed_text(), "36");
        assert_eq!(readout.turn_text(), ">>>");
        assert_eq!(readout.gear_text(), "D");
        assert_eq!(audio.start_count(SoundCue::TurnSignal), 1);
    }

    #[test]
    fn test_disabled_turn_signals_stay_blank() {
        let mut audio = NullAudio::new();
        let mut dash = Dashboard::new(SpeedUnit::Mph, 3.0, false);
        dash.signal_left(0.0, &mut audio);
        assert_eq!(dash.readout(0.5, 0.0).turn, TurnIndicator::None);
        assert!(audio.started().is_empty());
    }

    #[test]
    fn test_reverse_plays_gear_cue() {
        let mut audio = NullAudio::new();
        let mut dash = Dashboard::default();
        assert_eq!(dash.toggle_reverse(&mut audio), Gear::Reverse);
        assert_eq!(dash.readout(0.0, 0.0).gear_text(), "R");
        assert_eq!(audio.started(), &[SoundCue::GearShift]);
    }
}
