//! Reading task lifecycle around takeover requests

use std::fmt;

use super::hud::HudFrame;
use crate::comm::{Signal, SignalChannel};
use crate::sound::{AudioSink, SoundCue};
use crate::text::TextPresenter;

/// Seconds the resuming notice stays up after a takeover is acknowledged
pub const DEFAULT_RESUME_DELAY: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PauseStage {
    /// Alert sounding, waiting for the driver to take over
    AwaitingTakeover,
    /// Takeover done; the task resumes at `deadline`
    Resuming { deadline: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TorState {
    #[default]
    Idle,
    Running,
    Paused(PauseStage),
    Complete,
}

impl fmt::Display for TorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TorState::Idle => write!(f, "idle"),
            TorState::Running => write!(f, "running"),
            TorState::Paused(PauseStage::AwaitingTakeover) => write!(f, "paused (awaiting takeover)"),
            TorState::Paused(PauseStage::Resuming { deadline }) => {
                write!(f, "paused (resuming at {:.2})", deadline)
            }
            TorState::Complete => write!(f, "complete"),
        }
    }
}

/// Drives the presenter and reacts to the control process.
///
/// The signal channel is read once per tick. The presenter only advances
/// while running.
pub struct TorController {
    state: TorState,
    presenter: Box<dyn TextPresenter>,
    resume_delay: f64,
    completion_sent: bool,
}

impl TorController {
    pub fn new(presenter: Box<dyn TextPresenter>, resume_delay: f64) -> Self {
        Self {
            state: TorState::Idle,
            presenter,
            resume_delay,
            completion_sent: false,
        }
    }

    pub fn state(&self) -> TorState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == TorState::Complete
    }

    pub fn presenter_name(&self) -> &'static str {
        self.presenter.name()
    }

    pub fn tick(
        &mut self,
        now: f64,
        channel: &mut dyn SignalChannel,
        audio: &mut dyn AudioSink,
    ) -> HudFrame {
        if self.state == TorState::Complete {
            self.send_completion(channel);
            return HudFrame::complete();
        }

        let signal = channel.receive();
        if let Some(signal) = signal {
            log::debug!("signal {:?} while {}", signal, self.state);
        }

        match self.state {
            TorState::Idle => {
                if signal == Some(Signal::NdrtStart) {
                    self.transition(TorState::Running);
                    self.run(now, channel)
                } else {
                    self.blank()
                }
            }
            TorState::Running => {
                if signal == Some(Signal::TorIssued) {
                    self.transition(TorState::Paused(PauseStage::AwaitingTakeover));
                    Self::sound_alert(audio);
                    HudFrame::emergency()
                } else {
                    self.run(now, channel)
                }
            }
            TorState::Paused(PauseStage::AwaitingTakeover) => {
                if signal == Some(Signal::TorComplete) {
                    audio.stop(SoundCue::TorAlert);
                    let deadline = now + self.resume_delay;
                    self.transition(TorState::Paused(PauseStage::Resuming { deadline }));
                    HudFrame::resuming()
                } else {
                    Self::sound_alert(audio);
                    HudFrame::emergency()
                }
            }
            TorState::Paused(PauseStage::Resuming { deadline }) => {
                if signal == Some(Signal::TorIssued) {
                    self.transition(TorState::Paused(PauseStage::AwaitingTakeover));
                    Self::sound_alert(audio);
                    HudFrame::emergency()
                } else if now < deadline {
                    HudFrame::resuming()
                } else {
                    self.transition(TorState::Running);
                    self.blank()
                }
            }
            TorState::Complete => HudFrame::complete(),
        }
    }

    fn run(&mut self, now: f64, channel: &mut dyn SignalChannel) -> HudFrame {
        let frame = self.presenter.tick(now);
        if frame.complete {
            self.transition(TorState::Complete);
            self.send_completion(channel);
            return HudFrame::complete();
        }
        HudFrame::reading(frame.text, self.presenter.mode())
    }

    fn blank(&self) -> HudFrame {
        HudFrame::reading(String::new(), self.presenter.mode())
    }

    fn sound_alert(audio: &mut dyn AudioSink) {
        if !audio.is_playing(SoundCue::TorAlert) {
            audio.play(SoundCue::TorAlert);
        }
    }

    fn send_completion(&mut self, channel: &mut dyn SignalChannel) {
        if self.completion_sent {
            return;
        }
        match channel.send(Signal::NdrtComplete) {
            Ok(()) => self.completion_sent = true,
            Err(err) => log::warn!("failed to report task completion: {}", err),
        }
    }

    fn transition(&mut self, next: TorState) {
        log::info!("{} -> {} ({})", self.state, next, self.presenter.name());
        self.state = next;
    }
}
