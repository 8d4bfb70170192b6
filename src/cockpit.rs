//! Ego-vehicle cockpit: the per-frame entry point
//!
//! [`EgoCockpit`] owns everything that changes frame to frame: the
//! takeover controller with its presenter, the dashboard and the steering
//! wheel. The host calls [`EgoCockpit::tick`] once per frame and draws the
//! returned [`CockpitFrame`].

use crate::comm::{FileSignalChannel, FileTtsStream, Signal, SignalChannel, TtsSource};
use crate::config::Options;
use crate::dash::{Dashboard, DashReadout, SteeringWheelAnimator};
use crate::resource::{ContentPaths, Settings};
use crate::sound::AudioSink;
use crate::text::{build_presenter, PresenterConfig, TextCorpus};
use crate::tor::{HudFrame, TorController, TorState};

/// Driver inputs sampled by the host for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VehicleInputs {
    /// Forward speed in cm/s
    pub speed_cm_s: f64,
    /// Raw steering input, -1..1 at unit scale
    pub steering: f64,
    /// Left blinker pressed this frame
    pub turn_signal_left: bool,
    /// Right blinker pressed this frame
    pub turn_signal_right: bool,
    /// Reverse toggle pressed this frame
    pub toggled_reverse: bool,
    /// A force-feedback wheel reports its own angle
    pub direct_drive: bool,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct CockpitFrame {
    pub hud: HudFrame,
    pub dash: DashReadout,
    pub steering_angle: f64,
    pub state: TorState,
}

pub struct EgoCockpit {
    controller: TorController,
    channel: Box<dyn SignalChannel>,
    audio: Box<dyn AudioSink>,
    dashboard: Dashboard,
    wheel: SteeringWheelAnimator,
    settings: Settings,
    full_text: String,
}

impl EgoCockpit {
    /// Start against the shared files under `paths`.
    ///
    /// Resets the signal file and clears the speech stream, then reads the
    /// study settings and the corpus they name. Files that cannot be written
    /// or read are logged; the cockpit still starts.
    pub fn start(opts: &Options, paths: &ContentPaths, audio: Box<dyn AudioSink>) -> Self {
        let mut channel = FileSignalChannel::new(paths.signal_file());
        let mut stream = FileTtsStream::new(paths.tts_stream_file());
        reset_channels(&mut channel, &mut stream);

        let settings = Settings::load(&paths.settings_file());
        let corpus = TextCorpus::load(&paths.text_file(&settings.text_file));
        Self::assemble(
            opts,
            settings,
            corpus,
            Box::new(channel),
            Box::new(stream),
            audio,
        )
    }

    /// Start with already loaded settings and explicit channels.
    pub fn start_with(
        opts: &Options,
        settings: Settings,
        corpus: TextCorpus,
        mut channel: Box<dyn SignalChannel>,
        mut stream: Box<dyn TtsSource>,
        audio: Box<dyn AudioSink>,
    ) -> Self {
        reset_channels(channel.as_mut(), stream.as_mut());
        Self::assemble(opts, settings, corpus, channel, stream, audio)
    }

    fn assemble(
        opts: &Options,
        settings: Settings,
        corpus: TextCorpus,
        channel: Box<dyn SignalChannel>,
        stream: Box<dyn TtsSource>,
        audio: Box<dyn AudioSink>,
    ) -> Self {
        let full_text = corpus.full_text().to_string();
        let word_count = corpus.len();
        let config = PresenterConfig {
            mode: settings.mode(),
            tts: settings.tts,
            wpm: settings.wpm,
            char_limit: opts.char_limit,
            timed_lines: opts.timed_lines,
            spoken_lines: opts.spoken_lines,
        };
        let presenter = build_presenter(&config, corpus, stream);
        log::info!(
            "reading task ready: {} (tts {}, {} wpm, {} words from {})",
            config.mode,
            config.tts,
            config.wpm,
            word_count,
            settings.text_file
        );

        Self {
            controller: TorController::new(presenter, opts.resume_delay),
            channel,
            audio,
            dashboard: Dashboard::new(
                opts.speed_unit,
                opts.turn_signal_duration,
                opts.enable_turn_signals,
            ),
            wheel: SteeringWheelAnimator::new(opts.steering),
            settings,
            full_text,
        }
    }

    /// Advance one frame. `now` is monotonic seconds, `dt` the frame length.
    pub fn tick(&mut self, now: f64, dt: f64, inputs: &VehicleInputs) -> CockpitFrame {
        let hud = self
            .controller
            .tick(now, self.channel.as_mut(), self.audio.as_mut());

        if inputs.turn_signal_left {
            self.dashboard.signal_left(now, self.audio.as_mut());
        }
        if inputs.turn_signal_right {
            self.dashboard.signal_right(now, self.audio.as_mut());
        }
        if inputs.toggled_reverse {
            self.dashboard.toggle_reverse(self.audio.as_mut());
        }

        CockpitFrame {
            hud,
            dash: self.dashboard.readout(now, inputs.speed_cm_s),
            steering_angle: self.wheel.tick(inputs.steering, dt, inputs.direct_drive),
            state: self.controller.state(),
        }
    }

    pub fn state(&self) -> TorState {
        self.controller.state()
    }

    pub fn is_complete(&self) -> bool {
        self.controller.is_complete()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Corpus text with lines joined, for a speech engine
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn presenter_name(&self) -> &'static str {
        self.controller.presenter_name()
    }
}

fn reset_channels(channel: &mut dyn SignalChannel, stream: &mut dyn TtsSource) {
    if let Err(err) = channel.send(Signal::Invalid) {
        log::warn!("failed to reset signal channel: {}", err);
    }
    if let Err(err) = stream.reset() {
        log::warn!("failed to clear speech stream: {}", err);
    }
}
