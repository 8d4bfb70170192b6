//! Rodio-backed sound cues
//!
//! Cues are synthesized tones. The output stream lives on a dedicated thread
//! since rodio's `OutputStream` is not `Send`; the sink talks to it over a
//! channel.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::Mutex;
use rodio::source::SineWave;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

use super::{AudioSink, SoundCue};

enum AudioCommand {
    Play(SoundCue),
    Stop(SoundCue),
    Shutdown,
}

/// Audio sink playing through the default output device
pub struct RodioAudio {
    tx: Sender<AudioCommand>,
    playing: Arc<Mutex<HashSet<SoundCue>>>,
    thread: Option<JoinHandle<()>>,
}

impl RodioAudio {
    /// Start the audio thread.
    ///
    /// If no output device opens, the thread exits and cues are dropped.
    pub fn start() -> Self {
        let (tx, rx) = channel::unbounded();
        let playing = Arc::new(Mutex::new(HashSet::new()));
        let shared = Arc::clone(&playing);
        let thread = thread::Builder::new()
            .name("audio".into())
            .spawn(move || audio_thread_main(rx, shared))
            .map_err(|err| log::warn!("audio thread failed to start: {}", err))
            .ok();
        Self {
            tx,
            playing,
            thread,
        }
    }
}

impl AudioSink for RodioAudio {
    fn play(&mut self, cue: SoundCue) {
        if cue.loops() {
            self.playing.lock().insert(cue);
        }
        let _ = self.tx.send(AudioCommand::Play(cue));
    }

    fn stop(&mut self, cue: SoundCue) {
        self.playing.lock().remove(&cue);
        let _ = self.tx.send(AudioCommand::Stop(cue));
    }

    fn is_playing(&self, cue: SoundCue) -> bool {
        self.playing.lock().contains(&cue)
    }
}

impl Drop for RodioAudio {
    fn drop(&mut self) {
        let _ = self.tx.send(AudioCommand::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

fn audio_thread_main(rx: Receiver<AudioCommand>, playing: Arc<Mutex<HashSet<SoundCue>>>) {
    let (_stream, handle) = match OutputStream::try_default() {
        Ok(pair) => pair,
        Err(err) => {
            log::warn!("audio output unavailable: {}", err);
            playing.lock().clear();
            return;
        }
    };
    log::debug!("audio output stream opened");

    let mut sinks: HashMap<SoundCue, Sink> = HashMap::new();
    while let Ok(cmd) = rx.recv() {
        match cmd {
            AudioCommand::Play(cue) => {
                if let Some(sink) = start_cue(&handle, cue) {
                    if let Some(old) = sinks.insert(cue, sink) {
                        old.stop();
                    }
                }
            }
            AudioCommand::Stop(cue) => {
                if let Some(sink) = sinks.remove(&cue) {
                    sink.stop();
                }
            }
            AudioCommand::Shutdown => break,
        }
        sinks.retain(|_, sink| !sink.empty());
    }
    log::debug!("audio thread exiting");
}

fn start_cue(handle: &OutputStreamHandle, cue: SoundCue) -> Option<Sink> {
    let sink = match Sink::try_new(handle) {
        Ok(sink) => sink,
        Err(err) => {
            log::warn!("cannot play {}: {}", cue, err);
            return None;
        }
    };
    match cue {
        SoundCue::TorAlert => sink.append(SineWave::new(880.0).amplify(0.25)),
        SoundCue::TurnSignal => sink.append(
            SineWave::new(1400.0)
                .take_duration(Duration::from_millis(40))
                .amplify(0.2),
        ),
        SoundCue::GearShift => sink.append(
            SineWave::new(660.0)
                .take_duration(Duration::from_millis(120))
                .amplify(0.2),
        ),
    }
    Some(sink)
}
