//! Silent audio sink
//!
//! Keeps track of what would be playing so callers see consistent state
//! without an output device.

use std::collections::HashSet;

use super::{AudioSink, SoundCue};

/// Audio sink that produces no sound.
///
/// One-shot cues are recorded as started but never reported as playing;
/// looping cues play until stopped.
#[derive(Debug, Default, Clone)]
pub struct NullAudio {
    playing: HashSet<SoundCue>,
    started: Vec<SoundCue>,
}

impl NullAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every cue started so far, in order
    pub fn started(&self) -> &[SoundCue] {
        &self.started
    }

    pub fn start_count(&self, cue: SoundCue) -> usize {
        self.started.iter().filter(|&&c| c == cue).count()
    }
}

impl AudioSink for NullAudio {
    fn play(&mut self, cue: SoundCue) {
        log::trace!("null audio: play {}", cue);
        self.started.push(cue);
        if cue.loops() {
            self.playing.insert(cue);
        }
    }

    fn stop(&mut self, cue: SoundCue) {
        log::trace!("null audio: stop {}", cue);
        self.playing.remove(&cue);
    }

    fn is_playing(&self, cue: SoundCue) -> bool {
        self.playing.contains(&cue)
    }
}
