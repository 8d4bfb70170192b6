//! Rapid serial visual presentation: one word at a time

use super::corpus::TextCorpus;
use super::sentence::word_interval;
use super::{PresentationMode, PresenterFrame, TextPresenter};
use crate::comm::{TtsSource, TtsToken};

/// Shows each word for a fixed interval derived from the reading rate.
#[derive(Debug)]
pub struct RsvpTimed {
    corpus: TextCorpus,
    interval: f64,
    next_at: Option<f64>,
    shown: String,
}

impl RsvpTimed {
    pub fn new(corpus: TextCorpus, wpm: u32) -> Self {
        Self {
            corpus,
            interval: word_interval(wpm),
            next_at: None,
            shown: String::new(),
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }
}

impl TextPresenter for RsvpTimed {
    fn tick(&mut self, now: f64) -> PresenterFrame {
        let due = self.next_at.map_or(true, |at| at <= now);
        if due {
            if let Some(word) = self.corpus.next_word() {
                self.shown = word.to_string();
                self.next_at = Some(now + self.interval);
            }
        }
        PresenterFrame {
            text: self.shown.clone(),
            complete: self.corpus.is_exhausted(),
        }
    }

    fn mode(&self) -> PresentationMode {
        PresentationMode::Rsvp
    }

    fn name(&self) -> &'static str {
        "rsvp"
    }
}

/// Shows whatever word the speech engine last published.
pub struct RsvpSpoken {
    stream: Box<dyn TtsSource>,
    shown: String,
    complete: bool,
}

impl RsvpSpoken {
    pub fn new(stream: Box<dyn TtsSource>) -> Self {
        Self {
            stream,
            shown: String::new(),
            complete: false,
        }
    }
}

impl TextPresenter for RsvpSpoken {
    fn tick(&mut self, _now: f64) -> PresenterFrame {
        if !self.complete {
            match self.stream.read() {
                TtsToken::Over => self.complete = true,
                TtsToken::Text(word) => self.shown = word,
                TtsToken::Empty => {}
            }
        }
        PresenterFrame {
            text: self.shown.clone(),
            complete: self.complete,
        }
    }

    fn mode(&self) -> PresentationMode {
        PresentationMode::Rsvp
    }

    fn name(&self) -> &'static str {
        "rsvp-tts"
    }
}
