//! Secondary-task text presentation
//!
//! Four presenters share one interface:
//!
//! - [`RsvpTimed`]: single words at a fixed rate
//! - [`RsvpSpoken`]: single words following the speech stream
//! - [`StpTimed`]: a scrolling window paced by line reading time
//! - [`StpSpoken`]: a scrolling window following the speech stream
//!
//! Presenters are driven by [`TextPresenter::tick`] with the current time in
//! seconds and never block.

pub mod corpus;
pub mod rsvp;
pub mod sentence;
pub mod stp;

pub use corpus::TextCorpus;
pub use rsvp::{RsvpSpoken, RsvpTimed};
pub use sentence::{word_interval, LineComposer, Sentence, HEADER_LINE};
pub use stp::{StpSpoken, StpTimed, EMPTY_LINES_TO_COMPLETE};

use std::fmt;

use crate::comm::TtsSource;

/// What a presenter shows after a tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenterFrame {
    pub text: String,
    pub complete: bool,
}

/// Presentation layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationMode {
    /// One word at a time, centered
    Rsvp,
    /// Several lines scrolling upward
    #[default]
    Stp,
}

impl fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentationMode::Rsvp => write!(f, "RSVP"),
            PresentationMode::Stp => write!(f, "STP"),
        }
    }
}

pub trait TextPresenter {
    /// Advance to `now` and return the text to display.
    fn tick(&mut self, now: f64) -> PresenterFrame;

    fn mode(&self) -> PresentationMode;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Parameters for [`build_presenter`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenterConfig {
    pub mode: PresentationMode,
    pub tts: bool,
    pub wpm: u32,
    pub char_limit: usize,
    /// Text lines in the timed scrolling window
    pub timed_lines: usize,
    /// Text lines in the spoken scrolling window
    pub spoken_lines: usize,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            mode: PresentationMode::Stp,
            tts: false,
            wpm: 150,
            char_limit: 22,
            timed_lines: 4,
            spoken_lines: 3,
        }
    }
}

/// Pick the presenter for a mode and speech setting.
///
/// `stream` is only kept by the spoken variants.
pub fn build_presenter(
    config: &PresenterConfig,
    corpus: TextCorpus,
    stream: Box<dyn TtsSource>,
) -> Box<dyn TextPresenter> {
    let presenter: Box<dyn TextPresenter> = match (config.mode, config.tts) {
        (PresentationMode::Rsvp, false) => Box::new(RsvpTimed::new(corpus, config.wpm)),
        (PresentationMode::Rsvp, true) => Box::new(RsvpSpoken::new(stream)),
        (PresentationMode::Stp, false) => {
            let composer = LineComposer::new(corpus, config.char_limit, config.wpm);
            Box::new(StpTimed::new(composer, config.timed_lines))
        }
        (PresentationMode::Stp, true) => {
            let composer = LineComposer::new(corpus, config.char_limit, config.wpm);
            Box::new(StpSpoken::new(composer, config.spoken_lines, stream))
        }
    };
    log::debug!("built {} presenter", presenter.name());
    presenter
}
