//! Scrolling text presentation: a window of lines that shifts upward

use std::collections::VecDeque;

use super::sentence::{LineComposer, HEADER_LINE};
use super::{PresentationMode, PresenterFrame, TextPresenter};
use crate::comm::{TtsSource, TtsToken};

/// Empty lines generated after the corpus ran out before the task counts as
/// read. Enough to scroll the last text out of the window.
pub const EMPTY_LINES_TO_COMPLETE: u32 = 4;

const HEADER_LINES: usize = 2;

/// Index of the first text line below the headers
const TRACKED_LINE: usize = 2;

/// Window state shared by both scrolling variants
#[derive(Debug)]
struct LineWindow {
    composer: LineComposer,
    lines: VecDeque<String>,
    text_lines: usize,
}

impl LineWindow {
    fn new(composer: LineComposer, text_lines: usize) -> Self {
        Self {
            composer,
            lines: VecDeque::with_capacity(HEADER_LINES + text_lines),
            text_lines,
        }
    }

    fn fill(&mut self) {
        self.lines.clear();
        for _ in 0..HEADER_LINES {
            self.lines.push_back(HEADER_LINE.to_string());
        }
        for _ in 0..self.text_lines {
            let line = self.composer.generate();
            self.lines.push_back(line.text);
        }
    }

    fn shift(&mut self) {
        self.lines.pop_front();
        let line = self.composer.generate();
        self.lines.push_back(line.text);
    }

    fn text(&self) -> String {
        self.lines.iter().map(String::as_str).collect()
    }

    fn is_read(&self) -> bool {
        self.composer.empty_generations() >= EMPTY_LINES_TO_COMPLETE
    }

    fn tracked_line_contains(&self, token: &str) -> bool {
        let needle = token.to_lowercase();
        self.lines
            .get(TRACKED_LINE)
            .map_or(false, |line| line.to_lowercase().contains(&needle))
    }
}

/// Scrolls one line at a time, paced by the reading time of the lines.
///
/// Each shift is scheduled with the oldest unconsumed line duration, so the
/// pacing lags the lines entering the window by the window height.
#[derive(Debug)]
pub struct StpTimed {
    window: LineWindow,
    next_shift_at: Option<f64>,
}

impl StpTimed {
    pub fn new(composer: LineComposer, text_lines: usize) -> Self {
        Self {
            window: LineWindow::new(composer, text_lines),
            next_shift_at: None,
        }
    }

    /// Time of the next scheduled shift; `None` before the first tick
    pub fn next_shift_at(&self) -> Option<f64> {
        self.next_shift_at
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.window.lines.iter().map(String::as_str)
    }

    fn schedule(&mut self, now: f64) {
        let wait = self.window.composer.next_duration().unwrap_or(0.0);
        self.next_shift_at = Some(now + wait);
    }
}

impl TextPresenter for StpTimed {
    fn tick(&mut self, now: f64) -> PresenterFrame {
        match self.next_shift_at {
            None => {
                self.window.fill();
                self.schedule(now);
            }
            Some(at) if at <= now && !self.window.is_read() => {
                self.window.shift();
                self.schedule(now);
            }
            Some(_) => {}
        }
        PresenterFrame {
            text: self.window.text(),
            complete: self.window.is_read(),
        }
    }

    fn mode(&self) -> PresentationMode {
        PresentationMode::Stp
    }

    fn name(&self) -> &'static str {
        "stp"
    }
}

/// Scrolls when the speech engine has moved past the first text line.
///
/// A shift needs a single-word token absent from the tracked line, and the
/// latch armed by an earlier tick that did not shift. Any tick that does not
/// shift arms the latch; it is never cleared.
pub struct StpSpoken {
    window: LineWindow,
    stream: Box<dyn TtsSource>,
    started: bool,
    armed: bool,
    complete: bool,
}

impl StpSpoken {
    pub fn new(composer: LineComposer, text_lines: usize, stream: Box<dyn TtsSource>) -> Self {
        Self {
            window: LineWindow::new(composer, text_lines),
            stream,
            started: false,
            armed: false,
            complete: false,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.window.lines.iter().map(String::as_str)
    }

    fn should_shift(&self, token: &TtsToken) -> bool {
        let raw = match token {
            TtsToken::Text(text) => text.as_str(),
            TtsToken::Empty | TtsToken::Over => return false,
        };
        let single_word = raw.split(' ').filter(|w| !w.is_empty()).count() == 1;
        single_word && self.armed && !self.window.tracked_line_contains(raw)
    }
}

impl TextPresenter for StpSpoken {
    fn tick(&mut self, _now: f64) -> PresenterFrame {
        if !self.complete {
            let token = self.stream.read();
            if !self.started {
                self.window.fill();
                self.started = true;
            } else if !token.is_over() {
                if self.should_shift(&token) {
                    self.window.shift();
                } else {
                    self.armed = true;
                }
            }
            if token.is_over() {
                self.complete = true;
            }
        }
        PresenterFrame {
            text: self.window.text(),
            complete: self.complete,
        }
    }

    fn mode(&self) -> PresentationMode {
        PresentationMode::Stp
    }

    fn name(&self) -> &'static str {
        "stp-tts"
    }
}
