//! Line generation for the scrolling presentation

use std::collections::VecDeque;

use super::corpus::TextCorpus;

/// Blank line placed above the generated text when the window is filled
pub const HEADER_LINE: &str = " \n";

/// Seconds one word stays on screen at the given reading rate
pub fn word_interval(wpm: u32) -> f64 {
    60.0 / f64::from(wpm.max(1))
}

/// One generated line of the scrolling window
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Words each followed by a space, then a newline
    pub text: String,
    pub word_count: usize,
    /// Characters in the words, not counting separators
    pub char_count: usize,
    /// Reading time for this line at the configured rate
    pub duration: f64,
}

impl Sentence {
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

/// Greedy line builder over a corpus.
///
/// Every generated line records its reading time in a queue. Consumers pop
/// that queue independently of the lines they display.
#[derive(Debug, Clone)]
pub struct LineComposer {
    corpus: TextCorpus,
    char_limit: usize,
    wpm: u32,
    durations: VecDeque<f64>,
    empty_generations: u32,
}

impl LineComposer {
    pub fn new(corpus: TextCorpus, char_limit: usize, wpm: u32) -> Self {
        Self {
            corpus,
            char_limit,
            wpm,
            durations: VecDeque::new(),
            empty_generations: 0,
        }
    }

    /// Build the next line.
    ///
    /// Words are taken while the running character total stays below the
    /// limit. A word that alone reaches the limit still gets its own line.
    /// Once the corpus is exhausted every call yields an empty line.
    pub fn generate(&mut self) -> Sentence {
        let mut text = String::new();
        let mut word_count = 0;
        let mut char_count = 0;

        while let Some(word) = self.corpus.peek() {
            let len = word.chars().count();
            if word_count > 0 && char_count + len >= self.char_limit {
                break;
            }
            text.push_str(word);
            text.push(' ');
            char_count += len;
            word_count += 1;
            self.corpus.advance();
        }
        text.push('\n');

        if word_count == 0 {
            self.empty_generations += 1;
        }

        let duration = word_interval(self.wpm) * word_count as f64;
        self.durations.push_back(duration);

        Sentence {
            text,
            word_count,
            char_count,
            duration,
        }
    }

    /// Oldest recorded line duration not yet consumed
    pub fn next_duration(&mut self) -> Option<f64> {
        self.durations.pop_front()
    }

    pub fn pending_durations(&self) -> usize {
        self.durations.len()
    }

    /// Number of lines generated after the corpus ran out
    pub fn empty_generations(&self) -> u32 {
        self.empty_generations
    }

    pub fn corpus(&self) -> &TextCorpus {
        &self.corpus
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }
}
