//! Reading-task source text

use std::path::Path;

use crate::io::read_text_lossy;

/// Words of the reading text plus a read cursor.
///
/// The words never change after loading; the cursor only moves forward and
/// stops at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextCorpus {
    words: Vec<String>,
    full_text: String,
    cursor: usize,
}

impl TextCorpus {
    /// Load a corpus from a text file.
    ///
    /// A missing or unreadable file yields an empty corpus so the HUD keeps
    /// running; the reading task then completes immediately.
    pub fn load(path: &Path) -> Self {
        match read_text_lossy(path) {
            Ok(text) => {
                let corpus = Self::from_text(&text);
                log::info!(
                    "loaded {} words from {}",
                    corpus.len(),
                    path.display()
                );
                corpus
            }
            Err(err) => {
                log::warn!("reading text {} unavailable: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Build a corpus from raw file contents.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut full_text = String::new();
        for line in lines {
            let line = line.as_ref();
            full_text.push_str(line);
            words.extend(line.split_whitespace().map(str::to_string));
        }
        Self {
            words,
            full_text,
            cursor: 0,
        }
    }

    /// Build a corpus from words that have no source lines. The full text is
    /// the words joined by single spaces.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let full_text = words.join(" ");
        Self {
            words,
            full_text,
            cursor: 0,
        }
    }

    /// Text handed to a speech engine: source lines joined with no separator,
    /// or the words joined by spaces for a corpus built with `from_words`.
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Index of the next unread word
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.words.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.words.len()
    }

    pub fn peek(&self) -> Option<&str> {
        self.words.get(self.cursor).map(String::as_str)
    }

    /// Take the next word and move the cursor past it.
    pub fn next_word(&mut self) -> Option<&str> {
        let word = self.words.get(self.cursor)?;
        self.cursor += 1;
        Some(word.as_str())
    }

    /// Skip the next word, if any.
    pub fn advance(&mut self) {
        if self.cursor < self.words.len() {
            self.cursor += 1;
        }
    }
}
