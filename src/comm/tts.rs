//! Word stream published by the external text-to-speech engine
//!
//! The speech engine overwrites the stream file with the word it is about to
//! speak, and finally with the `TTSOver` sentinel.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use super::types::{CommError, CommResult};
use crate::io::{read_text_lossy, write_atomic};

/// Sentinel written once speech has finished. Compared exactly.
pub const TTS_OVER: &str = "TTSOver";

/// Latest token seen on the speech stream
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TtsToken {
    /// Nothing published (or an unreadable stream)
    #[default]
    Empty,
    /// A word or short phrase, as written by the speech engine
    Text(String),
    /// Speech has finished; no further tokens follow
    Over,
}

impl TtsToken {
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() {
            TtsToken::Empty
        } else if raw == TTS_OVER {
            TtsToken::Over
        } else {
            TtsToken::Text(raw)
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, TtsToken::Over)
    }

    pub fn as_str(&self) -> &str {
        match self {
            TtsToken::Empty => "",
            TtsToken::Text(text) => text,
            TtsToken::Over => TTS_OVER,
        }
    }
}

/// Read side of the speech stream
pub trait TtsSource {
    /// Latest published token. Never blocks, never fails.
    fn read(&mut self) -> TtsToken;
    /// Clear the stream. Called once at startup.
    fn reset(&mut self) -> CommResult<()>;
}

/// Speech stream backed by the shared stream file
#[derive(Debug, Clone)]
pub struct FileTtsStream {
    path: PathBuf,
}

impl FileTtsStream {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TtsSource for FileTtsStream {
    fn read(&mut self) -> TtsToken {
        match read_text_lossy(&self.path) {
            Ok(text) => TtsToken::from_raw(text),
            Err(err) => {
                log::trace!("tts stream {} unreadable: {}", self.path.display(), err);
                TtsToken::Empty
            }
        }
    }

    fn reset(&mut self) -> CommResult<()> {
        write_atomic(&self.path, b"").map_err(|source| CommError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory speech stream. Holds the latest token like the file does.
#[derive(Debug, Clone, Default)]
pub struct MemoryTtsStream {
    latest: Arc<Mutex<String>>,
}

impl MemoryTtsStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for the producing side
    pub fn writer(&self) -> TtsWriter {
        TtsWriter {
            latest: Arc::clone(&self.latest),
        }
    }
}

impl TtsSource for MemoryTtsStream {
    fn read(&mut self) -> TtsToken {
        TtsToken::from_raw(self.latest.lock().clone())
    }

    fn reset(&mut self) -> CommResult<()> {
        self.latest.lock().clear();
        Ok(())
    }
}

/// Producer handle for a [`MemoryTtsStream`]
#[derive(Debug, Clone)]
pub struct TtsWriter {
    latest: Arc<Mutex<String>>,
}

impl TtsWriter {
    pub fn speak(&self, word: &str) {
        *self.latest.lock() = word.to_string();
    }

    pub fn finish(&self) {
        self.speak(TTS_OVER);
    }
}
