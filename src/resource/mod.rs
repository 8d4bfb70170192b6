//! Content files and configuration parsing
//!
//! Everything the HUD reads from disk lives under one content directory:
//!
//! ```text
//! <content>/ConfigFiles/SignalFile.txt
//! <content>/ConfigFiles/TTSStreamFile.txt
//! <content>/ConfigFiles/config.txt
//! <content>/ConfigFiles/<TEXTFILE>.txt
//! ```

pub mod propfile;
pub mod settings;

pub use propfile::{parse_propfile, PropertyError, PropertyFile};
pub use settings::{Settings, DEFAULT_TEXT_FILE, DEFAULT_WPM};

use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "ConfigFiles";

/// Locations of the shared files under a content directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPaths {
    root: PathBuf,
}

impl ContentPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root.join(CONFIG_DIR)
    }

    pub fn signal_file(&self) -> PathBuf {
        self.config_dir().join("SignalFile.txt")
    }

    pub fn tts_stream_file(&self) -> PathBuf {
        self.config_dir().join("TTSStreamFile.txt")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir().join("config.txt")
    }

    /// Corpus file for a `TEXTFILE` basename
    pub fn text_file(&self, name: &str) -> PathBuf {
        self.config_dir().join(format!("{}.txt", name))
    }
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self::new("Content")
    }
}
