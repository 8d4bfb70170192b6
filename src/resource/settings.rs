//! Study settings shared with the experiment control process
//!
//! The file is free-form text such as:
//!
//! ```text
//! PARTICIPANT_ID: 007
//! TRIAL_NO: 2
//! RSVP: 1
//! WPM: 180
//! TTS: 0
//! TEXTFILE: Text3
//! ```
//!
//! Each value is found by searching for its key with the colon, skipping one
//! separator character, and taking a fixed number of characters. The control process
//! reads the same file the same way.

use std::path::Path;

use crate::io::read_text_lossy;
use crate::text::PresentationMode;

pub const DEFAULT_WPM: u32 = 150;
pub const DEFAULT_TEXT_FILE: &str = "Text1";

/// Key with its colon, and the width of its value
const RSVP: (&str, usize) = ("RSVP:", 1);
const WPM: (&str, usize) = ("WPM:", 3);
const TTS: (&str, usize) = ("TTS:", 1);
const TEXTFILE: (&str, usize) = ("TEXTFILE:", 5);
const PARTICIPANT_ID: (&str, usize) = ("PARTICIPANT_ID:", 3);
const TRIAL_NO: (&str, usize) = ("TRIAL_NO:", 1);
const IGNORE: (&str, usize) = ("IGNORE:", 1);

/// Characters between the colon and the value
const SEPARATOR_WIDTH: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub rsvp: bool,
    pub tts: bool,
    pub wpm: u32,
    /// Corpus basename without the `.txt` extension
    pub text_file: String,
    pub participant_id: Option<String>,
    pub trial_no: Option<u32>,
    pub ignore: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rsvp: false,
            tts: false,
            wpm: DEFAULT_WPM,
            text_file: DEFAULT_TEXT_FILE.to_string(),
            participant_id: None,
            trial_no: None,
            ignore: false,
        }
    }
}

impl Settings {
    /// Read the settings file, falling back to defaults when it is missing.
    pub fn load(path: &Path) -> Self {
        match read_text_lossy(path) {
            Ok(text) => Self::parse(&text),
            Err(err) => {
                log::warn!(
                    "settings {} unavailable ({}), using defaults",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    pub fn parse(text: &str) -> Self {
        let defaults = Self::default();
        let wpm = match field(text, WPM) {
            Some(raw) => match raw.parse::<u32>() {
                Ok(wpm) if wpm > 0 => wpm,
                _ => {
                    log::warn!("invalid WPM {:?}, using {}", raw, DEFAULT_WPM);
                    DEFAULT_WPM
                }
            },
            None => DEFAULT_WPM,
        };

        Self {
            rsvp: field(text, RSVP).map_or(defaults.rsvp, parse_flag),
            tts: field(text, TTS).map_or(defaults.tts, parse_flag),
            wpm,
            text_file: field(text, TEXTFILE)
                .map(str::to_string)
                .unwrap_or(defaults.text_file),
            participant_id: field(text, PARTICIPANT_ID).map(str::to_string),
            trial_no: field(text, TRIAL_NO).and_then(|raw| raw.parse().ok()),
            ignore: field(text, IGNORE).map_or(defaults.ignore, parse_flag),
        }
    }

    pub fn mode(&self) -> PresentationMode {
        if self.rsvp {
            PresentationMode::Rsvp
        } else {
            PresentationMode::Stp
        }
    }
}

/// `"0"` is false; any other value is true.
fn parse_flag(raw: &str) -> bool {
    raw != "0"
}

/// Fixed-width value after a key, trimmed. `None` when the key is absent or
/// the value is blank.
fn field<'a>(text: &'a str, (key, width): (&str, usize)) -> Option<&'a str> {
    let start = find_ignore_case(text, key)? + key.len() + SEPARATOR_WIDTH;
    let rest = text.get(start..)?;
    let end = rest
        .char_indices()
        .nth(width)
        .map_or(rest.len(), |(idx, _)| idx);
    let value = rest[..end].trim();
    (!value.is_empty()).then_some(value)
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
