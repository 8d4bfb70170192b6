//! Integer-coded signals exchanged with the experiment control process
//!
//! The legacy deployment shares a single text file holding one decimal
//! integer. Both sides overwrite it and poll it; nothing is locked, so every
//! read is a best-effort snapshot.

use std::fmt;
use std::path::{Path, PathBuf};

use crossbeam::channel::{self, Receiver, Sender};

use super::types::{CommError, CommResult};
use crate::io::{read_text_lossy, write_atomic};

/// Signal codes understood by both processes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum Signal {
    /// The control script is running; start the reading task
    NdrtStart = 0,
    /// A take-over request was issued; pause the reading task
    TorIssued = 1,
    /// The driver took over; the request is fulfilled
    TorComplete = 2,
    /// The reading task ran to the end
    NdrtComplete = 3,
    /// Reset value, also used for anything unreadable
    #[default]
    Invalid = 5,
}

impl Signal {
    /// Map a raw code to a signal. Unknown codes are `Invalid`.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Signal::NdrtStart,
            1 => Signal::TorIssued,
            2 => Signal::TorComplete,
            3 => Signal::NdrtComplete,
            _ => Signal::Invalid,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Decode the text of a signal file.
    pub fn parse(text: &str) -> Self {
        text.trim()
            .parse::<i32>()
            .map(Self::from_code)
            .unwrap_or(Signal::Invalid)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Bidirectional, non-blocking signal exchange with the control process.
///
/// `receive` is called at most once per frame and never blocks. `None` means
/// there is nothing usable this frame.
pub trait SignalChannel {
    fn send(&mut self, signal: Signal) -> CommResult<()>;
    fn receive(&mut self) -> Option<Signal>;
}

/// Signal channel backed by the shared signal file
#[derive(Debug, Clone)]
pub struct FileSignalChannel {
    path: PathBuf,
}

impl FileSignalChannel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the file with the signal's code.
    pub fn write(&self, signal: Signal) -> CommResult<()> {
        write_atomic(&self.path, signal.to_string().as_bytes()).map_err(|source| {
            CommError::Write {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Read the current code. Missing or malformed content reads as `Invalid`.
    pub fn read(&self) -> Signal {
        match read_text_lossy(&self.path) {
            Ok(text) => Signal::parse(&text),
            Err(err) => {
                log::trace!("signal file {} unreadable: {}", self.path.display(), err);
                Signal::Invalid
            }
        }
    }
}

impl SignalChannel for FileSignalChannel {
    fn send(&mut self, signal: Signal) -> CommResult<()> {
        self.write(signal)
    }

    fn receive(&mut self) -> Option<Signal> {
        match self.read() {
            Signal::Invalid => None,
            signal => Some(signal),
        }
    }
}

/// Queue-backed signal channel for deployments without the shared file.
///
/// Unlike the file, each signal is delivered exactly once.
#[derive(Debug)]
pub struct MemorySignalChannel {
    tx: Sender<Signal>,
    rx: Receiver<Signal>,
}

impl MemorySignalChannel {
    /// Create two connected endpoints: whatever one sends, the other receives.
    pub fn pair() -> (Self, Self) {
        let (a_tx, a_rx) = channel::unbounded();
        let (b_tx, b_rx) = channel::unbounded();
        (
            Self { tx: a_tx, rx: b_rx },
            Self { tx: b_tx, rx: a_rx },
        )
    }
}

impl SignalChannel for MemorySignalChannel {
    fn send(&mut self, signal: Signal) -> CommResult<()> {
        self.tx.send(signal).map_err(|_| CommError::Disconnected)
    }

    /// Next queued signal, skipping any number of queued resets.
    fn receive(&mut self) -> Option<Signal> {
        self.rx.try_iter().find(|&signal| signal != Signal::Invalid)
    }
}
