//! Coordination with the experiment control process
//!
//! # Architecture
//!
//! Two channels connect the HUD to the outside world:
//! - the signal channel, an integer code both sides read and overwrite
//! - the speech stream, the latest word published by the TTS engine
//!
//! Each has a file-backed implementation for the legacy polling protocol
//! and an in-memory one. Reads never block and never fail; a missing or
//! malformed value is "no new information this frame".

pub mod signal;
pub mod tts;
pub mod types;

pub use signal::{FileSignalChannel, MemorySignalChannel, Signal, SignalChannel};
pub use tts::{FileTtsStream, MemoryTtsStream, TtsSource, TtsToken, TtsWriter, TTS_OVER};
pub use types::{CommError, CommResult};
