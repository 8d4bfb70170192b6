//! Core types for the coordination channels

use std::io;
use std::path::PathBuf;

/// Error type for channel operations
///
/// Only writes can fail. Reads always degrade to "no new information".
#[derive(Debug, thiserror::Error)]
pub enum CommError {
    /// Replacing the shared file failed
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The other end of an in-memory channel was dropped
    #[error("channel peer disconnected")]
    Disconnected,
}

/// Result type for channel operations
pub type CommResult<T> = Result<T, CommError>;
