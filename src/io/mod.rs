//! File I/O helpers shared by the file-backed channels and content loaders.

pub mod files;

pub use files::{file_exists, read_text_lossy, write_atomic};
