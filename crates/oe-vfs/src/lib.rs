//! File access layer for oxidized-emotion

pub mod file;

pub use file::{FileStream, OpenMode, SeekMode};
