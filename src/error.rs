use std::path::PathBuf;
use thiserror::Error;

/// Reasons two waveforms are judged not equivalent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaveMismatch {
    #[error("channel count differs: {reference} vs {port}")]
    Channels { reference: u16, port: u16 },

    #[error("length differs by {diff} (reference {reference}, port {port}, margin {margin})")]
    Length {
        reference: usize,
        port: usize,
        diff: usize,
        margin: usize,
    },

    #[error("sample {index} differs by {diff} (reference {reference}, port {port}, margin {margin})")]
    Sample {
        index: usize,
        reference: i32,
        port: i32,
        diff: i64,
        margin: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedCheckError {
    #[error(
        "{on_path} has {on_count} bright points, not more than {ratio}x the {off_count} of {off_path}",
        on_path = .on.display(),
        off_path = .off.display()
    )]
    NotDistinct {
        on: PathBuf,
        off: PathBuf,
        on_count: usize,
        off_count: usize,
        ratio: usize,
    },
}
