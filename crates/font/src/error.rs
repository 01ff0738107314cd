use std::result;

use skrifa::{outline::DrawError, raw::ReadError};

/// Error types for variable font access.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("failed to draw glyph for {ch:?}: {reason}")]
    Draw { ch: char, reason: DrawError },
}

pub type Result<T> = result::Result<T, Error>;
