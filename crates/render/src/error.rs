use std::{io, path::PathBuf, result};

/// Error types for poster rendering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Font(#[from] varposter_font::Error),

    #[error("unsupported output format: {} (expected .pdf or .svg)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = result::Result<T, Error>;
