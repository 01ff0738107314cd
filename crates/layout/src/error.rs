use std::result;

/// Error types for poster layout.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("measured line width is zero (does the font cover the text?)")]
    EmptyMeasurement,

    #[error("no width-axis candidates to sample")]
    NoCandidates,

    #[error("expected TAG=VALUE: {0}")]
    InvalidAxisSpec(String),

    #[error("axis tag must be 4 characters: {0}")]
    InvalidTag(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("invalid color (expected #RRGGBB or R,G,B in 0..1): {0}")]
    InvalidColor(String),
}

pub type Result<T> = result::Result<T, Error>;
