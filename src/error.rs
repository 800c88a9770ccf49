use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedstreamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("iteration count must be at least 1")]
    InvalidIterationCount,

    #[error("seed must be exactly 64 bytes, got {0}")]
    InvalidSeedLength(usize),

    #[error("confusion string must not be empty")]
    EmptyPattern,

    #[error("segment exceeded the cap of {0} bytes before the pattern was consumed")]
    SegmentCapExceeded(usize),

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),
}

pub type Result<T> = std::result::Result<T, SeedstreamError>;
