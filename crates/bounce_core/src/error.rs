use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of a run. Numerical masking and the degenerate
/// "fewer than two turning points" case are not errors.
#[derive(Error, Debug)]
pub enum BounceError {
    /// Filesystem failure while creating or writing outputs.
    #[error("io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Plot backend failed to render or encode a figure.
    #[error("plot error: {0}")]
    Plot(String),

    /// Integrator called with an unusable interval or sample count.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Summary file did not have the expected `key: value` layout.
    #[error("malformed summary: {0}")]
    Parse(String),
}

impl BounceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type BounceResult<T> = Result<T, BounceError>;
