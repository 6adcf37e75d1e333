//! Conversion errors
//!
//! Every variant names the path that failed. Nothing is recovered locally:
//! the build system re-runs the tool if an invocation fails.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source asset is missing or unreadable
    #[error("cannot read source {}: {source}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Source bytes are not a decodable image
    #[error("cannot decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Output or dependency file could not be written
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    pub fn source_not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::SourceNotFound { path: path.into(), source }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Write { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
