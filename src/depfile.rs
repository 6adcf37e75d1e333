//! Make-style dependency sidecar
//!
//! `<output>: <source>` on a single line, written next to the output with the
//! extension swapped for `.d`. Always rewritten from scratch.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

pub const DEPFILE_EXTENSION: &str = "d";

/// `gen/icon.png.h` -> `gen/icon.png.d`
pub fn depfile_path(output: &Path) -> PathBuf {
    output.with_extension(DEPFILE_EXTENSION)
}

/// Rule bytes, with both paths written exactly as given (no lossy decoding)
pub fn dependency_rule(output: &Path, source: &Path) -> Vec<u8> {
    let output = output.as_os_str().as_encoded_bytes();
    let source = source.as_os_str().as_encoded_bytes();

    let mut rule = Vec::with_capacity(output.len() + source.len() + 2);
    rule.extend_from_slice(output);
    rule.extend_from_slice(b": ");
    rule.extend_from_slice(source);
    rule
}

/// Write the sidecar for `output`, returning its path
pub fn write_depfile(output: &Path, source: &Path) -> Result<PathBuf> {
    let path = depfile_path(output);
    fs::write(&path, dependency_rule(output, source))
        .map_err(|e| ConvertError::write(&path, e))?;
    tracing::debug!(path = %path.display(), "wrote dependency file");
    Ok(path)
}
