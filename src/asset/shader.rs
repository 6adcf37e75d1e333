//! Shader sources
//!
//! Read as raw bytes: no UTF-8 decoding and no newline translation, so the
//! embedded array matches the file exactly.

use std::fs;
use std::path::Path;

use crate::error::{ConvertError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct ShaderAsset {
    pub bytes: Vec<u8>,
}

pub fn load_shader(path: &Path) -> Result<ShaderAsset> {
    let bytes = fs::read(path).map_err(|e| ConvertError::source_not_found(path, e))?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "read shader");
    Ok(ShaderAsset { bytes })
}
