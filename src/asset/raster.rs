//! PNG decoding for embedding
//!
//! Pixels are stored bottom row first, since textures sampled from the
//! embedded data have their origin at the bottom-left.

use std::fs;
use std::path::Path;

use image::imageops;

use crate::error::{ConvertError, Result};

/// Decoded image, RGBA8, rows ordered bottom to top
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes, R,G,B,A interleaved
    pub rgba: Vec<u8>,
}

impl ImageAsset {
    /// Decode encoded image bytes; `path` is only used for error reporting
    pub fn from_bytes(bytes: &[u8], path: &Path) -> Result<Self> {
        let img = image::load_from_memory(bytes).map_err(|e| ConvertError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;

        // Alpha-less color models come out fully opaque
        let mut rgba = img.to_rgba8();
        imageops::flip_vertical_in_place(&mut rgba);

        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }
}

/// Read and decode an image file
pub fn load_image(path: &Path) -> Result<ImageAsset> {
    let bytes = fs::read(path).map_err(|e| ConvertError::source_not_found(path, e))?;
    let asset = ImageAsset::from_bytes(&bytes, path)?;
    tracing::debug!(
        path = %path.display(),
        width = asset.width,
        height = asset.height,
        "decoded image"
    );
    Ok(asset)
}
