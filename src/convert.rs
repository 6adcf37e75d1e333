//! Single-asset conversion
//!
//! One call handles one asset: the dependency file is written first, then the
//! asset is decoded and its fragment written over `output`. A failure after
//! the first step leaves the dependency file in place.

use std::fs;
use std::path::Path;

use crate::asset::{self, AssetKind};
use crate::depfile;
use crate::emit::Target;
use crate::error::{ConvertError, Result};

/// What an invocation produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Fragment written for a recognized asset
    Written { kind: AssetKind, ident: String },
    /// Unrecognized extension: only the dependency file exists
    DependencyOnly,
}

pub fn convert(output: &Path, source: &Path) -> Result<Outcome> {
    depfile::write_depfile(output, source)?;

    let kind = AssetKind::from_path(source);
    let target = Target::from_output(output);
    let ident = target.identifier(&asset::identifier(source));

    let fragment = match kind {
        AssetKind::Image => {
            let image = asset::load_image(source)?;
            target.image_fragment(&ident, &image)
        }
        AssetKind::ShaderText => {
            let shader = asset::load_shader(source)?;
            target.shader_fragment(&ident, &shader)
        }
        AssetKind::Unsupported => {
            tracing::debug!(
                source = %source.display(),
                "unrecognized extension, no fragment written"
            );
            return Ok(Outcome::DependencyOnly);
        }
    };

    write_fragment(output, &fragment)?;
    tracing::info!(
        output = %output.display(),
        kind = kind.label(),
        ident = %ident,
        "wrote fragment"
    );
    Ok(Outcome::Written { kind, ident })
}

fn write_fragment(output: &Path, fragment: &str) -> Result<()> {
    fs::write(output, fragment).map_err(|e| ConvertError::write(output, e))
}
