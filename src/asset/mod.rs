//! Source assets
//!
//! An asset's kind is decided once from its file extension. Decoders for each
//! kind live in the submodules.

pub mod raster;
pub mod shader;

use std::path::Path;

pub use raster::{load_image, ImageAsset};
pub use shader::{load_shader, ShaderAsset};

/// Asset category, decided from the source extension
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    /// `.png`, decoded to RGBA8
    Image,
    /// `.glsl`, embedded byte for byte
    ShaderText,
    /// Anything else; only the dependency file is written
    Unsupported,
}

impl AssetKind {
    /// Classify a source path by its extension (case-sensitive)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("png") => AssetKind::Image,
            Some("glsl") => AssetKind::ShaderText,
            _ => AssetKind::Unsupported,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::ShaderText => "shader",
            AssetKind::Unsupported => "unsupported",
        }
    }
}

/// Constant name for an asset: file stem, made into a valid identifier
///
/// Characters outside `[A-Za-z0-9_]` become `_`, and a leading digit is
/// prefixed with `_`.
pub fn identifier(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut ident: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(AssetKind::from_path(Path::new("foo.png")), AssetKind::Image);
        assert_eq!(AssetKind::from_path(Path::new("dir/ICON.PNG")), AssetKind::Unsupported);
        assert_eq!(AssetKind::from_path(Path::new("frag.GLSL")), AssetKind::Unsupported);
        assert_eq!(AssetKind::from_path(Path::new("bar.glsl")), AssetKind::ShaderText);
        assert_eq!(AssetKind::from_path(Path::new("baz.txt")), AssetKind::Unsupported);
        assert_eq!(AssetKind::from_path(Path::new("Makefile")), AssetKind::Unsupported);
        // Only the last extension counts
        assert_eq!(AssetKind::from_path(Path::new("a.glsl.bak")), AssetKind::Unsupported);
    }

    #[test]
    fn test_identifier_strips_directory_and_extension() {
        assert_eq!(identifier(Path::new("assets/img/spritesheet.png")), "spritesheet");
        assert_eq!(identifier(Path::new("shader_fsh.glsl")), "shader_fsh");
    }

    #[test]
    fn test_identifier_sanitizes() {
        assert_eq!(identifier(Path::new("world-shader.vsh.glsl")), "world_shader_vsh");
        assert_eq!(identifier(Path::new("8x8font.png")), "_8x8font");
        assert_eq!(identifier(Path::new("")), "_");
    }
}
