//! Rust fragments (`pub mod images` / `pub mod shaders`)
//!
//! Meant to be pulled in with `include!` inside a module of its own, since
//! every fragment of a kind opens the same module name.

use std::fmt::Write;

use super::{join_with, push_decimal};
use crate::asset::{ImageAsset, ShaderAsset};

const HEADER: &str = "// @generated by asset-literal, do not edit\n\n";

pub(super) fn image(ident: &str, image: &ImageAsset) -> String {
    let mut out = String::with_capacity(256 + image.rgba.len() * 5);
    out.push_str(HEADER);
    out.push_str("pub mod images {\n    #[allow(non_upper_case_globals)]\n");
    let _ = write!(
        out,
        "    pub const {}: (i32, i32, [u8; {}]) = ({}, {}, [",
        ident,
        image.rgba.len(),
        image.width,
        image.height,
    );
    join_with(&mut out, &image.rgba, push_decimal);
    out.push_str("]);\n}\n");
    out
}

pub(super) fn shader(ident: &str, shader: &ShaderAsset) -> String {
    let mut out = String::with_capacity(128 + shader.bytes.len() * 5);
    out.push_str(HEADER);
    out.push_str("pub mod shaders {\n    #[allow(non_upper_case_globals)]\n");
    let _ = write!(out, "    pub const {}: [u8; {}] = [", ident, shader.bytes.len());
    join_with(&mut out, &shader.bytes, push_decimal);
    out.push_str("];\n}\n");
    out
}
