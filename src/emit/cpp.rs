//! C++ header fragments (`namespace Images` / `namespace Shaders`)

use std::fmt::Write;

use super::{join_with, push_decimal};
use crate::asset::{ImageAsset, ShaderAsset};

pub(super) fn image(ident: &str, image: &ImageAsset) -> String {
    let mut out = String::with_capacity(256 + image.rgba.len() * 5);
    out.push_str("#pragma once\n\n#include <tuple>\n#include <array>\n\nnamespace Images {\n\n");
    let _ = write!(
        out,
        "inline constexpr std::tuple<int, int, std::array<unsigned char, {}>> {}{{{}, {}, {{{{",
        image.rgba.len(),
        ident,
        image.width,
        image.height,
    );
    join_with(&mut out, &image.rgba, push_decimal);
    out.push_str("}}};\n\n}\n");
    out
}

pub(super) fn shader(ident: &str, shader: &ShaderAsset) -> String {
    let mut out = String::with_capacity(128 + shader.bytes.len() * 5);
    out.push_str("#pragma once\n\n#include <array>\n\nnamespace Shaders {\n\n");
    let _ = write!(
        out,
        "inline constexpr std::array<char, {}> {}{{{{",
        shader.bytes.len(),
        ident,
    );
    join_with(&mut out, &shader.bytes, push_char);
    out.push_str("}};\n\n}\n");
    out
}

/// `char` may be signed, so values above 127 need an explicit cast to stay
/// a non-narrowing initializer
fn push_char(out: &mut String, byte: u8) {
    if byte > 127 {
        let _ = write!(out, "static_cast<char>({})", byte);
    } else {
        push_decimal(out, byte);
    }
}
