//! Generated source fragments
//!
//! Each fragment declares a single constant inside a namespace reserved for
//! its asset kind. The target language follows the output file extension:
//! `.rs` produces Rust, anything else a C++ header.

mod cpp;
mod rust;

use std::fmt::Write;
use std::path::Path;

use crate::asset::{ImageAsset, ShaderAsset};

const RUST_KEYWORDS: &[&str] = &[
    "_", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

/// Language of the generated fragment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Cpp,
    Rust,
}

impl Target {
    pub fn from_output(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("rs") => Target::Rust,
            _ => Target::Cpp,
        }
    }

    /// Make `ident` usable as a constant name: keywords get a `_` suffix
    pub fn identifier(&self, ident: &str) -> String {
        let keywords = match self {
            Target::Cpp => CPP_KEYWORDS,
            Target::Rust => RUST_KEYWORDS,
        };
        if keywords.contains(&ident) {
            format!("{}_", ident)
        } else {
            ident.to_string()
        }
    }

    pub fn image_fragment(&self, ident: &str, image: &ImageAsset) -> String {
        match self {
            Target::Cpp => cpp::image(ident, image),
            Target::Rust => rust::image(ident, image),
        }
    }

    pub fn shader_fragment(&self, ident: &str, shader: &ShaderAsset) -> String {
        match self {
            Target::Cpp => cpp::shader(ident, shader),
            Target::Rust => rust::shader(ident, shader),
        }
    }
}

/// Comma-separated list, each element rendered by `render`, no trailing comma
fn join_with<T: Copy>(out: &mut String, items: &[T], mut render: impl FnMut(&mut String, T)) {
    for (i, &item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        render(out, item);
    }
}

fn push_decimal(out: &mut String, byte: u8) {
    // Writing into a String cannot fail
    let _ = write!(out, "{}", byte);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_output() {
        assert_eq!(Target::from_output(Path::new("gen/icon.png.h")), Target::Cpp);
        assert_eq!(Target::from_output(Path::new("gen/icon.hpp")), Target::Cpp);
        assert_eq!(Target::from_output(Path::new("gen/icon")), Target::Cpp);
        assert_eq!(Target::from_output(Path::new("gen/icon.png.rs")), Target::Rust);
    }

    #[test]
    fn test_keyword_identifiers_escaped() {
        assert_eq!(Target::Rust.identifier("type"), "type_");
        assert_eq!(Target::Rust.identifier("_"), "__");
        assert_eq!(Target::Rust.identifier("int"), "int");
        assert_eq!(Target::Cpp.identifier("int"), "int_");
        assert_eq!(Target::Cpp.identifier("type"), "type");
        assert_eq!(Target::Cpp.identifier("spritesheet"), "spritesheet");
    }

    #[test]
    fn test_join_decimal() {
        let mut out = String::new();
        join_with(&mut out, &[0u8, 9, 255], push_decimal);
        assert_eq!(out, "0, 9, 255");

        let mut empty = String::new();
        join_with(&mut empty, &[] as &[u8], push_decimal);
        assert_eq!(empty, "");
    }
}
