//! # WGSL Composition
//!
//! `block.wgsl` holds everything except the face selection chain. The
//! chain is generated from [`FaceOrientation::PRIORITY`] and
//! [`FACE_MAPPINGS`] and spliced in at the `//FACE_BRANCHES` marker, so the
//! GPU shader and the CPU stages read the same table.

use std::fmt::Write as _;
use std::sync::OnceLock;

use crate::shading::{AxisTerm, FaceMapping, FaceOrientation, Sign};

/// Shader template.
pub const BLOCK_TEMPLATE: &str = include_str!("block.wgsl");

/// Marker replaced by the generated chain.
pub const FACE_BRANCHES_MARKER: &str = "//FACE_BRANCHES";

/// Vertex entry point.
pub const VERTEX_ENTRY: &str = "vs_main";

/// Fragment entry point.
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Formats a constant so WGSL parses it as an f32 literal.
fn wgsl_float(value: f32) -> String {
    // Debug always keeps a decimal point ("1.0", "0.66666")
    format!("{value:?}")
}

fn term(term: AxisTerm) -> String {
    format!("{} * wrap(p.{})", wgsl_float(term.scale), term.axis.name())
}

fn assignments(out: &mut String, mapping: &FaceMapping, indent: &str) {
    let _ = writeln!(
        out,
        "{indent}offset = vec2<f32>({}, {});",
        wgsl_float(mapping.offset.x),
        wgsl_float(mapping.offset.y),
    );
    let _ = writeln!(
        out,
        "{indent}sample_pos = vec2<f32>({}, {});",
        term(mapping.u),
        term(mapping.v),
    );
}

/// Generates the `if / else if / else` face chain.
#[must_use]
pub fn face_branches() -> String {
    let mut out = String::new();

    for (i, face) in FaceOrientation::PRIORITY.iter().enumerate() {
        let head = match face.selector() {
            Some(selector) => {
                let op = match selector.sign {
                    Sign::Positive => '>',
                    Sign::Negative => '<',
                };
                let keyword = if i == 0 { "if" } else { "} else if" };
                format!("{keyword} (n.{} {op} 0.0) {{", selector.axis.name())
            }
            None => "} else {".to_owned(),
        };

        let _ = writeln!(out, "    {head}");
        assignments(&mut out, face.mapping(), "        ");
    }
    out.push_str("    }\n");
    out
}

/// Fills the template.
#[must_use]
pub fn compose_block_shader() -> String {
    BLOCK_TEMPLATE.replace(FACE_BRANCHES_MARKER, face_branches().trim_end())
}

/// Composed block shader, built on first use.
#[must_use]
pub fn block_shader() -> &'static str {
    static SOURCE: OnceLock<String> = OnceLock::new();
    SOURCE.get_or_init(|| {
        let source = compose_block_shader();
        tracing::debug!("Composed block shader ({} bytes)", source.len());
        source
    })
}
