//! Textual `effectType` deprecation pass.
//!
//! Runs on printed output. Each `effectType: <value>` line is commented out
//! and followed by a fixed note explaining the removal, at the same
//! indentation.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Note appended after every commented-out `effectType` line.
pub const EFFECT_TYPE_NOTE: [&str; 4] = [
    "TODO: effectType was removed",
    "Transforms are not introspectable. effectType was introduced to attempt to address this and to try and keep the transform locked to the same type as the input schema.",
    "For transform operations, use Zod's native .overwrite() method, wrap your schema in a .pipe(), or declare a manual type.",
    "See: https://zod.dev/v4?id=overwrite",
];

/// `effectType:` at the start of a line, value terminated by a comma or the
/// end of the line. Values ending at `;` or `}` (type members, one-line
/// objects) do not match.
static EFFECT_TYPE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([ \t]*)(effectType:[ \t]*[^,;\n}]*[^,;\n}\s])[ \t]*(,?)[ \t]*$")
        .expect("effectType pattern is valid")
});

/// Result of one annotation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    pub text: String,
    /// Number of `effectType` lines commented out.
    pub annotated: usize,
}

pub fn annotate_effect_types(source: &str) -> Annotated {
    let mut annotated = 0;
    let text = EFFECT_TYPE_LINE
        .replace_all(source, |caps: &Captures<'_>| {
            annotated += 1;
            let indent = &caps[1];
            let mut out = format!("{indent}// {}{}", &caps[2], &caps[3]);
            for line in EFFECT_TYPE_NOTE {
                out.push('\n');
                out.push_str(indent);
                out.push_str("// ");
                out.push_str(line);
            }
            out
        })
        .into_owned();
    Annotated { text, annotated }
}
