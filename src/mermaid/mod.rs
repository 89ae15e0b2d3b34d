//! Diagram handling: grammar validation, the external render engine
//! contract, and the rendering adapter that ties them together.
//!
//! The render engine itself is a third-party collaborator; this module only
//! decides whether a candidate string is worth sending to it and converts
//! every failure into a silent skip.

pub mod engine;
pub mod render;

pub use render::{RenderOutcome, render_diagram};

/// Strip leading blockquote markers from each line and trim the result.
/// Generator output sometimes arrives quoted (`> graph TD;`), which the
/// engine would reject as-is.
#[must_use]
pub fn normalize(candidate: &str) -> String {
    let lines: Vec<&str> = candidate.lines().map(strip_blockquote).collect();
    lines.join("\n").trim().to_owned()
}

fn strip_blockquote(line: &str) -> &str {
    line.strip_prefix('>').map_or(line, str::trim_start)
}

/// Decide whether `candidate` is plausibly a renderable diagram.
///
/// Accepts iff the normalized text starts with `graph`, one or more spaces,
/// one or more uppercase letters, and a semicolon. Deliberately narrow:
/// false negatives are preferred over handing prose to the engine, so an
/// unusual-but-valid dialect is skipped rather than risking a renderer
/// error surfacing to the user.
#[must_use]
pub fn looks_like_diagram(candidate: &str) -> bool {
    starts_like_graph(&normalize(candidate))
}

fn starts_like_graph(text: &str) -> bool {
    let Some(rest) = text.strip_prefix("graph") else {
        return false;
    };
    let after_spaces = rest.trim_start_matches(char::is_whitespace);
    if after_spaces.len() == rest.len() {
        return false;
    }
    let after_direction = after_spaces.trim_start_matches(|c: char| c.is_ascii_uppercase());
    if after_direction.len() == after_spaces.len() {
        return false;
    }
    after_direction.starts_with(';')
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
