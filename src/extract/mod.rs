//! Architecture response parser.
//!
//! DESIGN
//! ======
//! The generator returns one loosely-structured markdown document per
//! request. Parsing is best-effort information extraction: segment the
//! document on architecture headings, run independent field extractors per
//! block, and assemble bounded, typed records. Nothing in this module ever
//! fails — input with no recognizable structure yields an empty sequence
//! and the caller presents a "no sections found" state.

pub mod fields;
mod scan;
pub mod segment;

use serde::{Deserialize, Serialize};

/// Upper bound on the number of options returned per response.
pub const MAX_OPTIONS: usize = 6;

/// One candidate architecture assembled from a block. Every field is
/// independently derived and possibly empty; `diagram` is not guaranteed
/// to be syntactically valid — rendering decides that later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureOption {
    pub summary: String,
    pub diagram: String,
    pub pros: String,
    pub cons: String,
}

impl ArchitectureOption {
    /// True when all four fields are empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.summary.trim().is_empty()
            && self.diagram.trim().is_empty()
            && self.pros.trim().is_empty()
            && self.cons.trim().is_empty()
    }
}

/// Parse a generator response into at most [`MAX_OPTIONS`] architecture
/// options, in document order.
///
/// Blocks whose fields are all blank are dropped; when more than
/// [`MAX_OPTIONS`] valid blocks exist, the first six in document order are
/// kept. Never panics: unrecognizable input yields an empty vector.
#[must_use]
pub fn extract_options(response_text: &str) -> Vec<ArchitectureOption> {
    segment::segment(response_text)
        .into_iter()
        .map(build_option)
        .filter(|option| !option.is_blank())
        .take(MAX_OPTIONS)
        .collect()
}

fn build_option(block: &str) -> ArchitectureOption {
    ArchitectureOption {
        summary: summarize(block),
        diagram: fields::extract_diagram(block).unwrap_or_default(),
        pros: fields::extract_pros(block).unwrap_or_default(),
        cons: fields::extract_cons(block).unwrap_or_default(),
    }
}

/// First five lines of the block with leading heading and bullet markers
/// stripped, joined and trimmed.
fn summarize(block: &str) -> String {
    let lines: Vec<&str> = block.trim().lines().take(5).map(strip_line_markers).collect();
    lines.join("\n").trim().to_owned()
}

fn strip_line_markers(line: &str) -> &str {
    let unhashed = line.trim_start_matches('#');
    let unhashed = if unhashed.len() == line.len() {
        line
    } else {
        unhashed.trim_start()
    };
    strip_bullet(unhashed)
}

/// Strip a leading `-` or `*` bullet marker; the marker must be followed
/// by whitespace so emphasis like `**bold**` survives.
fn strip_bullet(line: &str) -> &str {
    let Some(rest) = line.strip_prefix(['-', '*']) else {
        return line;
    };
    if rest.starts_with(char::is_whitespace) {
        rest.trim_start()
    } else {
        line
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
