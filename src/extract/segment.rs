//! Block segmentation — splits a generator response into per-architecture
//! candidate blocks on recognized section headings.
//!
//! DESIGN
//! ======
//! Heading recognition is a hand-built scanner rather than a grammar: the
//! upstream generator varies heading depth, capitalization, and the
//! Solution/Option wording, so the matcher accepts the whole family and
//! downstream code never sees the heading text itself.

use super::scan::{eat_run, eat_word_ci};

/// Split `text` into candidate blocks on architecture headings.
///
/// A heading is, case-insensitively: a run of `#` markers, optional
/// whitespace, the word `Architecture`, whitespace, `Solution` or `Option`,
/// whitespace, an integer, and an optional trailing colon. Each returned
/// block is the text strictly between the end of one heading and the start
/// of the next (or end of input); heading text is discarded and
/// whitespace-only fragments are dropped.
///
/// Text before the first heading is not a block, and an input with no
/// heading at all yields no blocks — an unheaded document would otherwise
/// surface as one meaningless catch-all summary.
pub fn segment(text: &str) -> Vec<&str> {
    let mut headings: Vec<(usize, usize)> = Vec::new();
    let mut at = 0;
    while at < text.len() {
        if text.as_bytes()[at] == b'#' {
            if let Some(end) = match_heading(text, at) {
                headings.push((at, end));
                at = end;
                continue;
            }
        }
        at += 1;
    }

    let mut blocks = Vec::new();
    for (i, &(_, body_start)) in headings.iter().enumerate() {
        let body_end = headings
            .get(i + 1)
            .map_or(text.len(), |&(next_start, _)| next_start);
        let block = &text[body_start..body_end];
        if !block.trim().is_empty() {
            blocks.push(block);
        }
    }
    blocks
}

/// Try to match a heading at `start` (which must point at a `#` byte).
/// Returns the byte offset just past the heading on success.
fn match_heading(text: &str, start: usize) -> Option<usize> {
    let rest = &text[start..];
    let rest = eat_run(rest, |c| c == '#', 1)?;
    let rest = eat_run(rest, char::is_whitespace, 0)?;
    let rest = eat_word_ci(rest, "architecture")?;
    let rest = eat_run(rest, char::is_whitespace, 1)?;
    let rest = eat_word_ci(rest, "solution").or_else(|| eat_word_ci(rest, "option"))?;
    let rest = eat_run(rest, char::is_whitespace, 1)?;
    let rest = eat_run(rest, |c: char| c.is_ascii_digit(), 1)?;
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    Some(text.len() - rest.len())
}

#[cfg(test)]
#[path = "segment_test.rs"]
mod tests;
