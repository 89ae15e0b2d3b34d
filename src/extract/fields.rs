//! Field extractors — independent pattern recognizers for the diagram
//! source, pros text, and cons text within a single block.
//!
//! DESIGN
//! ======
//! Generator output spells section labels at least three ways (plain word,
//! emoji-prefixed bold, markdown heading), so each label is recognized by a
//! small set of alternatives tried in a fixed priority order rather than
//! one rigid pattern. New spellings slot in without touching the other
//! extractors. Every extractor returns `None` both when nothing matches
//! and when a match captures only whitespace; callers normalize absent to
//! `""` when assembling the record.

use super::scan::{eat_run, eat_word_ci, find_ci, find_str};

const FENCE: &str = "```";
const MERMAID_FENCE: &str = "```mermaid";

// =============================================================================
// DIAGRAM
// =============================================================================

/// Extract a diagram source from `block`.
///
/// Primary rule: the inner text of a fenced region opened by a
/// ` ```mermaid ` tag. Fallback rule, only when no tagged fence is found: a
/// raw span starting at a `graph <id>;` header and running until the first
/// blank line, a `Pros:`/`Cons:` line, or end of block. The fallback exists
/// because the generator inconsistently wraps diagrams in fences.
pub fn extract_diagram(block: &str) -> Option<String> {
    fenced_diagram(block).or_else(|| raw_graph_span(block))
}

fn fenced_diagram(block: &str) -> Option<String> {
    let tag = block.find(MERMAID_FENCE)?;
    let inner = &block[tag + MERMAID_FENCE.len()..];
    let close = inner.find(FENCE)?;
    non_blank(&inner[..close])
}

fn raw_graph_span(block: &str) -> Option<String> {
    let mut from = 0;
    while let Some(at) = find_ci(block, "graph", from) {
        if let Some(header_len) = match_graph_header(&block[at..]) {
            let end = raw_span_end(block, at + header_len);
            return non_blank(&block[at..end]);
        }
        from = at + 1;
    }
    None
}

/// Match `graph`, whitespace, an identifier, and a semicolon at the start
/// of `s` (the `graph` token itself is already confirmed by the caller).
fn match_graph_header(s: &str) -> Option<usize> {
    let rest = &s["graph".len()..];
    let rest = eat_run(rest, char::is_whitespace, 1)?;
    let rest = eat_run(rest, |c: char| c.is_alphanumeric() || c == '_', 1)?;
    let rest = rest.strip_prefix(';')?;
    Some(s.len() - rest.len())
}

fn raw_span_end(block: &str, from: usize) -> usize {
    [
        find_str(block, "\n\n", from),
        find_label_line(block, "pros:", from),
        find_label_line(block, "cons:", from),
    ]
    .into_iter()
    .flatten()
    .min()
    .unwrap_or(block.len())
}

/// Find the next line at or after `from` that starts with `needle`
/// (ASCII case-insensitive). Returns the offset of the line start.
fn find_label_line(block: &str, needle: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(nl) = find_str(block, "\n", pos) {
        let line_start = nl + 1;
        if block
            .get(line_start..line_start + needle.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(needle))
        {
            return Some(line_start);
        }
        pos = line_start;
    }
    None
}

// =============================================================================
// PROS / CONS
// =============================================================================

/// Extract the pros text: label spellings `✅ **Pros**`, heading-level
/// `Pros`, or plain `Pros`, with an optional colon; the capture runs until
/// the next Cons label line, a fence marker, the literal token `graph`, or
/// end of block.
pub fn extract_pros(block: &str) -> Option<String> {
    let start = find_label(block, "pros", '✅')?;
    non_blank(&block[start..pros_end(block, start)])
}

/// Extract the cons text: label spellings `❌ **Cons**`, heading-level
/// `Cons`, or plain `Cons`, with an optional colon; the capture runs until
/// a fence marker, the literal token `graph`, or end of block.
pub fn extract_cons(block: &str) -> Option<String> {
    let start = find_label(block, "cons", '❌')?;
    non_blank(&block[start..cons_end(block, start)])
}

// The `graph` stop token below is a heuristic, not a real boundary: pros or
// cons text that merely contains the word "graph" gets truncated there.
// Known edge case, kept as-is.

fn pros_end(block: &str, from: usize) -> usize {
    [
        next_cons_label_line(block, from),
        find_str(block, FENCE, from),
        find_ci(block, "graph", from),
    ]
    .into_iter()
    .flatten()
    .min()
    .unwrap_or(block.len())
}

fn cons_end(block: &str, from: usize) -> usize {
    [find_str(block, FENCE, from), find_ci(block, "graph", from)]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(block.len())
}

fn next_cons_label_line(block: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(nl) = find_str(block, "\n", pos) {
        let line_start = nl + 1;
        let line = &block[line_start..];
        let line = &line[..line.find('\n').unwrap_or(line.len())];
        if is_cons_label_start(line) {
            return Some(line_start);
        }
        pos = line_start;
    }
    None
}

fn is_cons_label_start(line: &str) -> bool {
    if eat_word_ci(line, "cons").is_some() {
        return true;
    }
    if let Some(rest) = line.strip_prefix('❌') {
        return match_bold_word(rest, "cons").is_some();
    }
    if let Some(rest) = eat_run(line, |c| c == '#', 1) {
        return eat_word_ci(rest.trim_start_matches([' ', '\t']), "cons").is_some();
    }
    false
}

// =============================================================================
// LABEL RECOGNIZERS
// =============================================================================

/// Locate a section label using the accepted spellings in fixed priority
/// order: emoji-prefixed bold, markdown heading, plain word. Returns the
/// byte offset where the captured text begins (after the label and an
/// optional colon).
fn find_label(block: &str, word: &str, emoji: char) -> Option<usize> {
    find_emoji_bold_label(block, word, emoji)
        .or_else(|| find_heading_label(block, word))
        .or_else(|| find_plain_label(block, word))
}

/// `✅ **Pros**` — emoji, optional spacing, the word in bold.
fn find_emoji_bold_label(block: &str, word: &str, emoji: char) -> Option<usize> {
    let mut from = 0;
    while let Some(at) = block.get(from..).and_then(|s| s.find(emoji)).map(|i| i + from) {
        let after_emoji = at + emoji.len_utf8();
        if let Some(rest) = match_bold_word(&block[after_emoji..], word) {
            return Some(offset_after(block, after_optional_colon(rest)));
        }
        from = after_emoji;
    }
    None
}

fn match_bold_word<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    let rest = eat_run(s, char::is_whitespace, 0)?;
    let rest = rest.strip_prefix("**")?;
    let rest = eat_word_ci(rest, word)?;
    rest.strip_prefix("**")
}

/// `### Pros` — a heading line whose text is the bare word.
fn find_heading_label(block: &str, word: &str) -> Option<usize> {
    for (line_start, line) in lines_with_offsets(block) {
        let Some(rest) = eat_run(line, |c| c == '#', 1) else {
            continue;
        };
        let Some(rest) = eat_word_ci(rest.trim_start_matches([' ', '\t']), word) else {
            continue;
        };
        if rest.chars().next().is_some_and(char::is_alphanumeric) {
            continue;
        }
        let rest = after_optional_colon(rest);
        return Some(line_start + (line.len() - rest.len()));
    }
    None
}

/// Bare `Pros` / `Pros:` — word-start guarded so `constraints` or a bold
/// `**Pros**` never match, and a colon or end-of-line must follow.
fn find_plain_label(block: &str, word: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(at) = find_ci(block, word, from) {
        if plain_boundary_before(block, at) {
            if let Some(rest) = plain_label_tail(&block[at + word.len()..]) {
                return Some(offset_after(block, rest));
            }
        }
        from = at + 1;
    }
    None
}

fn plain_boundary_before(block: &str, at: usize) -> bool {
    block[..at]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric() && c != '*')
}

fn plain_label_tail(rest: &str) -> Option<&str> {
    if let Some(after) = rest.strip_prefix(':') {
        return Some(after);
    }
    let line = &rest[..rest.find('\n').unwrap_or(rest.len())];
    line.trim().is_empty().then_some(rest)
}

// =============================================================================
// SHARED
// =============================================================================

fn after_optional_colon(rest: &str) -> &str {
    rest.strip_prefix(':').unwrap_or(rest)
}

fn offset_after(block: &str, rest: &str) -> usize {
    block.len() - rest.len()
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Iterate lines with their byte offsets; trailing newlines are trimmed
/// from the yielded line but offsets index into the original text.
fn lines_with_offsets(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.split_inclusive('\n').scan(0, |offset, raw| {
        let start = *offset;
        *offset += raw.len();
        Some((start, raw.trim_end_matches(['\n', '\r'])))
    })
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
