//! Low-level text scanning helpers shared by the segmenter and the field
//! extractors. All helpers are byte-offset based and only ever return
//! offsets that sit on UTF-8 character boundaries.

/// Consume a run of characters matching `pred`, requiring at least `min`,
/// and return the rest of the string.
pub(crate) fn eat_run(s: &str, pred: impl Fn(char) -> bool, min: usize) -> Option<&str> {
    let end = s
        .char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(i, _)| i);
    if end == 0 && min > 0 {
        return None;
    }
    Some(&s[end..])
}

/// Consume an ASCII keyword case-insensitively and return the rest.
pub(crate) fn eat_word_ci<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    let prefix = s.get(..word.len())?;
    prefix.eq_ignore_ascii_case(word).then(|| &s[word.len()..])
}

/// ASCII case-insensitive substring search starting at byte offset `from`.
///
/// The needle must be ASCII; a match can never begin inside a multi-byte
/// character, so the returned offset is always a character boundary.
pub(crate) fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || n.len() > h.len() {
        return None;
    }
    (from..=h.len() - n.len()).find(|&i| {
        h[i..i + n.len()]
            .iter()
            .zip(n)
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
    })
}

/// Case-sensitive substring search starting at byte offset `from`.
pub(crate) fn find_str(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack.get(from..)?.find(needle).map(|i| i + from)
}
