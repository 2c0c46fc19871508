/// Drops `head` characters from the front and `tail` characters from the
/// back of `text`, returning the middle.
///
/// Offsets count characters, not bytes, so multi-byte input can never split
/// a code point. When the text has no more than `head + tail` characters the
/// result is the empty string; out-of-range offsets are not an error.
///
/// # Examples
/// ```
/// use arsharp::util::text::strip_affixes;
///
/// assert_eq!(strip_affixes("var{total}", 4, 1), "total");
/// assert_eq!(strip_affixes("g[x]", 2, 1), "x");
/// assert_eq!(strip_affixes("cout::9+3 ::endl", 6, 7), "9+3");
/// assert_eq!(strip_affixes("ab", 2, 1), "");
/// ```
#[must_use]
pub fn strip_affixes(text: &str, head: usize, tail: usize) -> &str {
    let length = text.chars().count();
    if head + tail >= length {
        return "";
    }

    let start = text.char_indices()
                    .nth(head)
                    .map_or_else(|| text.len(), |(index, _)| index);
    let end = text.char_indices()
                  .nth(length - tail)
                  .map_or_else(|| text.len(), |(index, _)| index);

    &text[start..end]
}
