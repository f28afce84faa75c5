//! Display helpers shared by the adapters

/// Marker appended to shortened text
pub const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `max_chars` characters, marker included.
///
/// Counts characters, not bytes, so multi-byte Vietnamese text is never
/// cut inside a code point. For display only; search always sees the
/// full row text.
///
/// # Examples
///
/// ```
/// use hstc::core::text::truncate_chars;
///
/// assert_eq!(truncate_chars("Ngựa sống", 20), "Ngựa sống");
/// assert_eq!(truncate_chars("Ngựa thuần chủng", 8), "Ngựa ...");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.char_indices().nth(max_chars).is_none() {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let cut = text
        .char_indices()
        .nth(keep)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    format!("{}{ELLIPSIS}", &text[..cut])
}
