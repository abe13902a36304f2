//! Text Sanitizer
//!
//! Normalizes free text typed into titles and notes.

/// Longest word kept intact; longer words are cut to this many characters
pub const MAX_WORD_LEN: usize = 30;

/// Collapse runs of spaces and cut overlong words.
///
/// Splits on single spaces, drops empty tokens, truncates every token to
/// [`MAX_WORD_LEN`] characters and joins the result with single spaces.
pub fn sanitize(text: &str) -> String {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| match word.char_indices().nth(MAX_WORD_LEN) {
            Some((cut, _)) => &word[..cut],
            None => word,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a keystroke may reach a free-text field.
///
/// `key` is a DOM `KeyboardEvent.key` value. Printable keys pass only when
/// alphanumeric or a space; named keys such as `Enter` or `Backspace` always pass.
pub fn accepts_key(key: &str) -> bool {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => ch.is_alphanumeric() || ch == ' ',
        _ => true,
    }
}

/// `word` for a count of one, `word` + "s" otherwise
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
