//! Text manipulation utilities for working with free-form model text.

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
/// Story text is natural language, but entity mentions inside it follow
/// identifier conventions (`ToDoItem`, `tac_customer`), so the same rule
/// covers both.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Split text into maximal word runs, in order of appearance.
///
/// Everything that is not a word character (spaces, punctuation, brackets)
/// acts as a separator and is discarded. Empty or separator-only input
/// yields an empty vector.
///
/// # Example
/// ```
/// use appdna::core::text_utils::word_tokens;
///
/// let tokens = word_tokens("As a Manager, I want to view all Invoices");
/// assert_eq!(tokens[0], "As");
/// assert_eq!(tokens.last().copied(), Some("Invoices"));
/// ```
pub fn word_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        if is_word_character(c) {
            if start.is_none() {
                start = Some(idx);
            }
        } else if let Some(s) = start.take() {
            tokens.push(&text[s..idx]);
        }
    }
    if let Some(s) = start {
        tokens.push(&text[s..]);
    }

    tokens
}
