//! Word-level text helpers shared by the loader and the translator.
//!
//! A character counts as part of a word when `char::is_alphanumeric` holds,
//! so letters and digits of any script are treated the same way.

/// A whitespace-delimited piece of input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Raw form, punctuation included
    pub surface: String,
    /// Surface with leading/trailing punctuation stripped
    pub clean: String,
    /// Index of the token in its line
    pub position: usize,
}

impl Token {
    pub fn new(surface: &str, position: usize) -> Self {
        Self {
            surface: surface.to_string(),
            clean: clean_word(surface).to_string(),
            position,
        }
    }

    /// Lowercased clean form, the shape used for dictionary lookups
    pub fn key(&self) -> String {
        self.clean.to_lowercase()
    }

    /// True when the clean form is a plain word (letters/digits only)
    pub fn is_word(&self) -> bool {
        is_word(&self.clean)
    }

    pub fn trailing_punctuation(&self) -> &str {
        trailing_punctuation(&self.surface)
    }
}

/// Split text on runs of whitespace
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, surface)| Token::new(surface, position))
        .collect()
}

/// Strip leading and trailing non-alphanumeric runs, keeping interior punctuation.
///
/// `"\"hello,\""` becomes `hello`, `(привет)` becomes `привет`, `don't!` becomes `don't`.
pub fn clean_word(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Maximal non-alphanumeric suffix of a raw token (possibly empty).
///
/// `window,` gives `,` and `hello!!` gives `!!`.
pub fn trailing_punctuation(token: &str) -> &str {
    let word_end = token
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(idx, c)| idx + c.len_utf8())
        .unwrap_or(0);
    &token[word_end..]
}

/// Non-empty and made only of letters/digits
pub fn is_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphanumeric)
}

/// Normalize a dictionary phrase into its lookup key: trim, collapse
/// whitespace runs into one space, lowercase.
pub fn normalize_key(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Number of words in a normalized key
pub fn word_count(key: &str) -> usize {
    key.split_whitespace().count()
}
