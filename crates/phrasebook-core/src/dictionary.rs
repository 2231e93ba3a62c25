use std::collections::HashMap;
use std::path::Path;

use crate::loader::PhraseLoader;
use crate::text::{normalize_key, word_count};

/// Single `phrase | translation` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseEntry {
    /// Normalized phrase key (trimmed, collapsed whitespace, lowercase)
    pub key: String,
    /// Translation text as written in the source
    pub translation: String,
}

/// Phrase dictionary keyed by normalized phrase.
///
/// Built once by [`PhraseLoader`] and never mutated afterwards, so it can be
/// shared between translators behind an `Arc`. Entries iterate in insertion
/// order; redefining a key replaces its translation in place.
#[derive(Debug, Clone, Default)]
pub struct PhraseDictionary {
    entries: Vec<PhraseEntry>,
    index: HashMap<String, usize>,
    max_phrase_words: usize,
}

impl PhraseDictionary {
    /// Load a dictionary file with the default loader
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        PhraseLoader::new().load_from_file(path.as_ref())
    }

    /// Parse dictionary text with the default loader
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        PhraseLoader::new().load_from_str(text)
    }

    /// Build from in-memory pairs. Keys are normalized, blank pairs rejected.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut dict = Self::default();
        for (phrase, translation) in pairs {
            let key = normalize_key(phrase.as_ref());
            let translation = translation.as_ref().trim();
            if key.is_empty() || translation.is_empty() {
                return Err(LoadError::Format {
                    line: None,
                    message: format!(
                        "empty phrase or translation in pair \"{}\" | \"{}\"",
                        phrase.as_ref(),
                        translation
                    ),
                });
            }
            dict.insert(key, translation.to_string());
        }

        if dict.is_empty() {
            return Err(LoadError::no_entries());
        }
        Ok(dict)
    }

    /// Insert a normalized key, returns true if an earlier definition was replaced
    pub(crate) fn insert(&mut self, key: String, translation: String) -> bool {
        if let Some(&idx) = self.index.get(&key) {
            self.entries[idx].translation = translation;
            return true;
        }

        self.max_phrase_words = self.max_phrase_words.max(word_count(&key));
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(PhraseEntry { key, translation });
        false
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translation for an already normalized key
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&idx| self.entries[idx].translation.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &PhraseEntry> {
        self.entries.iter()
    }

    /// Word count of the longest key; no match can span more tokens than this
    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    /// Merge another dictionary into this one.
    /// Keys defined in `other` override existing translations.
    pub fn merge(mut self, other: PhraseDictionary) -> Self {
        for entry in other.entries {
            if self.insert(entry.key.clone(), entry.translation) {
                tracing::debug!("Merged dictionary overrides '{}'", entry.key);
            }
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Source missing, unreadable or not valid UTF-8
    #[error("{message}")]
    Read {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Malformed line, blank field, or nothing usable at all
    #[error("{message}")]
    Format { line: Option<usize>, message: String },
}

impl LoadError {
    pub(crate) fn read(message: String, source: std::io::Error) -> Self {
        Self::Read {
            message,
            source: Some(source),
        }
    }

    pub(crate) fn missing_separator(line: usize, raw: &str) -> Self {
        Self::Format {
            line: Some(line),
            message: format!(
                "invalid format at line {line}: \"{raw}\", expected 'phrase | translation'"
            ),
        }
    }

    pub(crate) fn empty_field(line: usize, raw: &str) -> Self {
        Self::Format {
            line: Some(line),
            message: format!("empty phrase or translation at line {line}: \"{raw}\""),
        }
    }

    pub(crate) fn no_entries() -> Self {
        Self::Format {
            line: None,
            message: "dictionary is empty or has no valid 'phrase | translation' pairs".to_string(),
        }
    }

    /// 1-based line of the offending entry, when there is one
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Format { line, .. } => *line,
            Self::Read { .. } => None,
        }
    }
}
