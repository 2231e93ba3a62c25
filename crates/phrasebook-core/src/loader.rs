use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::dictionary::{LoadError, PhraseDictionary};
use crate::preprocess::{Preprocessor, RawPreprocessor};
use crate::text::normalize_key;

/// Load a dictionary file with default settings
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<PhraseDictionary, LoadError> {
    PhraseLoader::new().load_from_file(path.as_ref())
}

/// Reads `phrase | translation` sources.
///
/// - blank lines and lines starting with `#` are skipped
/// - the first `|` splits phrase from translation, the translation may contain more
/// - the phrase goes through the preprocessor, then key normalization
pub struct PhraseLoader {
    preprocessor: Box<dyn Preprocessor>,
}

impl Default for PhraseLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PhraseLoader {
    pub fn new() -> Self {
        Self::with_preprocessor(Box::new(RawPreprocessor))
    }

    pub fn with_preprocessor(preprocessor: Box<dyn Preprocessor>) -> Self {
        Self { preprocessor }
    }

    /// Load dictionary from file path
    pub fn load_from_file(&self, path: &Path) -> Result<PhraseDictionary, LoadError> {
        tracing::info!("Loading phrase dictionary from file: {}", path.display());
        let file = File::open(path).map_err(|e| {
            LoadError::read(
                format!("failed to open dictionary \"{}\"", path.display()),
                e,
            )
        })?;
        self.load_from_reader(BufReader::new(file), &path.display().to_string())
    }

    /// Load dictionary text already in memory
    pub fn load_from_str(&self, text: &str) -> Result<PhraseDictionary, LoadError> {
        self.load_from_reader(text.as_bytes(), "<memory>")
    }

    /// Load from any line source; `source` only names it in messages
    pub fn load_from_reader(
        &self,
        reader: impl BufRead,
        source: &str,
    ) -> Result<PhraseDictionary, LoadError> {
        let mut dict = PhraseDictionary::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                LoadError::read(format!("failed to read dictionary \"{source}\""), e)
            })?;

            let Some((key, translation)) = self.parse_line(&line, idx + 1)? else {
                continue;
            };
            if dict.insert(key, translation) {
                tracing::debug!("Line {} redefines an earlier phrase, last one wins", idx + 1);
            }
        }

        if dict.is_empty() {
            return Err(LoadError::no_entries());
        }

        tracing::info!("Loaded {} phrase entries from {}", dict.len(), source);
        Ok(dict)
    }

    fn parse_line(
        &self,
        line: &str,
        line_no: usize,
    ) -> Result<Option<(String, String)>, LoadError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (left, right) = trimmed
            .split_once('|')
            .ok_or_else(|| LoadError::missing_separator(line_no, line))?;

        let phrase = left.trim();
        let translation = right.trim();
        if phrase.is_empty() || translation.is_empty() {
            return Err(LoadError::empty_field(line_no, line));
        }

        let key = normalize_key(&self.preprocessor.process(phrase));
        if key.is_empty() {
            return Err(LoadError::empty_field(line_no, line));
        }

        Ok(Some((key, translation.to_string())))
    }
}
