//! Longest-phrase-match translation over a [`PhraseDictionary`].
//!
//! Input is split on whitespace and scanned left to right. At each position
//! the translator grows a window of cleaned, lowercased tokens and keeps the
//! longest window that is a dictionary key. Matched spans are replaced by
//! their translation plus the trailing punctuation of the last matched token;
//! everything else passes through untouched. Output pieces are joined by a
//! single space.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use phrasebook_core::PhraseDictionary;
use phrasebook_core::text::{Token, tokenize};

pub mod sink;

pub use sink::{FileSink, FlushOutcome, MemorySink, PersistError, UnknownWordSink};

/// A dictionary phrase found at some position
struct Match {
    /// Translation with the trailing punctuation re-attached
    text: String,
    /// Tokens consumed
    word_count: usize,
}

/// Phrase translator for one session.
///
/// The dictionary is shared and read-only; the unknown-word set belongs to
/// this translator and only grows.
pub struct PhraseTranslator {
    dictionary: Arc<PhraseDictionary>,
    unknown_words: BTreeSet<String>,
}

impl PhraseTranslator {
    pub fn new(dictionary: Arc<PhraseDictionary>) -> Self {
        Self {
            dictionary,
            unknown_words: BTreeSet::new(),
        }
    }

    /// Translate one line of text. Never fails: anything the dictionary
    /// does not cover is passed through verbatim.
    pub fn translate(&mut self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let tokens = tokenize(text);
        let mut pieces: Vec<String> = Vec::with_capacity(tokens.len());

        let mut i = 0;
        while i < tokens.len() {
            match self.longest_match(&tokens, i) {
                Some(found) => {
                    pieces.push(found.text);
                    i += found.word_count;
                }
                None => {
                    let token = &tokens[i];
                    pieces.push(token.surface.clone());
                    self.record_unknown(token);
                    i += 1;
                }
            }
        }

        pieces.join(" ")
    }

    /// Longest key made of consecutive cleaned tokens starting at `start`.
    ///
    /// Growth stops at a token that is pure punctuation, and at the longest
    /// key length in the dictionary since nothing beyond it can match.
    fn longest_match(&self, tokens: &[Token], start: usize) -> Option<Match> {
        let mut candidate = String::new();
        let mut best: Option<(&str, usize)> = None;

        let window = tokens[start..]
            .iter()
            .take(self.dictionary.max_phrase_words());
        for (offset, token) in window.enumerate() {
            let key = token.key();
            if key.is_empty() {
                break;
            }
            if !candidate.is_empty() {
                candidate.push(' ');
            }
            candidate.push_str(&key);

            if let Some(translation) = self.dictionary.lookup(&candidate) {
                let len = offset + 1;
                if best.is_none_or(|(_, best_len)| len > best_len) {
                    best = Some((translation, len));
                }
            }
        }

        best.map(|(translation, word_count)| {
            let last = &tokens[start + word_count - 1];
            Match {
                text: format!("{translation}{}", last.trailing_punctuation()),
                word_count,
            }
        })
    }

    fn record_unknown(&mut self, token: &Token) {
        if !token.is_word() {
            return;
        }
        let word = token.key();
        if self.dictionary.contains_key(&word) {
            return;
        }
        if self.unknown_words.insert(word) {
            tracing::debug!(
                "New untranslated word '{}' at token {}",
                token.clean,
                token.position
            );
        }
    }

    /// Untranslated words seen so far, lowercase and sorted
    pub fn unknown_words(&self) -> &BTreeSet<String> {
        &self.unknown_words
    }

    /// Append unknown words missing from `sink`.
    ///
    /// Words already present in the sink are skipped, so flushing the same
    /// set twice writes nothing the second time.
    pub fn flush_unknown_words<S>(&self, sink: &mut S) -> Result<FlushOutcome, PersistError>
    where
        S: UnknownWordSink + ?Sized,
    {
        if self.unknown_words.is_empty() {
            tracing::info!("No untranslated words found");
            return Ok(FlushOutcome::NothingToSave);
        }

        let recorded = sink.recorded_words()?;
        let fresh: Vec<&str> = self
            .unknown_words
            .iter()
            .filter(|word| !recorded.contains(word.as_str()))
            .map(String::as_str)
            .collect();

        if fresh.is_empty() {
            tracing::info!("No new untranslated words, {} already up to date", sink.describe());
            return Ok(FlushOutcome::AlreadyRecorded);
        }

        sink.append(&fresh)?;
        tracing::info!(
            "Added {} new untranslated words to {}",
            fresh.len(),
            sink.describe()
        );
        Ok(FlushOutcome::Appended(fresh.len()))
    }

    /// Flush into a `word | ` file at `path`
    pub fn save_unknown_words(&self, path: impl AsRef<Path>) -> Result<FlushOutcome, PersistError> {
        let mut sink = FileSink::new(path.as_ref());
        self.flush_unknown_words(&mut sink)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn translator() -> PhraseTranslator {
        let dict = PhraseDictionary::from_pairs([
            ("look", "смотреть"),
            ("look forward", "ожидать"),
            ("window", "окно"),
        ])
        .unwrap();
        PhraseTranslator::new(Arc::new(dict))
    }

    #[test]
    fn test_longest_match_wins() {
        let mut t = translator();
        assert_eq!(t.translate("look forward"), "ожидать");
        assert_eq!(t.translate("look"), "смотреть");
    }

    #[test]
    fn test_trailing_punctuation_is_kept() {
        let mut t = translator();
        assert_eq!(t.translate("window,"), "окно,");
        assert_eq!(t.translate("window!!"), "окно!!");
        assert_eq!(t.translate("(window)"), "окно)");
    }

    #[test]
    fn test_lookup_ignores_case() {
        let mut t = translator();
        assert_eq!(t.translate("LOOK forward"), "ожидать");
        assert_eq!(t.translate("Window."), "окно.");
    }

    #[test]
    fn test_end_to_end_sentence() {
        let mut t = translator();
        let out = t.translate("dog look to the window, dog LOOK forward!!");
        assert_eq!(out, "dog смотреть to the окно, dog ожидать!!");

        let unknown: Vec<&str> = t.unknown_words().iter().map(String::as_str).collect();
        assert_eq!(unknown, ["dog", "the", "to"]);
    }

    #[test]
    fn test_unknown_words_are_deduplicated() {
        let mut t = translator();
        t.translate("dog window");
        assert_eq!(t.unknown_words().len(), 1);
        assert!(t.unknown_words().contains("dog"));

        t.translate("Dog DOG");
        assert_eq!(t.unknown_words().len(), 1);
    }

    #[test]
    fn test_non_word_tokens_are_not_collected() {
        let mut t = translator();
        assert_eq!(t.translate("don't -- 42 ..."), "don't -- 42 ...");
        let unknown: Vec<&str> = t.unknown_words().iter().map(String::as_str).collect();
        assert_eq!(unknown, ["42"]);
    }

    #[test]
    fn test_blank_input_is_returned_unchanged() {
        let mut t = translator();
        assert_eq!(t.translate(""), "");
        assert_eq!(t.translate(" \t "), " \t ");
        assert!(t.unknown_words().is_empty());
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let mut t = translator();
        assert_eq!(t.translate("  dog \t\t window  "), "dog окно");
    }

    #[test]
    fn test_punctuation_token_stops_phrase() {
        let mut t = translator();
        assert_eq!(t.translate("look -- forward"), "смотреть -- forward");
        // punctuation attached to a word does not break the phrase
        assert_eq!(t.translate("look, forward"), "ожидать");
    }

    #[test]
    fn test_phrase_uses_punctuation_of_last_token_only() {
        let mut t = translator();
        assert_eq!(t.translate("\"look forward?\""), "ожидать?\"");
    }

    #[test]
    fn test_shorter_key_inside_longer_window() {
        let dict = PhraseDictionary::from_pairs([
            ("a", "A"),
            ("a b c", "ABC"),
        ])
        .unwrap();
        let mut t = PhraseTranslator::new(Arc::new(dict));
        // "a b" is not a key, so the match falls back to "a"
        assert_eq!(t.translate("a b d"), "A b d");
        assert_eq!(t.translate("a b c d"), "ABC d");
    }

    #[test]
    fn test_token_count_is_preserved() {
        let mut t = translator();
        let input = "look forward to the window look dog";
        let out = t.translate(input);
        assert_eq!(out, "ожидать to the окно смотреть dog");
        // 2 tokens folded into one piece
        assert_eq!(out.split(' ').count() + 1, input.split(' ').count());
    }

    #[test]
    fn test_unicode_words() {
        let dict = PhraseDictionary::from_pairs([("ОКНО", "window"), ("日本語", "Japanese")])
            .unwrap();
        let mut t = PhraseTranslator::new(Arc::new(dict));
        assert_eq!(t.translate("Окно! 日本語。 Straße"), "window! Japanese。 Straße");
        assert!(t.unknown_words().contains("straße"));
    }

    #[test]
    fn test_empty_dictionary_passes_everything_through() {
        let mut t = PhraseTranslator::new(Arc::new(PhraseDictionary::default()));
        assert_eq!(t.translate("dog, cat"), "dog, cat");
        assert_eq!(t.unknown_words().len(), 2);
    }

    #[test]
    fn test_flush_nothing_to_save() {
        let t = translator();
        let mut sink = MemorySink::new();
        assert_eq!(
            t.flush_unknown_words(&mut sink).unwrap(),
            FlushOutcome::NothingToSave
        );
        assert!(sink.content().is_empty());
    }

    #[test]
    fn test_flush_twice_writes_once() {
        let mut t = translator();
        t.translate("dog window");
        let mut sink = MemorySink::new();

        assert_eq!(
            t.flush_unknown_words(&mut sink).unwrap(),
            FlushOutcome::Appended(1)
        );
        assert_eq!(
            t.flush_unknown_words(&mut sink).unwrap(),
            FlushOutcome::AlreadyRecorded
        );
        assert_eq!(sink.content(), "dog | \n");
    }

    #[test]
    fn test_flush_skips_words_recorded_earlier() {
        let mut t = translator();
        t.translate("dog cat the");
        let mut sink = MemorySink::with_content("CAT | кошка\n");

        assert_eq!(
            t.flush_unknown_words(&mut sink).unwrap(),
            FlushOutcome::Appended(2)
        );
        assert_eq!(sink.content(), "CAT | кошка\ndog | \nthe | \n");
    }

    #[test]
    fn test_save_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join("unknown_words.txt");

        let mut first = translator();
        first.translate("dog window");
        assert_eq!(first.save_unknown_words(&path).unwrap(), FlushOutcome::Appended(1));

        let mut second = translator();
        second.translate("the dog");
        assert_eq!(second.save_unknown_words(&path).unwrap(), FlushOutcome::Appended(1));
        assert_eq!(second.save_unknown_words(&path).unwrap(), FlushOutcome::AlreadyRecorded);

        assert_eq!(fs::read_to_string(&path).unwrap(), "dog | \nthe | \n");
    }

    #[test]
    fn test_flush_error_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut t = translator();
        t.translate("dog");
        // the target is a directory, reading it fails
        let result = t.save_unknown_words(dir.path());
        assert!(matches!(result, Err(PersistError::Io { .. })));
        assert!(t.unknown_words().contains("dog"));
    }
}
