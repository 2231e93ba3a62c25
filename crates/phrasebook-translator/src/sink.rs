use std::collections::HashSet;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Destination for words the dictionary could not translate.
///
/// Entries are `word | ` lines, the empty slot after the pipe is left for a
/// translation to be filled in by hand. Sinks only ever grow.
pub trait UnknownWordSink {
    /// Words already recorded, lowercased
    fn recorded_words(&self) -> Result<HashSet<String>, PersistError>;

    /// Append one `word | ` line per word
    fn append(&mut self, words: &[&str]) -> Result<(), PersistError>;

    /// Human-readable location for logs
    fn describe(&self) -> String;
}

/// What a flush did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushOutcome {
    /// No unknown words were collected
    NothingToSave,
    /// Every unknown word was already in the sink
    AlreadyRecorded,
    /// Number of new lines appended
    Appended(usize),
}

impl fmt::Display for FlushOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingToSave => write!(f, "no untranslated words found"),
            Self::AlreadyRecorded => write!(f, "no new untranslated words, all already recorded"),
            Self::Appended(count) => write!(f, "added {count} new untranslated words"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("unknown-words file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PersistError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Words named by existing `word | translation` lines
pub fn parse_recorded(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let word = line.split('|').next().unwrap_or("").trim();
            (!word.is_empty()).then(|| word.to_lowercase())
        })
        .collect()
}

fn format_entry(word: &str) -> String {
    format!("{word} | \n")
}

/// Unknown words file on disk, created on first append
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ends_without_newline(&self) -> io::Result<bool> {
        let mut file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e),
        };
        if file.metadata()?.len() == 0 {
            return Ok(false);
        }
        file.seek(SeekFrom::End(-1))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)?;
        Ok(last[0] != b'\n')
    }
}

impl UnknownWordSink for FileSink {
    fn recorded_words(&self) -> Result<HashSet<String>, PersistError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(parse_recorded(&content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashSet::new()),
            Err(e) => Err(PersistError::io(&self.path, e)),
        }
    }

    fn append(&mut self, words: &[&str]) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PersistError::io(parent, e))?;
        }

        let needs_newline = self
            .ends_without_newline()
            .map_err(|e| PersistError::io(&self.path, e))?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| PersistError::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);

        let write_all = |writer: &mut BufWriter<fs::File>| -> io::Result<()> {
            if needs_newline {
                writer.write_all(b"\n")?;
            }
            for word in words {
                writer.write_all(format_entry(word).as_bytes())?;
            }
            writer.flush()
        };
        write_all(&mut writer).map_err(|e| PersistError::io(&self.path, e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory sink, handy for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    content: String,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl UnknownWordSink for MemorySink {
    fn recorded_words(&self) -> Result<HashSet<String>, PersistError> {
        Ok(parse_recorded(&self.content))
    }

    fn append(&mut self, words: &[&str]) -> Result<(), PersistError> {
        if !self.content.is_empty() && !self.content.ends_with('\n') {
            self.content.push('\n');
        }
        for word in words {
            self.content.push_str(&format_entry(word));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
