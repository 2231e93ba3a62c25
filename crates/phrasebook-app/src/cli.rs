use std::path::PathBuf;

use clap::Parser;
use phrasebook_config::Config;

/// Translate text phrase by phrase with a plain-text `phrase | translation` dictionary
#[derive(Parser, Debug)]
#[command(name = "phrasebook", version)]
pub struct Args {
    /// Dictionary file, one `phrase | translation` per line
    pub dictionary: Option<PathBuf>,

    /// Extra dictionaries merged on top of the main one
    #[arg(long = "extra", value_name = "PATH")]
    pub additional: Vec<PathBuf>,

    /// Where untranslated words are appended
    #[arg(long, value_name = "PATH")]
    pub unknown_words: Option<PathBuf>,

    /// JSON config profile
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the effective config to PATH and exit
    #[arg(long, value_name = "PATH")]
    pub save_config: Option<PathBuf>,

    /// Do not save untranslated words
    #[arg(long)]
    pub no_unknown: bool,

    /// Fold full-width and compatibility characters (NFKC) before matching
    #[arg(long)]
    pub nfkc: bool,

    /// Log as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    /// Command-line flags override the profile and environment
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(path) = &self.dictionary {
            config.dictionary.path = path.display().to_string();
        }
        config
            .dictionary
            .additional_paths
            .extend(self.additional.iter().map(|p| p.display().to_string()));
        if let Some(path) = &self.unknown_words {
            config.unknown_words.path = path.display().to_string();
        }
        if self.no_unknown {
            config.unknown_words.enabled = false;
        }
        if self.nfkc {
            config.dictionary.unicode_normalization = true;
        }
        if self.json_logs {
            config.json_logs = true;
        }
        config
    }
}
