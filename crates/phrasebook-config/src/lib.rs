use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::session::SessionConfig;
use self::unknown_words::UnknownWordsConfig;

pub mod dictionary;
pub mod session;
pub mod unknown_words;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub unknown_words: UnknownWordsConfig,
    pub session: SessionConfig,

    /// `tracing` filter used when RUST_LOG is unset
    pub log_level: String,
    /// Emit logs as JSON lines instead of plain text
    pub json_logs: bool,
}

impl Config {
    pub fn new() -> Self {
        let log_level = env::var("PHRASEBOOK_LOG").unwrap_or_else(|_| "info".to_string());

        let json_logs = env::var("PHRASEBOOK_JSON_LOGS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Config {
            dictionary: DictionaryConfig::default(),
            unknown_words: UnknownWordsConfig::default(),
            session: SessionConfig::default(),

            log_level,
            json_logs,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
