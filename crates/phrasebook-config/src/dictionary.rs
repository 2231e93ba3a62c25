use std::env;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    env::var("PHRASEBOOK_DICTIONARY").unwrap_or_else(|_| "dictionary.txt".to_string())
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Main `phrase | translation` file
    #[serde(default = "default_path")]
    pub path: String,
    /// Loaded after the main file, later files override earlier ones
    #[serde(default)]
    pub additional_paths: Vec<String>,
    /// Apply NFKC to dictionary phrases and input lines
    #[serde(default)]
    pub unicode_normalization: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            additional_paths: vec![],
            unicode_normalization: false,
        }
    }
}
