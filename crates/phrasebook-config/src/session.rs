use serde::{Deserialize, Serialize};

fn default_exit_words() -> Vec<String> {
    vec!["exit".to_string(), "выход".to_string()]
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_output_prefix() -> String {
    "Translation: ".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SessionConfig {
    /// Lines that end the session, compared case-insensitively
    #[serde(default = "default_exit_words")]
    pub exit_words: Vec<String>,
    /// Shown before each line when stdin is a terminal
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
}

impl SessionConfig {
    pub fn is_exit_word(&self, line: &str) -> bool {
        let line = line.trim().to_lowercase();
        self.exit_words.iter().any(|w| w.to_lowercase() == line)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            exit_words: default_exit_words(),
            prompt: default_prompt(),
            output_prefix: default_output_prefix(),
        }
    }
}
