use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use phrasebook_config::Config;

/// Load a JSON profile, or env/default config when no path is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    let file = File::open(path)
        .with_context(|| format!("failed to open config profile {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("invalid config profile {}", path.display()))?;
    Ok(config)
}

/// Write the effective config as a pretty JSON profile
pub fn save_config(config: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    tracing::info!("Wrote config profile to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles").join("main.json");

        let mut config = Config::new();
        config.dictionary.path = "ru.txt".to_string();
        config.session.exit_words = vec!["quit".to_string()];
        save_config(&config, &path).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.dictionary.path, "ru.txt");
        assert_eq!(loaded.session.exit_words, ["quit"]);
    }

    #[test]
    fn test_missing_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }
}
