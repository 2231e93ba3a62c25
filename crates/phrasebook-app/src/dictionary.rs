use std::path::Path;

use anyhow::Context;
use phrasebook_config::dictionary::DictionaryConfig;
use phrasebook_core::preprocess::preprocessor;
use phrasebook_core::{PhraseDictionary, PhraseLoader};

/// Load the main dictionary and merge any additional ones on top.
///
/// The main file must load. Additional files that fail are logged and skipped.
pub fn load_dictionaries(config: &DictionaryConfig) -> anyhow::Result<PhraseDictionary> {
    let loader = PhraseLoader::with_preprocessor(preprocessor(config.unicode_normalization));

    let mut dict = loader
        .load_from_file(Path::new(&config.path))
        .with_context(|| format!("failed to load dictionary {}", config.path))?;

    for path in &config.additional_paths {
        match loader.load_from_file(Path::new(path)) {
            Ok(additional) => {
                tracing::info!("Merging additional dictionary from: {}", path);
                dict = dict.merge(additional);
            }
            Err(e) => {
                tracing::warn!("Failed to load dictionary from {}: {}", path, e);
            }
        }
    }

    tracing::info!("Dictionary ready, {} entries", dict.len());
    Ok(dict)
}
