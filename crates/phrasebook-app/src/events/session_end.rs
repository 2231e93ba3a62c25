use std::sync::Arc;

use phrasebook_translator::{FlushOutcome, PhraseTranslator};

use crate::state::AppState;

/// Save unknown words off the async runtime. Failures are logged, never fatal.
pub async fn handle_session_end(
    state: Arc<AppState>,
    translator: PhraseTranslator,
) -> Option<FlushOutcome> {
    let (enabled, path) = {
        let config = state.config.read().await;
        (
            config.unknown_words.enabled,
            config.unknown_words.path.clone(),
        )
    };

    if !enabled {
        tracing::info!(
            "Saving untranslated words disabled, {} collected",
            translator.unknown_words().len()
        );
        return None;
    }

    let result =
        tokio::task::spawn_blocking(move || translator.save_unknown_words(&path)).await;

    match result {
        Ok(Ok(outcome)) => {
            tracing::info!("Session closed: {}", outcome);
            Some(outcome)
        }
        Ok(Err(e)) => {
            tracing::error!("Failed to save untranslated words: {}", e);
            None
        }
        Err(e) => {
            tracing::error!("Saving untranslated words panicked: {}", e);
            None
        }
    }
}
