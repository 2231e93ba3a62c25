use kanal::AsyncSender;
use phrasebook_translator::PhraseTranslator;

use crate::events::AppEvent;

/// Translate one preprocessed line and hand it to the UI
pub async fn handle_text_input(
    line: &str,
    translator: &mut PhraseTranslator,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !line.trim().is_empty() {
        let translated = translator.translate(line);
        tracing::debug!("Translated '{}' -> '{}'", line, translated);

        app_to_ui_tx
            .send(AppEvent::ShowTranslation { text: translated })
            .await?;
    }

    app_to_ui_tx.send(AppEvent::AwaitingInput).await?;
    Ok(())
}
