use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use phrasebook_core::preprocess::preprocessor;
use phrasebook_translator::{FlushOutcome, PhraseTranslator};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod session_end;
pub mod text_input;

use session_end::handle_session_end;
use text_input::handle_text_input;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// One line read from the input
    TextInput(String),
    /// Input stream closed
    EndOfInput,
    /// Ready for the next line
    AwaitingInput,
    ShowTranslation { text: String },
    /// Session over; `None` when saving unknown words failed or was disabled
    SessionClosed { outcome: Option<FlushOutcome> },
}

/// Session loop: translate lines until exit, end of input or cancellation,
/// then save the unknown words.
pub async fn event_loop(
    state: Arc<AppState>,
    mut translator: PhraseTranslator,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (session, preprocessor) = {
        let config = state.config.read().await;
        (
            config.session.clone(),
            preprocessor(config.dictionary.unicode_normalization),
        )
    };

    if let Err(e) = app_to_ui_tx.send(AppEvent::AwaitingInput).await {
        tracing::warn!("UI not listening: {}", e);
    }

    tracing::debug!("[EVENT_LOOP] Starting session loop");
    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => event.ok(),
            _ = cancel.cancelled() => {
                tracing::info!("Session cancelled");
                None
            }
        };
        let Some(event) = event else {
            break;
        };

        match event {
            AppEvent::TextInput(text) => {
                let line = preprocessor.process(&text);
                if session.is_exit_word(&line) {
                    tracing::info!("Exit requested");
                    break;
                }
                if let Err(e) = handle_text_input(&line, &mut translator, &app_to_ui_tx).await {
                    tracing::error!("Failed to deliver translation, closing session: {}", e);
                    break;
                }
            }
            AppEvent::EndOfInput => {
                tracing::debug!("Input closed");
                break;
            }
            AppEvent::AwaitingInput
            | AppEvent::ShowTranslation { .. }
            | AppEvent::SessionClosed { .. } => {
                // UI-only events, ignore in backend
            }
        }
    }

    let outcome = handle_session_end(state, translator).await;
    if let Err(e) = app_to_ui_tx.send(AppEvent::SessionClosed { outcome }).await {
        tracing::warn!("UI gone before session close: {}", e);
    }

    Ok(())
}
