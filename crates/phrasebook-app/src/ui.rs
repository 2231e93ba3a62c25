use std::io::{self, Write};
use std::sync::Arc;

use kanal::AsyncReceiver;
use phrasebook_config::Config;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::events::AppEvent;

/// Print session output to stdout. Prompts only show up for a terminal.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: Arc<RwLock<Config>>,
    interactive: bool,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (prompt, prefix) = {
        let config = config.read().await;
        (
            config.session.prompt.clone(),
            config.session.output_prefix.clone(),
        )
    };

    loop {
        let event = tokio::select! {
            event = app_to_ui_rx.recv() => event?,
            _ = cancel.cancelled() => break,
        };

        let closed = matches!(event, AppEvent::SessionClosed { .. });
        render(&mut io::stdout().lock(), &event, &prompt, &prefix, interactive)?;
        if closed {
            break;
        }
    }

    Ok(())
}

fn render(
    out: &mut impl Write,
    event: &AppEvent,
    prompt: &str,
    prefix: &str,
    interactive: bool,
) -> io::Result<()> {
    match event {
        AppEvent::AwaitingInput if interactive => {
            write!(out, "{prompt}")?;
            out.flush()
        }
        AppEvent::ShowTranslation { text } => writeln!(out, "{prefix}{text}"),
        AppEvent::SessionClosed { .. } if interactive => writeln!(out, "Goodbye!"),
        _ => Ok(()),
    }
}
