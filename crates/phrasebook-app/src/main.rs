use std::future::Future;
use std::sync::Arc;

use clap::Parser;
use phrasebook_config::Config;
use phrasebook_translator::PhraseTranslator;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod controller;
pub mod dictionary;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests {
    mod session_tests;
    mod sync_channel_tests;
}

use self::cli::Args;
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = args.apply(profile::load_config(args.config.as_deref())?);
    init_tracing(&config);

    if let Some(path) = &args.save_config {
        return profile::save_config(&config, path);
    }

    tracing::info!("Loading dictionary from: {}", config.dictionary.path);
    let dictionary = dictionary::load_dictionaries(&config.dictionary)
        .inspect_err(|e| tracing::error!("Dictionary error: {e:#}"))?;

    let state = Arc::new(AppState::new(config, dictionary));

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    run(state, shutdown).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // stdout carries translations, logs go to stderr
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

pub async fn run(state: Arc<AppState>, shutdown: impl Future<Output = ()>) -> anyhow::Result<()> {
    let controller = AppController::new(state.clone());
    let translator = PhraseTranslator::new(state.dictionary.clone());
    let interactive = atty::is(atty::Stream::Stdin);

    if interactive {
        let config = state.config.read().await;
        println!(
            "Translator ready ({} entries). Type text to translate, {} to quit.",
            state.dictionary.len(),
            config.session.exit_words.join(" / ")
        );
    }

    let mut tasks = controller.spawn_tasks(translator, interactive)?;

    tokio::pin!(shutdown);
    let mut shutting_down = false;
    loop {
        tokio::select! {
            _ = &mut shutdown, if !shutting_down => {
                tracing::info!("Shutdown requested");
                shutting_down = true;
                controller.shutdown();
            }
            result = tasks.join_next() => {
                match result {
                    None => break,
                    Some(Ok(Ok(()))) => {}
                    Some(Ok(Err(e))) => {
                        tracing::error!("task exited: {e}");
                        controller.shutdown();
                    }
                    Some(Err(e)) => {
                        tracing::error!("task panicked: {e}");
                        controller.shutdown();
                    }
                }
            }
        }
    }

    Ok(())
}
