//! Interactive host: reads one utterance per line from stdin and dispatches it.
//!
//! Spoken replies and rendered results go to stdout; tracing output goes to
//! stderr.

use std::path::PathBuf;
use std::sync::Arc;

use aria::services::{
    ConsoleDisplay, ConsoleNavigator, ConsoleSpeaker, JsonFileStore, SimulatedNewsProvider,
    SimulatedWeatherProvider, TokioNotifier,
};
use aria::{ActionContext, AssistantConfig, Dispatcher, IntentRegistry};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Aria: voice/text command router.
#[derive(Parser)]
#[command(name = "aria", version, about)]
struct Cli {
    /// Path to TOML configuration file (default: the platform config dir).
    #[arg(short, long, env = "ARIA_CONFIG")]
    config: Option<PathBuf>,

    /// Path to the persisted JSON store (overrides the config file).
    #[arg(short, long)]
    store: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aria=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => AssistantConfig::from_file(path)?,
        None => {
            let path = AssistantConfig::default_config_path();
            if path.exists() {
                AssistantConfig::from_file(&path)?
            } else {
                AssistantConfig::builtin()
            }
        }
    };
    config.validate()?;

    let store_path = cli
        .store
        .unwrap_or_else(|| config.storage.resolved_store_path());
    tracing::info!(store = %store_path.display(), "using persisted store");

    println!("{}", config.speech.init_message);

    let registry = IntentRegistry::from_config(&config)?;
    let (notifier, mut alerts) = TokioNotifier::new();
    let config = Arc::new(config);
    let ctx = ActionContext::new(
        Arc::clone(&config),
        Arc::new(ConsoleSpeaker),
        Arc::new(ConsoleDisplay),
        Arc::new(ConsoleNavigator),
        Arc::new(notifier),
        Arc::new(JsonFileStore::new(store_path)),
        Arc::new(SimulatedNewsProvider::new(config.delays.news_fetch())),
        Arc::new(SimulatedWeatherProvider::new(config.delays.weather_fetch())),
    );
    let dispatcher = Dispatcher::new(registry, ctx);

    tokio::spawn(async move {
        while let Some(alert) = alerts.recv().await {
            println!("[{}] {}", alert.title, alert.body);
        }
    });

    println!("{}", config.speech.listening_message);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }
        let outcome = dispatcher.handle_command(line).await;
        tracing::debug!(?outcome, "command finished");
    }

    tracing::info!("aria shut down cleanly");
    Ok(())
}
