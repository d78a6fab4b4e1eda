use clap::Parser;
use tracing::{error, info, Instrument};

use transaction_watch::events::drain;
use transaction_watch::{setup_tracing, AppConfig, NoticeKind, PollerExit, TransactionView, UiEvent, WaitingSystem};

/// Watch a transaction until the workshop accepts, ships or cancels it.
#[derive(Parser, Debug)]
#[command(name = "transaction_watch", version)]
struct Cli {
    /// Transaction to watch
    transaction_id: String,

    /// Backend base URL
    #[arg(long, env = "API_BASE_URL")]
    api_url: Option<String>,

    /// Bearer token; stored in the session before the first request
    #[arg(long, env = "AUTH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Seconds between polls
    #[arg(long, env = "POLL_INTERVAL_SECS")]
    interval_secs: Option<u64>,

    /// File the session token is persisted in
    #[arg(long, env = "TOKEN_STORE_PATH")]
    token_file: Option<String>,
}

impl Cli {
    fn value_for(&self, key: &str) -> Option<String> {
        match key {
            "API_BASE_URL" => self.api_url.clone(),
            "POLL_INTERVAL_SECS" => self.interval_secs.map(|s| s.to_string()),
            "TOKEN_STORE_PATH" => self.token_file.clone(),
            _ => None,
        }
    }
}

fn present(event: &UiEvent) {
    match event {
        UiEvent::Render(transaction) => println!("{}\n", TransactionView::new(transaction)),
        UiEvent::Notify(notice) => {
            let marker = match notice.kind {
                NoticeKind::Info => "i",
                NoticeKind::Success => "+",
                NoticeKind::Error => "!",
            };
            println!("[{marker}] {notice}");
        }
        UiEvent::Navigate(route) => println!("-> {route}"),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_lookup(|key| cli.value_for(key).or_else(|| std::env::var(key).ok()))
        .map_err(|e| e.to_string())?;

    info!(transaction_id = %cli.transaction_id, "Starting transaction watch");

    let (mut system, mut events) =
        WaitingSystem::mount(&config, cli.transaction_id.as_str(), cli.token.as_deref()).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("waiting_screen", transaction_id = %cli.transaction_id);
    async {
        loop {
            tokio::select! {
                Some(event) = events.recv() => present(&event),
                _ = system.finished() => break,
                _ = tokio::signal::ctrl_c() => {
                    info!("Received Ctrl+C, leaving the screen");
                    break;
                }
            }
        }
    }
    .instrument(span)
    .await;

    let exit = system.shutdown().await;
    for event in drain(&mut events) {
        present(&event);
    }

    match exit {
        PollerExit::Transitioned(status) => info!(status = %status, "Transaction left the waiting state"),
        PollerExit::Unmounted => info!("Stopped watching"),
        PollerExit::Unauthorized => {
            error!("Session rejected; sign in again");
            return Err("not authenticated".to_string());
        }
        PollerExit::InitialLoadFailed => return Err("transaction could not be loaded".to_string()),
        PollerExit::Failed(reason) => return Err(format!("status poller failed: {reason}")),
    }

    Ok(())
}
