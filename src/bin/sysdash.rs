// Polling terminal dashboard.
//
// Usage: sysdash [ENDPOINT_URL]
//   ENDPOINT_URL  overrides dashboard.endpoint from CONFIG_FILE (default config.toml)
//
// The screen belongs to the dashboard, so logs are appended to SYSDASH_LOG_FILE
// (default sysdash.log). Quit with q, Esc or Ctrl+C.

use std::path::PathBuf;

use anyhow::Context;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use sysdash::config::AppConfig;
use sysdash::dashboard::terminal::{DashboardTerminal, is_quit_key};
use sysdash::dashboard::{Dashboard, MetricsPoller, SysinfoClient};
use sysdash::logging;
use tokio::sync::watch;
use tokio::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_path = std::env::var("SYSDASH_LOG_FILE").unwrap_or_else(|_| "sysdash.log".into());
    logging::init_to_file(&PathBuf::from(log_path))?;

    let mut app_config = AppConfig::load_or_default()?;
    if let Some(endpoint) = std::env::args().nth(1) {
        app_config = app_config
            .with_endpoint(endpoint)
            .context("invalid endpoint argument")?;
    }
    let dashboard_config = app_config.dashboard;

    let client = SysinfoClient::new(
        dashboard_config.endpoint.clone(),
        Duration::from_millis(dashboard_config.request_timeout_ms),
    )
    .context("building HTTP client")?;
    tracing::info!(
        endpoint = %dashboard_config.endpoint,
        poll_interval_ms = dashboard_config.poll_interval_ms,
        "Starting dashboard"
    );

    let poller = MetricsPoller::new(client, dashboard_config.window_capacity);
    let handle = poller.spawn(Duration::from_millis(dashboard_config.poll_interval_ms));
    let mut frames = handle.frames();

    let ui_result = run_ui(&mut frames).await;

    let poller = handle.stop().await?;
    let (ok, failed) = poller.poll_counts();
    tracing::info!(polls_ok = ok, polls_failed = failed, "Dashboard stopped");
    ui_result
}

/// Redraw on every published frame and on resize, until a quit key or SIGINT.
async fn run_ui(frames: &mut watch::Receiver<Dashboard>) -> anyhow::Result<()> {
    let mut terminal = DashboardTerminal::enter().context("entering terminal UI")?;
    let mut events = EventStream::new();
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    terminal.draw(&frames.borrow_and_update())?;

    loop {
        tokio::select! {
            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }
                terminal.draw(&frames.borrow_and_update())?;
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press && is_quit_key(&key) => {
                    tracing::info!("Quit requested");
                    break;
                }
                Some(Ok(Event::Resize(_, _))) => terminal.draw(&frames.borrow())?,
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("reading terminal events"),
                None => break,
            },
            _ = &mut shutdown => {
                tracing::info!("Received shutdown signal");
                break;
            }
        }
    }
    Ok(())
}
