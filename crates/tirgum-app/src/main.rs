use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tirgum_config::Config;

pub mod cli;
pub mod controller;
pub mod events;
pub mod io;
pub mod logging;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::cli::Args;
use self::controller::AppController;
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config);
    logging::init_tracing(&config.log);
    if let Some(path) = &args.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(run(config));

    // A pending stdin read keeps a blocking thread busy, don't wait for it
    runtime.shutdown_timeout(Duration::from_millis(200));
    result
}

async fn run(config: Config) -> anyhow::Result<()> {
    let initial_text = config.ui.initial_text.clone();
    let state = Arc::new(AppState::new(config)?);

    let controller = AppController::new(state.clone());
    let mut tasks = controller.spawn_tasks();

    // Seed the input box, the first translation goes through the debounce like typing
    state.session.on_input_change(initial_text);

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("task finished"),
                Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::warn!("task failed during shutdown: {e:#}");
        }
    }

    Ok(())
}
