use std::sync::Arc;

use kanal::AsyncReceiver;
use tirgum_types::UiEvent;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod display;
pub mod navbar;

use display::DisplayPanel;

/// Renders session changes and notices to stdout
pub async fn ui_loop(
    state: Arc<AppState>,
    app_to_ui_rx: AsyncReceiver<UiEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let echo = state.config.read().await.ui.echo;
    let mut panel = DisplayPanel::new(echo);
    let mut session_rx = state.session.subscribe();
    let mut stdout = tokio::io::stdout();

    let current = session_rx.borrow_and_update().clone();
    write_block(&mut stdout, &navbar::Navbar::default().render(current.direction)).await?;
    if let Some(rendered) = panel.update(&current) {
        write_block(&mut stdout, &rendered).await?;
    }

    loop {
        tokio::select! {
            changed = session_rx.changed() => {
                if changed.is_err() {
                    tracing::debug!("[UI] Session closed");
                    break;
                }
                let view = session_rx.borrow_and_update().clone();
                if let Some(rendered) = panel.update(&view) {
                    write_block(&mut stdout, &rendered).await?;
                }
            }
            event = app_to_ui_rx.recv() => {
                match event? {
                    UiEvent::Notice(text) => write_block(&mut stdout, &text).await?,
                    UiEvent::Close => break,
                }
            }
            _ = cancel.cancelled() => break,
        }
    }

    tracing::debug!("[UI] Loop stopped");
    Ok(())
}

async fn write_block(stdout: &mut Stdout, text: &str) -> std::io::Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n\n").await?;
    stdout.flush().await
}
