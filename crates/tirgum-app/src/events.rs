use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tirgum_types::{AppEvent, UiEvent};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;
use crate::ui::navbar::Navbar;

pub mod navigation;
pub mod text_input;

use navigation::handle_nav_intent;
use text_input::handle_text_input;

pub const HELP: &str = "\
Type a line to translate it. Commands:
  :swap          swap direction
  :dir <pair>    set direction (en|am or am|en)
  :translate     translate now (also :go)
  :clear         clear the input
  :menu          show or hide the menu
  :help          this help
  :quit          exit";

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    io_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<UiEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut navbar = Navbar::default();
    let mut in_flight = JoinSet::new();

    tracing::info!("[EVENT_LOOP] Waiting for events");
    loop {
        let event = tokio::select! {
            event = io_to_app_rx.recv() => event?,
            _ = cancel.cancelled() => break,
        };

        // Reap finished requests
        while in_flight.try_join_next().is_some() {}

        tracing::debug!("[EVENT_LOOP] {:?}", event);
        if event == AppEvent::Quit {
            // Text typed just before quitting (or piped in) is still in the debounce
            if state.session.flush().await {
                tracing::debug!("[EVENT_LOOP] Flushed pending input before exit");
            }

            let waiting = in_flight.len();
            if waiting > 0 {
                tracing::info!("Waiting for {waiting} request(s) before exit");
            }
            while in_flight.join_next().await.is_some() {}

            let _ = app_to_ui_tx.send(UiEvent::Close).await;
            cancel.cancel();
            break;
        }

        handle_event(&state, &mut navbar, &mut in_flight, &app_to_ui_tx, event).await?;
    }

    Ok(())
}

async fn handle_event(
    state: &AppState,
    navbar: &mut Navbar,
    in_flight: &mut JoinSet<()>,
    app_to_ui_tx: &AsyncSender<UiEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    let session = &state.session;

    match event {
        AppEvent::InputChanged(text) => handle_text_input(session, text),
        AppEvent::SetDirection(direction) => {
            handle_nav_intent(session, in_flight, navbar.select(direction));
        }
        AppEvent::SwapDirection => {
            handle_nav_intent(session, in_flight, navbar.swap(session.direction()));
        }
        AppEvent::TranslateNow => {
            handle_nav_intent(session, in_flight, navbar.translate_now());
        }
        AppEvent::ToggleMenu => {
            navbar.toggle_menu();
            app_to_ui_tx
                .send(UiEvent::Notice(navbar.render(session.direction())))
                .await?;
        }
        AppEvent::ShowHelp => {
            app_to_ui_tx.send(UiEvent::Notice(HELP.to_string())).await?;
        }
        // Handled by the loop
        AppEvent::Quit => {}
    }

    Ok(())
}
