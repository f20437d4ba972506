use kanal::AsyncSender;
use tirgum_types::{AppEvent, Direction, ParseDirectionError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command ':{0}'")]
    Unknown(String),

    #[error("Missing direction, try ':dir en|am'")]
    MissingDirection,

    #[error(transparent)]
    Direction(#[from] ParseDirectionError),
}

/// Map one stdin line to an event. Lines starting with ':' are commands,
/// anything else replaces the input text.
pub fn parse_line(line: &str) -> Result<AppEvent, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);

    let Some(command) = line.strip_prefix(':') else {
        return Ok(AppEvent::InputChanged(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();

    match name {
        "swap" | "s" => Ok(AppEvent::SwapDirection),
        "translate" | "go" | "t" => Ok(AppEvent::TranslateNow),
        "clear" | "c" => Ok(AppEvent::InputChanged(String::new())),
        "menu" | "m" => Ok(AppEvent::ToggleMenu),
        "help" | "h" | "?" => Ok(AppEvent::ShowHelp),
        "quit" | "q" | "exit" => Ok(AppEvent::Quit),
        "dir" | "d" => {
            let pair = parts.next().ok_or(CommandError::MissingDirection)?;
            Ok(AppEvent::SetDirection(pair.parse::<Direction>()?))
        }
        // "::text" sends text that starts with a colon
        _ if command.starts_with(':') => Ok(AppEvent::InputChanged(command.to_string())),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Reads stdin line by line until cancelled. EOF and ':quit' ask the event
/// loop to quit.
pub async fn watcher_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    tracing::info!("Reading input from stdin, ':help' for commands");
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = cancel.cancelled() => break,
        };

        let Some(line) = line else {
            tracing::info!("stdin closed");
            event_tx.send(AppEvent::Quit).await?;
            cancel.cancelled().await;
            break;
        };

        let event = match parse_line(&line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("{e}");
                AppEvent::ShowHelp
            }
        };

        let quit = event == AppEvent::Quit;
        event_tx.send(event).await?;
        if quit {
            // The event loop drains pending requests, then cancels
            cancel.cancelled().await;
            break;
        }
    }

    Ok(())
}
