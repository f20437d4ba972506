use tirgum_core::TranslationSession;
use tokio::task::JoinSet;

use crate::ui::navbar::NavIntent;

/// Navbar intents bypass the debounce, the request runs in the background
pub fn handle_nav_intent(session: &TranslationSession, in_flight: &mut JoinSet<()>, intent: NavIntent) {
    match intent {
        NavIntent::SetDirection(direction) => {
            // Applied here so a following swap sees the new direction
            if !session.change_direction(direction) {
                return;
            }
        }
        NavIntent::TranslateNow => tracing::info!("Translate now"),
    }

    let session = session.clone();
    in_flight.spawn(async move { session.translate_now().await });
}
