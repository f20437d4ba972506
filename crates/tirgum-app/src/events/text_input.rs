use tirgum_core::TranslationSession;

pub fn handle_text_input(session: &TranslationSession, text: String) {
    tracing::debug!("InputChanged: {} chars", text.chars().count());
    session.on_input_change(text);
}
