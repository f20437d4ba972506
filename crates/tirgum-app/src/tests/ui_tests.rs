use tirgum_types::{Direction, Phase, SessionView};

use crate::ui::display::DisplayPanel;
use crate::ui::navbar::{NavIntent, Navbar};

#[test]
fn navbar_actions_close_menu() {
    let mut navbar = Navbar::default();
    assert!(!navbar.is_menu_open());

    navbar.toggle_menu();
    assert!(navbar.is_menu_open());
    assert_eq!(
        navbar.swap(Direction::EnglishToAmharic),
        NavIntent::SetDirection(Direction::AmharicToEnglish)
    );
    assert!(!navbar.is_menu_open());

    navbar.toggle_menu();
    assert_eq!(navbar.translate_now(), NavIntent::TranslateNow);
    assert!(!navbar.is_menu_open());

    navbar.toggle_menu();
    assert_eq!(
        navbar.select(Direction::EnglishToAmharic),
        NavIntent::SetDirection(Direction::EnglishToAmharic)
    );
    assert!(!navbar.is_menu_open());
}

#[test]
fn navbar_menu_lists_directions() {
    let mut navbar = Navbar::default();
    assert!(!navbar.render(Direction::EnglishToAmharic).contains(":dir"));

    navbar.toggle_menu();
    let menu = navbar.render(Direction::AmharicToEnglish);
    assert!(menu.contains("* :dir am|en"));
    assert!(menu.contains("  :dir en|am"));
}

#[test]
fn display_shows_translation_or_placeholder() {
    let panel = DisplayPanel::new(false);
    let mut view = SessionView::new(Direction::EnglishToAmharic);

    let empty = panel.render(&view);
    assert!(empty.contains("Write in English"));
    assert!(empty.contains("(Translated Amharic text will appear here)"));

    view.input = "Nice to see you".to_string();
    view.translated = "ደስ ብሎኛል".to_string();
    view.phase = Phase::Resolved;
    let resolved = panel.render(&view);
    assert!(resolved.contains("> Nice to see you"));
    assert!(resolved.ends_with("= ደስ ብሎኛል"));
}

#[test]
fn display_prefers_error_and_echoes() {
    let panel = DisplayPanel::new(true);
    let mut view = SessionView::new(Direction::AmharicToEnglish);
    view.input = "hello".to_string();
    view.error = "Translation failed. Please try again.".to_string();
    view.phase = Phase::Failed;

    let rendered = panel.render(&view);
    assert!(rendered.contains("Write in Amharic"));
    assert!(rendered.contains("= Translation failed. Please try again."));
    assert!(rendered.ends_with("hello : "));
}

#[test]
fn display_update_skips_repeats() {
    let mut panel = DisplayPanel::new(false);
    let mut view = SessionView::new(Direction::EnglishToAmharic);

    assert!(panel.update(&view).is_some());
    assert!(panel.update(&view).is_none());

    view.phase = Phase::Pending;
    view.input = "hi".to_string();
    let pending = panel.update(&view).unwrap();
    assert!(pending.ends_with("= …"));
}
