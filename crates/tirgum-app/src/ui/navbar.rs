use tirgum_types::Direction;

/// What the navbar asks the page to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    SetDirection(Direction),
    TranslateNow,
}

/// Direction selector plus swap and translate actions.
///
/// Only the menu state lives here, the direction is owned by the session and
/// passed in. Every action closes the menu.
#[derive(Debug, Default)]
pub struct Navbar {
    menu_open: bool,
}

impl Navbar {
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn select(&mut self, direction: Direction) -> NavIntent {
        self.menu_open = false;
        NavIntent::SetDirection(direction)
    }

    pub fn swap(&mut self, current: Direction) -> NavIntent {
        self.menu_open = false;
        NavIntent::SetDirection(current.toggled())
    }

    pub fn translate_now(&mut self) -> NavIntent {
        self.menu_open = false;
        NavIntent::TranslateNow
    }

    pub fn render(&self, current: Direction) -> String {
        let mut out = format!("Explorer  [{}]  ↔ Swap  ➤ Translate", current.title());

        if self.menu_open {
            for direction in Direction::ALL {
                let marker = if direction == current { '*' } else { ' ' };
                out.push_str(&format!(
                    "\n  {marker} :dir {:<6} {}",
                    direction.lang_pair(),
                    direction.title()
                ));
            }
            out.push_str("\n    :swap       ↔ Swap");
            out.push_str("\n    :translate  ➤ Translate");
        }

        out
    }
}
