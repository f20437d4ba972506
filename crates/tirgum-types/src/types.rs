use crate::direction::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// New content of the input box
    InputChanged(String),
    SetDirection(Direction),
    SwapDirection,
    /// Translate the current input without waiting for the debounce
    TranslateNow,
    ToggleMenu,
    ShowHelp,
    Quit,
}

/// Messages for the UI besides session updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Notice(String),
    Close,
}

/// Lifecycle of the translation shown in the display panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Input is empty
    #[default]
    Idle,
    /// Debounce timer running or request in flight
    Pending,
    Resolved,
    Failed,
}

/// Snapshot of a translation session, published on every change
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionView {
    pub direction: Direction,
    pub input: String,
    pub translated: String,
    pub error: String,
    pub phase: Phase,
    /// Sequence number of the last request whose outcome was applied
    pub applied_seq: u64,
}

impl SessionView {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }

    /// Error if present, else the translated text
    pub fn output(&self) -> &str {
        if self.error.is_empty() {
            &self.translated
        } else {
            &self.error
        }
    }
}
