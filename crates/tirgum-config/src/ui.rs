use serde::{Deserialize, Serialize};
use tirgum_types::Direction;

fn default_initial_text() -> String {
    "Nice to see you".to_string()
}

fn default_echo() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Text the input box starts with
    #[serde(default = "default_initial_text")]
    pub initial_text: String,
    #[serde(default)]
    pub direction: Direction,
    /// Print an `input : translation` line under the panel
    #[serde(default = "default_echo")]
    pub echo: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_text: default_initial_text(),
            direction: Direction::default(),
            echo: default_echo(),
        }
    }
}
