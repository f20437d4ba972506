pub mod direction;
pub mod types;

pub use direction::{Direction, ParseDirectionError};
pub use types::{AppEvent, Phase, SessionView, UiEvent};
