//! UI Components
//!
//! Screens and widgets of the game.

mod start_screen;
mod game_screen;
mod ready_prompt;
mod shelf;
mod item_card;
mod status_line;
mod answer_screen;
mod log_drawer;

pub use start_screen::StartScreen;
pub use game_screen::GameScreen;
pub use ready_prompt::ReadyPrompt;
pub use shelf::{AnswerRow, Shelf};
pub use item_card::ItemCard;
pub use status_line::StatusLine;
pub use answer_screen::AnswerScreen;
pub use log_drawer::LogDrawer;
