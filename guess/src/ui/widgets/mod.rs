//! TUI widgets for the game

pub mod input;
pub mod number_box;
pub mod scoreboard;

pub use input::InputWidget;
pub use number_box::NumberBoxWidget;
pub use scoreboard::ScoreboardWidget;
