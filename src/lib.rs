//! Detective Quest: a mystery in a mansion
//!
//! Walk the rooms of a fixed mansion, pocket the clues you find, then name
//! the culprit. The case is built from three structures:
//!
//! - a binary tree of rooms, each holding at most one clue
//! - a binary search tree of collected clues, kept in alphabetical order
//! - a chained hash table tying each clue to the suspect it points at
//!
//! # Architecture
//!
//! - `data` - Room tree, clue ledger, suspect index
//! - `game` - Expedition loop, verdict, session state and the fixed case file
//! - `tui` - Terminal user interface with ratatui
//! - `console` - Plain line-based front end
//! - `config` - Runtime settings from arguments and environment

pub mod config;
pub mod console;
pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Conditions the game recovers from by telling the player
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestError {
    #[error("There is no door to the {0} here.")]
    NoSuchPath(Direction),

    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),

    #[error("No clues collected, there is nothing to accuse anyone with")]
    EmptyLedger,

    #[error("Invalid game state: {0}")]
    InvalidState(String),
}
