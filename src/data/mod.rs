//! Data structures for the mansion mystery
//!
//! The three structures the game is built on: the room tree, the clue
//! ledger (a binary search tree) and the clue-to-suspect hash table.

pub mod mansion;
pub mod ledger;
pub mod suspects;

pub use mansion::*;
pub use ledger::*;
pub use suspects::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a message shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Discovery,
    Warning,
    Verdict,
}

impl Severity {
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Discovery => "◆",
            Severity::Warning => "▲",
            Severity::Verdict => "⬤",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Discovery => write!(f, "CLUE"),
            Severity::Warning => write!(f, "WARN"),
            Severity::Verdict => write!(f, "VERDICT"),
        }
    }
}

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
