//! What the game tells the player
//!
//! Every observable event is a [`Notice`]. Front ends decide how to show
//! them; `Display` gives the plain-text rendering both front ends share.

use super::verdict::{Outcome, VerdictSummary};
use crate::data::{Direction, Severity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// The player is now standing in this room
    Arrived { room: String },
    /// A clue was picked up and recorded
    ClueFound { clue: String },
    /// A clue was picked up but the ledger already had it
    ClueAlreadyKnown { clue: String },
    /// Doors out of the current room
    Exits { exits: Vec<(Direction, String)> },
    NoPath(Direction),
    UnknownCommand(String),
    /// The room has no way forward; exploration is over
    DeadEnd { room: String },
    /// The player chose to stop exploring
    Exited,
    /// Every collected clue, alphabetically
    ClueListing(Vec<String>),
    /// Nothing was collected, so nobody can be accused
    NoEvidence,
    Verdict(VerdictSummary),
}

impl Notice {
    pub fn severity(&self) -> Severity {
        match self {
            Notice::ClueFound { .. } => Severity::Discovery,
            Notice::NoPath(_)
            | Notice::UnknownCommand(_)
            | Notice::ClueAlreadyKnown { .. }
            | Notice::NoEvidence => Severity::Warning,
            Notice::Verdict(_) => Severity::Verdict,
            _ => Severity::Info,
        }
    }

    /// Plain-text lines for this notice
    pub fn lines(&self) -> Vec<String> {
        match self {
            Notice::Exits { exits } => {
                let mut lines = vec!["Where to next?".to_string()];
                for (direction, room) in exits {
                    let key = match direction {
                        Direction::Left => 'e',
                        Direction::Right => 'd',
                    };
                    lines.push(format!(" ({key}) {direction} -> {room}"));
                }
                lines.push(" (s) leave the mansion".to_string());
                lines
            }
            Notice::ClueListing(clues) if clues.is_empty() => {
                vec!["Your notebook is empty.".to_string()]
            }
            Notice::ClueListing(clues) => {
                let mut lines = vec![format!("Clues collected ({}):", clues.len())];
                lines.extend(clues.iter().map(|clue| format!("  - {clue}")));
                lines
            }
            Notice::Verdict(summary) => vec![
                format!("You accuse the {}.", summary.accused),
                format!(
                    "{} of your clues point at the {}.",
                    summary.matching_clues, summary.accused
                ),
                summary.outcome.to_string(),
            ],
            other => vec![other.to_string()],
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Arrived { room } => write!(f, "You are in the {room}."),
            Notice::ClueFound { clue } => write!(f, "You found a clue: {clue}"),
            Notice::ClueAlreadyKnown { clue } => {
                write!(f, "You already noted this one: {clue}")
            }
            Notice::Exits { .. } | Notice::ClueListing(_) | Notice::Verdict(_) => {
                write!(f, "{}", self.lines().join("\n"))
            }
            Notice::NoPath(direction) => write!(f, "There is no door to the {direction} here."),
            Notice::UnknownCommand(input) => {
                write!(f, "Unknown command '{input}', detective. Try again.")
            }
            Notice::DeadEnd { room } => {
                write!(f, "The {room} has no other exits. Your search ends here.")
            }
            Notice::Exited => write!(f, "You decide to stop exploring for now."),
            Notice::NoEvidence => {
                write!(f, "You gathered no clues. Without evidence there is no one to accuse.")
            }
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::CaseSolved => write!(f, "Faced with the evidence, the suspect confesses. Case solved!"),
            Outcome::InsufficientEvidence => {
                write!(f, "The evidence is too thin. The suspect walks free.")
            }
        }
    }
}
