//! Accusation and verdict
//!
//! Counts how many collected clues implicate the accused and applies a
//! fixed threshold.

use crate::data::{ClueLedger, ClueNode, SuspectIndex};
use crate::QuestError;
use serde::{Deserialize, Serialize};

/// Matching clues needed for a confession
pub const CONFESSION_THRESHOLD: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    CaseSolved,
    InsufficientEvidence,
}

/// Result of an accusation, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictSummary {
    pub accused: String,
    pub matching_clues: u32,
    pub outcome: Outcome,
}

/// Count the clues under `node` whose suspect is exactly `accused`.
/// Clues the index has no suspect for never count.
pub fn tally(node: Option<&ClueNode>, suspects: &SuspectIndex, accused: &str) -> u32 {
    match node {
        None => 0,
        Some(node) => {
            let here = u32::from(suspects.find(&node.clue) == Some(accused));
            here + tally(node.left.as_deref(), suspects, accused)
                + tally(node.right.as_deref(), suspects, accused)
        }
    }
}

pub fn decide(count: u32) -> Outcome {
    if count >= CONFESSION_THRESHOLD {
        Outcome::CaseSolved
    } else {
        Outcome::InsufficientEvidence
    }
}

/// Accuse `accused` with everything in the ledger.
///
/// Refuses with [`QuestError::EmptyLedger`] when nothing was collected; the
/// caller is expected to skip the accusation prompt in that case.
pub fn accuse(
    ledger: &ClueLedger,
    suspects: &SuspectIndex,
    accused: &str,
) -> Result<VerdictSummary, QuestError> {
    if ledger.is_empty() {
        return Err(QuestError::EmptyLedger);
    }
    let accused = accused.trim();
    let matching_clues = tally(ledger.root(), suspects, accused);
    Ok(VerdictSummary {
        accused: accused.to_string(),
        matching_clues,
        outcome: decide(matching_clues),
    })
}
