//! Core game logic and state management

pub mod expedition;
pub mod narrative;
pub mod scenario;
pub mod verdict;

pub use expedition::{Command, Expedition, ExpeditionState};
pub use narrative::Notice;
pub use verdict::{Outcome, VerdictSummary, CONFESSION_THRESHOLD};

use crate::data::*;
use crate::{QuestError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

/// Whoever feeds commands in and shows notices to the player.
///
/// `next_command` is the only place a session waits.
pub trait PlayerInterface {
    /// Next exploration token, or `None` once input is closed.
    fn next_command(&mut self) -> Result<Option<String>>;

    /// Name of the suspect to accuse, or `None` to walk away.
    fn ask_suspect(&mut self, suspects: &[&str]) -> Result<Option<String>>;

    fn notify(&mut self, notice: &Notice) -> Result<()>;
}

/// Current phase of the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Exploring,
    Accusation,
    Closed(GameOutcome),
}

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    CaseSolved,
    InsufficientEvidence,
    NoEvidence,
}

impl From<Outcome> for GameOutcome {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::CaseSolved => GameOutcome::CaseSolved,
            Outcome::InsufficientEvidence => GameOutcome::InsufficientEvidence,
        }
    }
}

/// Game statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub commands_issued: u32,
    pub rooms_visited: u32,
    pub clues_collected: u32,
    pub duplicate_clues: u32,
    pub blocked_moves: u32,
    pub unknown_commands: u32,
}

/// A message to display to the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub message: String,
}

impl GameMessage {
    pub fn new(severity: Severity, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            message: message.to_string(),
        }
    }
}

/// What teardown released
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeardownReport {
    pub rooms: usize,
    pub ledger_nodes: usize,
    pub index_entries: usize,
}

/// One play-through: the mansion, the notebook and the suspect index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub session: Id,
    pub title: String,
    pub synopsis: String,
    pub phase: GamePhase,
    pub stats: GameStats,
    pub message_log: Vec<GameMessage>,
    pub verdict: Option<VerdictSummary>,
    expedition: Expedition,
    suspects: SuspectIndex,
    total_clues: usize,
}

impl Game {
    /// A fresh session on the built-in case
    pub fn new() -> Self {
        Self::from_case(scenario::create_mansion_case())
    }

    pub fn from_case(case: scenario::Case) -> Self {
        let session = Id::new();
        let total_clues = case.mansion.remaining_clues();
        info!(%session, title = %case.title, rooms = case.mansion.room_count(), "new session");

        let mut game = Self {
            session,
            title: case.title,
            synopsis: case.synopsis,
            phase: GamePhase::Exploring,
            stats: GameStats::default(),
            message_log: Vec::new(),
            verdict: None,
            expedition: Expedition::new(case.mansion),
            suspects: case.suspects,
            total_clues,
        };
        let synopsis = game.synopsis.clone();
        game.add_message(GameMessage::new(Severity::Info, &synopsis));
        game
    }

    pub fn add_message(&mut self, message: GameMessage) {
        self.message_log.push(message);
    }

    pub fn expedition(&self) -> &Expedition {
        &self.expedition
    }

    pub fn ledger(&self) -> &ClueLedger {
        self.expedition.ledger()
    }

    pub fn suspects(&self) -> &SuspectIndex {
        &self.suspects
    }

    /// Clues hidden in the mansion when the session began
    pub fn total_clues(&self) -> usize {
        self.total_clues
    }

    /// Collected clues, alphabetically
    pub fn clue_listing(&self) -> Vec<String> {
        self.ledger().iter().map(str::to_string).collect()
    }

    /// An accusation needs at least one clue
    pub fn can_accuse(&self) -> bool {
        self.phase == GamePhase::Accusation && !self.ledger().is_empty()
    }

    /// Enter the mansion.
    pub fn begin(&mut self) -> Vec<Notice> {
        let mut notices = self.expedition.start();
        self.record(&notices);
        if self.phase == GamePhase::Exploring && self.expedition.is_over() {
            notices.extend(self.close_expedition());
        }
        notices
    }

    /// Feed one line of player input to whatever the current phase expects.
    pub fn submit(&mut self, input: &str) -> Result<Vec<Notice>> {
        self.stats.commands_issued += 1;
        match self.phase {
            GamePhase::Exploring => {
                let mut notices = self.begin();
                if self.phase != GamePhase::Exploring {
                    return Ok(notices);
                }
                let moved = self.expedition.handle_input(input);
                self.record(&moved);
                notices.extend(moved);
                if self.expedition.is_over() {
                    notices.extend(self.close_expedition());
                }
                Ok(notices)
            }
            GamePhase::Accusation => {
                if input.trim().is_empty() {
                    return Ok(Vec::new());
                }
                let summary = self.accuse(input)?;
                Ok(vec![Notice::Verdict(summary)])
            }
            GamePhase::Closed(outcome) => {
                Err(QuestError::InvalidState(format!("the case is closed ({outcome:?})")).into())
            }
        }
    }

    /// Name the culprit. Only valid once exploring is done and clues exist.
    pub fn accuse(&mut self, accused: &str) -> Result<VerdictSummary> {
        if self.phase != GamePhase::Accusation {
            return Err(QuestError::InvalidState(format!(
                "cannot accuse during {:?}",
                self.phase
            ))
            .into());
        }
        let summary = verdict::accuse(self.expedition.ledger(), &self.suspects, accused)?;
        info!(
            session = %self.session,
            accused = %summary.accused,
            matching = summary.matching_clues,
            outcome = ?summary.outcome,
            "verdict rendered"
        );
        let notice = Notice::Verdict(summary.clone());
        self.record(std::slice::from_ref(&notice));
        self.phase = GamePhase::Closed(summary.outcome.into());
        self.verdict = Some(summary.clone());
        Ok(summary)
    }

    fn close_expedition(&mut self) -> Vec<Notice> {
        info!(
            session = %self.session,
            state = ?self.expedition.state(),
            clues = self.ledger().len(),
            "expedition over"
        );
        let mut notices = vec![Notice::ClueListing(self.clue_listing())];
        if self.ledger().is_empty() {
            notices.push(Notice::NoEvidence);
            self.phase = GamePhase::Closed(GameOutcome::NoEvidence);
        } else {
            self.phase = GamePhase::Accusation;
        }
        self.record(&notices);
        notices
    }

    fn record(&mut self, notices: &[Notice]) {
        for notice in notices {
            match notice {
                Notice::Arrived { .. } => self.stats.rooms_visited += 1,
                Notice::ClueFound { .. } => self.stats.clues_collected += 1,
                Notice::ClueAlreadyKnown { .. } => self.stats.duplicate_clues += 1,
                Notice::NoPath(_) => self.stats.blocked_moves += 1,
                Notice::UnknownCommand(_) => self.stats.unknown_commands += 1,
                _ => {}
            }
            for line in notice.lines() {
                self.add_message(GameMessage::new(notice.severity(), &line));
            }
        }
    }

    /// Run a whole session against `player`.
    ///
    /// Returns the verdict, or `None` when there was nothing to accuse with
    /// or the player walked away.
    pub fn play(&mut self, player: &mut impl PlayerInterface) -> Result<Option<VerdictSummary>> {
        let span = info_span!("session", id = %self.session);
        let _guard = span.enter();

        for notice in self.begin() {
            player.notify(&notice)?;
        }

        while self.phase == GamePhase::Exploring {
            let input = match player.next_command()? {
                Some(input) => input,
                None => {
                    warn!("input closed while exploring, leaving the mansion");
                    "s".to_string()
                }
            };
            for notice in self.submit(&input)? {
                player.notify(&notice)?;
            }
        }

        while self.can_accuse() {
            let names = self.suspects.suspects();
            let Some(accused) = player.ask_suspect(&names)? else {
                info!("player declined to accuse anyone");
                return Ok(None);
            };
            for notice in self.submit(&accused)? {
                player.notify(&notice)?;
            }
        }

        Ok(self.verdict.clone())
    }

    /// Release the mansion, the notebook and the index.
    pub fn teardown(self) -> TeardownReport {
        let session = self.session;
        let (mansion, ledger) = self.expedition.into_parts();
        let report = TeardownReport {
            rooms: mansion.release(),
            ledger_nodes: ledger.release(),
            index_entries: self.suspects.release(),
        };
        info!(
            %session,
            rooms = report.rooms,
            ledger_nodes = report.ledger_nodes,
            index_entries = report.index_entries,
            "session torn down"
        );
        report
    }

    /// Check current game status
    pub fn check_status(&self) -> String {
        format!(
            "Room: {} | Clues: {}/{} | Moves: {} | Phase: {}",
            self.expedition.current_room().name,
            self.ledger().len(),
            self.total_clues,
            self.stats.commands_issued,
            match self.phase {
                GamePhase::Exploring => "exploring",
                GamePhase::Accusation => "accusation",
                GamePhase::Closed(_) => "closed",
            }
        )
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err_of(result: Result<Vec<Notice>>) -> QuestError {
        result
            .unwrap_err()
            .downcast::<QuestError>()
            .unwrap()
    }

    #[test]
    fn new_game_collects_entrance_clue_on_begin() {
        let mut game = Game::new();
        let notices = game.begin();
        assert!(notices.contains(&Notice::ClueFound { clue: "Wet umbrella by the door".to_string() }));
        assert_eq!(game.stats.rooms_visited, 1);
        assert_eq!(game.total_clues(), 8);
    }

    #[test]
    fn exiting_moves_to_accusation() {
        let mut game = Game::new();
        game.begin();
        let notices = game.submit("s").unwrap();
        assert!(matches!(notices.last(), Some(Notice::ClueListing(clues)) if clues.len() == 1));
        assert_eq!(game.phase, GamePhase::Accusation);
        assert!(game.can_accuse());
    }

    #[test]
    fn full_case_against_the_cook() {
        let mut game = Game::new();
        game.begin();
        game.submit("e").unwrap(); // Living Room
        game.submit("e").unwrap(); // Kitchen
        game.submit("e").unwrap(); // Pantry, dead end
        assert_eq!(game.phase, GamePhase::Accusation);
        assert_eq!(
            game.clue_listing(),
            vec!["Missing carving knife", "Torn velvet glove", "Wet umbrella by the door"]
        );

        let notices = game.submit("Cook").unwrap();
        let Some(Notice::Verdict(summary)) = notices.first() else {
            panic!("expected a verdict, got {notices:?}");
        };
        assert_eq!(summary.matching_clues, 1);
        assert_eq!(summary.outcome, Outcome::InsufficientEvidence);
        assert_eq!(game.phase, GamePhase::Closed(GameOutcome::InsufficientEvidence));
    }

    #[test]
    fn butler_confesses_with_enough_clues() {
        let mut game = Game::new();
        game.begin();
        game.submit("e").unwrap(); // Living Room: glove
        game.submit("d").unwrap(); // Dining Room: port, dead end
        let summary = game.accuse("Butler").unwrap();
        assert_eq!(summary.matching_clues, 2);
        assert_eq!(summary.outcome, Outcome::CaseSolved);
        assert_eq!(game.verdict, Some(summary));
    }

    #[test]
    fn closed_case_rejects_input() {
        let mut game = Game::new();
        game.begin();
        game.submit("s").unwrap();
        game.submit("Gardener").unwrap();
        assert!(matches!(err_of(game.submit("e")), QuestError::InvalidState(_)));
    }

    #[test]
    fn accusing_while_exploring_is_invalid() {
        let mut game = Game::new();
        game.begin();
        let err = game.accuse("Cook").unwrap_err().downcast::<QuestError>().unwrap();
        assert!(matches!(err, QuestError::InvalidState(_)));
    }

    #[test]
    fn dead_end_moves_to_accusation() {
        let mut game = Game::new();
        game.begin();
        game.submit("e").unwrap();
        game.submit("d").unwrap(); // Dining Room is a dead end
        assert_eq!(game.expedition().state(), ExpeditionState::DeadEnd);
        assert_eq!(game.phase, GamePhase::Accusation);
        assert_eq!(game.stats.clues_collected, 3);
    }

    #[test]
    fn stats_track_blocked_and_unknown() {
        let mut game = Game::new();
        game.submit("xyzzy").unwrap();
        game.submit("d").unwrap(); // Library
        game.submit("d").unwrap(); // Study
        game.submit("e").unwrap(); // Study has no left door
        assert_eq!(game.stats.unknown_commands, 1);
        assert_eq!(game.stats.blocked_moves, 1);
        assert_eq!(game.stats.rooms_visited, 3);
        assert_eq!(game.stats.commands_issued, 4);
    }

    #[test]
    fn blank_accusation_is_ignored() {
        let mut game = Game::new();
        game.submit("s").unwrap();
        assert!(game.submit("   ").unwrap().is_empty());
        assert_eq!(game.phase, GamePhase::Accusation);
    }

    #[test]
    fn teardown_releases_everything() {
        let mut game = Game::new();
        game.submit("d").unwrap();
        let report = game.teardown();
        assert_eq!(report.rooms, 9);
        assert_eq!(report.ledger_nodes, 2);
        assert_eq!(report.index_entries, scenario::SUSPECT_SEED.len());
    }

    #[test]
    fn empty_ledger_closes_without_accusation() {
        let case = scenario::Case {
            title: "Empty".to_string(),
            synopsis: String::new(),
            mansion: MansionMap::new(Room::new("Hall").left(Room::new("Closet"))),
            suspects: SuspectIndex::new(),
        };
        let mut game = Game::from_case(case);
        let notices = game.submit("e").unwrap();
        assert!(notices.contains(&Notice::NoEvidence));
        assert_eq!(game.phase, GamePhase::Closed(GameOutcome::NoEvidence));
        assert!(!game.can_accuse());
    }
}
