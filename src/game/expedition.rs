//! Walking the mansion
//!
//! The expedition is a small state machine over the room tree. The player is
//! always in exactly one room, reached by following doors from the entrance;
//! the position is kept as the list of doors taken. Entering a room takes its
//! clue into the ledger.

use super::narrative::Notice;
use crate::data::{ClueLedger, Direction, MansionMap, Room};
use crate::QuestError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// A navigation command from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Exit,
}

impl Command {
    /// Parse a typed token. Case and surrounding whitespace are ignored.
    pub fn parse(input: &str) -> Result<Self, QuestError> {
        match input.trim().to_lowercase().as_str() {
            "e" | "l" | "left" => Ok(Command::Move(Direction::Left)),
            "d" | "r" | "right" => Ok(Command::Move(Direction::Right)),
            "s" | "q" | "exit" | "quit" => Ok(Command::Exit),
            _ => Err(QuestError::UnknownCommand(input.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpeditionState {
    /// Standing in a room with at least one way forward
    InRoom,
    /// The player left on their own
    Exited,
    /// Reached a room with no exits
    DeadEnd,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expedition {
    map: MansionMap,
    ledger: ClueLedger,
    path: Vec<Direction>,
    state: ExpeditionState,
    started: bool,
}

impl Expedition {
    pub fn new(map: MansionMap) -> Self {
        Self {
            map,
            ledger: ClueLedger::new(),
            path: Vec::new(),
            state: ExpeditionState::InRoom,
            started: false,
        }
    }

    /// Step into the entrance. Calling it again does nothing.
    pub fn start(&mut self) -> Vec<Notice> {
        if self.started {
            return Vec::new();
        }
        self.started = true;
        self.enter_current()
    }

    pub fn state(&self) -> ExpeditionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != ExpeditionState::InRoom
    }

    pub fn ledger(&self) -> &ClueLedger {
        &self.ledger
    }

    pub fn map(&self) -> &MansionMap {
        &self.map
    }

    /// Doors taken from the entrance to the current room
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    pub fn current_room(&self) -> &Room {
        // The path only ever grows by doors that exist.
        self.map.room_at(&self.path).unwrap_or_else(|| self.map.root())
    }

    /// Parse and apply a typed command.
    pub fn handle_input(&mut self, input: &str) -> Vec<Notice> {
        match Command::parse(input) {
            Ok(command) => self.step(command),
            Err(QuestError::UnknownCommand(token)) => {
                debug!(input = %token, "unrecognised command");
                vec![Notice::UnknownCommand(token)]
            }
            Err(other) => {
                warn!(error = %other, "unexpected parse failure");
                Vec::new()
            }
        }
    }

    /// Apply one command. Ignored once the expedition is over.
    pub fn step(&mut self, command: Command) -> Vec<Notice> {
        if self.is_over() {
            warn!(?command, state = ?self.state, "command after expedition ended");
            return Vec::new();
        }
        if !self.started {
            let mut notices = self.start();
            if !self.is_over() {
                notices.extend(self.step(command));
            }
            return notices;
        }

        match command {
            Command::Exit => {
                info!(room = %self.current_room().name, "player left the mansion");
                self.state = ExpeditionState::Exited;
                vec![Notice::Exited]
            }
            Command::Move(direction) => {
                if let Err(err) = self.current_room().navigate(direction) {
                    debug!(room = %self.current_room().name, %err, "blocked move");
                    return vec![Notice::NoPath(direction)];
                }
                self.path.push(direction);
                self.enter_current()
            }
        }
    }

    fn enter_current(&mut self) -> Vec<Notice> {
        let Some(room) = self.map.room_at_mut(&self.path) else {
            return Vec::new();
        };
        let name = room.name.clone();
        let clue = room.extract_clue();
        let dead_end = room.is_dead_end();
        let exits: Vec<(Direction, String)> = room
            .exits()
            .into_iter()
            .map(|(direction, room)| (direction, room.to_string()))
            .collect();

        info!(room = %name, depth = self.path.len(), "entered room");
        let mut notices = vec![Notice::Arrived { room: name.clone() }];

        if let Some(clue) = clue {
            if self.ledger.insert(&clue) {
                info!(%clue, collected = self.ledger.len(), "clue collected");
                notices.push(Notice::ClueFound { clue });
            } else {
                debug!(%clue, "clue already in ledger");
                notices.push(Notice::ClueAlreadyKnown { clue });
            }
        }

        if dead_end {
            info!(room = %name, "dead end reached");
            self.state = ExpeditionState::DeadEnd;
            notices.push(Notice::DeadEnd { room: name });
        } else {
            notices.push(Notice::Exits { exits });
        }
        notices
    }

    /// Hand the map and ledger back for teardown.
    pub fn into_parts(self) -> (MansionMap, ClueLedger) {
        (self.map, self.ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hall with clue-bearing West (leaf) and East, East leading on to Attic.
    fn mansion() -> MansionMap {
        MansionMap::new(
            Room::new("Hall")
                .left(Room::new("West").with_clue("A"))
                .right(Room::new("East").with_clue("B").left(Room::new("Attic").with_clue("A"))),
        )
    }

    fn clues(expedition: &Expedition) -> Vec<String> {
        expedition.ledger().iter().map(str::to_string).collect()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("e"), Ok(Command::Move(Direction::Left)));
        assert_eq!(Command::parse(" RIGHT "), Ok(Command::Move(Direction::Right)));
        assert_eq!(Command::parse("s"), Ok(Command::Exit));
        assert_eq!(Command::parse("quit"), Ok(Command::Exit));
        assert_eq!(
            Command::parse("jump"),
            Err(QuestError::UnknownCommand("jump".to_string()))
        );
        assert_eq!(Command::parse(""), Err(QuestError::UnknownCommand(String::new())));
    }

    #[test]
    fn start_enters_root() {
        let mut expedition = Expedition::new(mansion());
        let notices = expedition.start();
        assert_eq!(notices[0], Notice::Arrived { room: "Hall".to_string() });
        assert!(matches!(notices.last(), Some(Notice::Exits { exits }) if exits.len() == 2));
        assert!(expedition.start().is_empty());
    }

    #[test]
    fn moving_collects_clue_and_dead_end_terminates() {
        let mut expedition = Expedition::new(mansion());
        expedition.start();
        let notices = expedition.step(Command::Move(Direction::Left));
        assert_eq!(
            notices,
            vec![
                Notice::Arrived { room: "West".to_string() },
                Notice::ClueFound { clue: "A".to_string() },
                Notice::DeadEnd { room: "West".to_string() },
            ]
        );
        assert_eq!(expedition.state(), ExpeditionState::DeadEnd);
        assert!(expedition.step(Command::Move(Direction::Right)).is_empty());
    }

    #[test]
    fn missing_door_keeps_player_in_place() {
        let mut expedition = Expedition::new(mansion());
        expedition.start();
        expedition.step(Command::Move(Direction::Right));
        let notices = expedition.step(Command::Move(Direction::Right));
        assert_eq!(notices, vec![Notice::NoPath(Direction::Right)]);
        assert_eq!(expedition.current_room().name, "East");
        assert_eq!(expedition.state(), ExpeditionState::InRoom);
    }

    #[test]
    fn unknown_input_changes_nothing() {
        let mut expedition = Expedition::new(mansion());
        expedition.start();
        let notices = expedition.handle_input("dance");
        assert_eq!(notices, vec![Notice::UnknownCommand("dance".to_string())]);
        assert_eq!(expedition.current_room().name, "Hall");
        assert!(expedition.path().is_empty());
    }

    #[test]
    fn exit_is_terminal() {
        let mut expedition = Expedition::new(mansion());
        expedition.start();
        assert_eq!(expedition.handle_input("s"), vec![Notice::Exited]);
        assert_eq!(expedition.state(), ExpeditionState::Exited);
        assert!(expedition.is_over());
    }

    #[test]
    fn clue_found_deeper_in_the_tree() {
        let mut expedition = Expedition::new(mansion());
        expedition.start();
        expedition.step(Command::Move(Direction::Right));
        let notices = expedition.step(Command::Move(Direction::Left));
        assert!(notices.contains(&Notice::ClueFound { clue: "A".to_string() }));
        assert_eq!(clues(&expedition), vec!["A", "B"]);
        assert_eq!(expedition.map().remaining_clues(), 1);
    }

    #[test]
    fn same_clue_text_in_two_rooms_is_recorded_once() {
        let map = MansionMap::new(
            Room::new("Hall")
                .with_clue("A")
                .left(Room::new("West").with_clue("A")),
        );
        let mut expedition = Expedition::new(map);
        expedition.start();
        let notices = expedition.step(Command::Move(Direction::Left));
        assert!(notices.contains(&Notice::ClueAlreadyKnown { clue: "A".to_string() }));
        assert_eq!(expedition.ledger().len(), 1);
        assert_eq!(expedition.map().remaining_clues(), 0);
    }

    #[test]
    fn path_tracks_followed_doors() {
        let mut expedition = Expedition::new(mansion());
        expedition.start();
        expedition.handle_input("d");
        expedition.handle_input("d");
        expedition.handle_input("e");
        assert_eq!(expedition.path(), &[Direction::Right, Direction::Left]);
        assert_eq!(expedition.current_room().name, "Attic");
    }

    #[test]
    fn step_before_start_enters_root_first() {
        let mut expedition = Expedition::new(mansion());
        let notices = expedition.step(Command::Move(Direction::Left));
        assert_eq!(notices[0], Notice::Arrived { room: "Hall".to_string() });
        assert_eq!(expedition.current_room().name, "West");
    }

    #[test]
    fn leaf_root_ends_immediately() {
        let mut expedition = Expedition::new(MansionMap::new(Room::new("Closet").with_clue("Z")));
        let notices = expedition.start();
        assert_eq!(notices.len(), 3);
        assert_eq!(expedition.state(), ExpeditionState::DeadEnd);
        assert_eq!(clues(&expedition), vec!["Z"]);
    }
}
