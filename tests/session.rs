//! Whole-session tests
//!
//! Drive games end to end through a scripted player.

use detective_quest::game::scenario::{self, Case};
use detective_quest::game::{GameOutcome, GamePhase, Notice, Outcome, PlayerInterface};
use detective_quest::{Direction, Game, MansionMap, Result, Room, SuspectIndex, UNKNOWN_SUSPECT};
use std::collections::VecDeque;

/// Plays back a fixed list of commands and an optional accusation
#[derive(Default)]
struct ScriptedPlayer {
    commands: VecDeque<String>,
    accusation: Option<String>,
    asked_for_suspect: bool,
    seen: Vec<Notice>,
}

impl ScriptedPlayer {
    fn new(commands: &[&str], accusation: Option<&str>) -> Self {
        Self {
            commands: commands.iter().map(|c| c.to_string()).collect(),
            accusation: accusation.map(str::to_string),
            ..Self::default()
        }
    }
}

impl PlayerInterface for ScriptedPlayer {
    fn next_command(&mut self) -> Result<Option<String>> {
        Ok(self.commands.pop_front())
    }

    fn ask_suspect(&mut self, _suspects: &[&str]) -> Result<Option<String>> {
        self.asked_for_suspect = true;
        Ok(self.accusation.take())
    }

    fn notify(&mut self, notice: &Notice) -> Result<()> {
        self.seen.push(notice.clone());
        Ok(())
    }
}

fn case_with(mansion: MansionMap, seed: &[(&str, &str)]) -> Case {
    Case {
        title: "Test".to_string(),
        synopsis: String::new(),
        mansion,
        suspects: SuspectIndex::from_seed(seed),
    }
}

fn listing(player: &ScriptedPlayer) -> Option<Vec<String>> {
    player.seen.iter().find_map(|n| match n {
        Notice::ClueListing(clues) => Some(clues.clone()),
        _ => None,
    })
}

#[test]
fn left_then_right_then_exit_collects_both_clues_in_order() {
    let mansion = MansionMap::new(
        Room::new("Hall").left(
            Room::new("Parlour")
                .with_clue("B")
                .right(Room::new("Gallery").with_clue("A").left(Room::new("Vault"))),
        ),
    );
    let mut game = Game::from_case(case_with(mansion, &[]));
    let mut player = ScriptedPlayer::new(&["e", "d", "s"], None);
    game.play(&mut player).unwrap();

    assert_eq!(listing(&player), Some(vec!["A".to_string(), "B".to_string()]));
    assert!(player.seen.contains(&Notice::Exited));
}

#[test]
fn seeded_lookup_and_unknown_sentinel() {
    let index = SuspectIndex::from_seed(&[("X", "Cook")]);
    assert_eq!(index.lookup("X"), "Cook");
    assert_eq!(index.lookup("Y"), UNKNOWN_SUSPECT);
}

#[test]
fn two_matching_clues_solve_one_does_not() {
    let seed = [("knife", "Cook"), ("flour", "Cook"), ("glove", "Butler")];
    let mansion = || {
        MansionMap::new(
            Room::new("Hall")
                .with_clue("knife")
                .left(Room::new("Pantry").with_clue("flour"))
                .right(Room::new("Cloakroom").with_clue("glove")),
        )
    };

    let mut game = Game::from_case(case_with(mansion(), &seed));
    let verdict = game.play(&mut ScriptedPlayer::new(&["e"], Some("Cook"))).unwrap().unwrap();
    assert_eq!(verdict.matching_clues, 2);
    assert_eq!(verdict.outcome, Outcome::CaseSolved);

    let mut game = Game::from_case(case_with(mansion(), &seed));
    let verdict = game.play(&mut ScriptedPlayer::new(&["d"], Some("Cook"))).unwrap().unwrap();
    assert_eq!(verdict.matching_clues, 1);
    assert_eq!(verdict.outcome, Outcome::InsufficientEvidence);
    assert_eq!(game.phase, GamePhase::Closed(GameOutcome::InsufficientEvidence));
}

#[test]
fn empty_ledger_skips_the_accusation() {
    let mansion = MansionMap::new(Room::new("Hall").right(Room::new("Closet")));
    let mut game = Game::from_case(case_with(mansion, &[("knife", "Cook")]));
    let mut player = ScriptedPlayer::new(&["d"], Some("Cook"));
    let verdict = game.play(&mut player).unwrap();

    assert!(verdict.is_none());
    assert!(!player.asked_for_suspect);
    assert!(player.seen.contains(&Notice::NoEvidence));
    assert_eq!(game.phase, GamePhase::Closed(GameOutcome::NoEvidence));
}

#[test]
fn blocked_and_unknown_commands_do_not_move_the_player() {
    let mut game = Game::new();
    let mut player = ScriptedPlayer::new(&["d", "d", "e", "hop", "d", "Butler"], Some("Gardener"));
    game.play(&mut player).unwrap();

    assert!(player.seen.contains(&Notice::NoPath(Direction::Left)));
    assert!(player.seen.contains(&Notice::UnknownCommand("hop".to_string())));
    let rooms: Vec<&str> = player
        .seen
        .iter()
        .filter_map(|n| match n {
            Notice::Arrived { room } => Some(room.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(rooms, vec!["Entrance Hall", "Library", "Study", "Hidden Archive"]);
}

#[test]
fn every_visited_room_is_a_child_of_the_previous_one() {
    let scripts: [&[&str]; 4] = [
        &["e", "e", "e"],
        &["d", "e"],
        &["e", "x", "d", "d"],
        &["d", "d", "e", "d", "s"],
    ];
    for script in scripts {
        let mut game = Game::new();
        let mut player = ScriptedPlayer::new(script, None);
        game.play(&mut player).unwrap();

        let map = scenario::build_mansion();
        let mut current = map.root();
        for notice in player.seen.iter().skip(1) {
            if let Notice::Arrived { room } = notice {
                current = current
                    .exits()
                    .into_iter()
                    .find(|(_, name)| name == room)
                    .and_then(|(d, _)| current.child(d))
                    .unwrap_or_else(|| panic!("{room} is not reachable from {}", current.name));
            }
        }
    }
}

#[test]
fn full_sweep_of_one_wing_against_each_suspect() {
    for (accused, expected) in [("Butler", Outcome::InsufficientEvidence), ("Gardener", Outcome::CaseSolved)] {
        let mut game = Game::new();
        // Entrance Hall, Library, Study, Hidden Archive
        let verdict = game
            .play(&mut ScriptedPlayer::new(&["d", "d", "d"], Some(accused)))
            .unwrap()
            .unwrap();
        assert_eq!(verdict.outcome, expected, "accusing {accused}");
    }
}

#[test]
fn teardown_after_verdict_releases_all_structures() {
    let mut game = Game::new();
    game.play(&mut ScriptedPlayer::new(&["e", "d"], Some("Butler"))).unwrap();
    let report = game.teardown();
    assert_eq!(report.rooms, 9);
    assert_eq!(report.ledger_nodes, 3);
    assert_eq!(report.index_entries, scenario::SUSPECT_SEED.len());
}
