//! The case file: the mansion layout and who each clue points at
//!
//! All of this is compiled in. The mansion is assembled once per session
//! and the suspect index is seeded before the first step is taken.

use crate::data::*;
use serde::{Deserialize, Serialize};

/// People who can be accused
pub const SUSPECTS: [&str; 3] = ["Butler", "Cook", "Gardener"];

/// Clue/suspect associations, inserted in this order.
///
/// The port glass is listed twice; the later entry wins on lookup.
pub const SUSPECT_SEED: [(&str, &str); 9] = [
    ("Wet umbrella by the door", "Gardener"),
    ("Torn velvet glove", "Butler"),
    ("Missing carving knife", "Cook"),
    ("Spilled glass of port", "Cook"),
    ("Bookmark with a threat", "Butler"),
    ("Flour on the orchid leaves", "Cook"),
    ("Burned letter in the grate", "Gardener"),
    ("Spilled glass of port", "Butler"),
    ("Mud on the library ladder", "Gardener"),
];

/// Everything needed to start a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub title: String,
    pub synopsis: String,
    pub mansion: MansionMap,
    pub suspects: SuspectIndex,
}

/// Assemble the mansion, top-down.
pub fn build_mansion() -> MansionMap {
    let living_room = Room::new("Living Room")
        .with_clue("Torn velvet glove")
        .left(
            Room::new("Kitchen")
                .with_clue("Missing carving knife")
                .left(Room::new("Pantry")),
        )
        .right(Room::new("Dining Room").with_clue("Spilled glass of port"));

    let library = Room::new("Library")
        .with_clue("Bookmark with a threat")
        .left(Room::new("Winter Garden").with_clue("Flour on the orchid leaves"))
        .right(
            Room::new("Study")
                .with_clue("Unmarked brass key")
                .right(Room::new("Hidden Archive").with_clue("Burned letter in the grate")),
        );

    MansionMap::new(
        Room::new("Entrance Hall")
            .with_clue("Wet umbrella by the door")
            .left(living_room)
            .right(library),
    )
}

pub fn create_mansion_case() -> Case {
    Case {
        title: "The Manor Affair".to_string(),
        synopsis: "Lord Ashgrove was found dead in his study. Search the manor, \
                   gather what you can, and name the one responsible."
            .to_string(),
        mansion: build_mansion(),
        suspects: SuspectIndex::from_seed(&SUSPECT_SEED),
    }
}
