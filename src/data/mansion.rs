//! The mansion map: a fixed binary tree of rooms
//!
//! Every room is owned by its parent and the root by the map. Structure is
//! frozen after assembly; the only mutation is a room giving up its clue.

use crate::QuestError;
use serde::{Deserialize, Serialize};

/// Which door the player walks through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// A room of the mansion, optionally holding one clue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    clue: Option<String>,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            clue: None,
            left: None,
            right: None,
        }
    }

    /// Hide a clue in the room. Blank text means "no clue".
    pub fn with_clue(mut self, clue: &str) -> Self {
        self.clue = if clue.trim().is_empty() { None } else { Some(clue.to_string()) };
        self
    }

    pub fn left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    pub fn right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    /// The clue still lying in this room, if it has not been taken
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    pub fn child_mut(&mut self, direction: Direction) -> Option<&mut Room> {
        match direction {
            Direction::Left => self.left.as_deref_mut(),
            Direction::Right => self.right.as_deref_mut(),
        }
    }

    /// Follow the door in `direction`.
    pub fn navigate(&self, direction: Direction) -> Result<&Room, QuestError> {
        self.child(direction).ok_or(QuestError::NoSuchPath(direction))
    }

    /// Take the clue out of the room. A room yields its clue at most once.
    pub fn extract_clue(&mut self) -> Option<String> {
        self.clue.take()
    }

    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Doors leading out of this room, left first
    pub fn exits(&self) -> Vec<(Direction, &str)> {
        [Direction::Left, Direction::Right]
            .into_iter()
            .filter_map(|d| self.child(d).map(|room| (d, room.name.as_str())))
            .collect()
    }

    fn count(&self, f: &impl Fn(&Room) -> bool) -> usize {
        let own = usize::from(f(self));
        own + self.left.as_ref().map_or(0, |r| r.count(f))
            + self.right.as_ref().map_or(0, |r| r.count(f))
    }
}

/// Post-order release: left subtree, right subtree, then the node itself.
fn release_room(room: Option<Box<Room>>) -> usize {
    match room {
        None => 0,
        Some(mut room) => {
            let released = release_room(room.left.take()) + release_room(room.right.take());
            drop(room);
            released + 1
        }
    }
}

/// The whole mansion, rooted at the entrance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MansionMap {
    root: Box<Room>,
}

impl MansionMap {
    pub fn new(root: Room) -> Self {
        Self { root: Box::new(root) }
    }

    pub fn root(&self) -> &Room {
        &self.root
    }

    /// Walk from the entrance along `path`. `None` if any door is missing.
    pub fn room_at(&self, path: &[Direction]) -> Option<&Room> {
        path.iter()
            .try_fold(&*self.root, |room, &d| room.child(d))
    }

    pub fn room_at_mut(&mut self, path: &[Direction]) -> Option<&mut Room> {
        path.iter()
            .try_fold(&mut *self.root, |room, &d| room.child_mut(d))
    }

    pub fn room_count(&self) -> usize {
        self.root.count(&|_: &Room| true)
    }

    /// Clues not yet collected
    pub fn remaining_clues(&self) -> usize {
        self.root.count(&|r: &Room| r.clue.is_some())
    }

    /// Tear the tree down, returning how many rooms were released.
    pub fn release(self) -> usize {
        release_room(Some(self.root))
    }
}
