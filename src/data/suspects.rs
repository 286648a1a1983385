//! Clue-to-suspect index
//!
//! A fixed-capacity hash table with separate chaining. Each bucket is a
//! singly linked list; insertion prepends, so the newest entry for a clue
//! shadows any older one. The table never grows.

use serde::{Deserialize, Serialize};

/// Default number of buckets
pub const TABLE_CAPACITY: usize = 10;

/// What `lookup` answers for a clue nobody is tied to
pub const UNKNOWN_SUSPECT: &str = "Unknown";

/// One clue/suspect association in a bucket chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectEntry {
    pub clue: String,
    pub suspect: String,
    pub next: Option<Box<SuspectEntry>>,
}

/// Polynomial string hash: `value = 31 * value + byte`, wrapping at 32 bits,
/// reduced into `[0, capacity)`.
pub fn hash(key: &str, capacity: usize) -> usize {
    let value = key
        .bytes()
        .fold(0u32, |value, byte| value.wrapping_mul(31).wrapping_add(u32::from(byte)));
    value as usize % capacity.max(1)
}

/// Iterator over one bucket's chain, newest first
pub struct Chain<'a> {
    next: Option<&'a SuspectEntry>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a SuspectEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some(entry)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectIndex {
    buckets: Vec<Option<Box<SuspectEntry>>>,
    len: usize,
}

impl SuspectIndex {
    /// An empty table with `capacity` buckets. A capacity of zero is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: vec![None; capacity.max(1)],
            len: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(TABLE_CAPACITY)
    }

    /// Build the index from a seed list, inserting in order.
    pub fn from_seed(seed: &[(&str, &str)]) -> Self {
        let mut index = Self::new();
        for (clue, suspect) in seed {
            index.insert(clue, suspect);
        }
        index
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_of(&self, clue: &str) -> usize {
        hash(clue, self.capacity())
    }

    /// Prepend an association to its bucket. No duplicate check.
    pub fn insert(&mut self, clue: &str, suspect: &str) {
        let bucket = self.bucket_of(clue);
        let head = self.buckets[bucket].take();
        self.buckets[bucket] = Some(Box::new(SuspectEntry {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            next: head,
        }));
        self.len += 1;
    }

    /// Suspect tied to `clue`, if the index knows one
    pub fn find(&self, clue: &str) -> Option<&str> {
        self.chain(self.bucket_of(clue))
            .find(|entry| entry.clue == clue)
            .map(|entry| entry.suspect.as_str())
    }

    /// Suspect tied to `clue`, or [`UNKNOWN_SUSPECT`]. Never fails.
    pub fn lookup(&self, clue: &str) -> &str {
        self.find(clue).unwrap_or(UNKNOWN_SUSPECT)
    }

    /// Walk a bucket's chain. Out-of-range buckets are empty.
    pub fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            next: self.buckets.get(bucket).and_then(|head| head.as_deref()),
        }
    }

    /// Distinct suspect names, in first-seen bucket order
    pub fn suspects(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for bucket in 0..self.capacity() {
            for entry in self.chain(bucket) {
                if !names.contains(&entry.suspect.as_str()) {
                    names.push(entry.suspect.as_str());
                }
            }
        }
        names
    }

    /// Release every chain, returning how many entries were freed.
    pub fn release(self) -> usize {
        let mut released = 0;
        for mut head in self.buckets {
            while let Some(mut entry) = head {
                head = entry.next.take();
                released += 1;
            }
        }
        released
    }
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self::new()
    }
}
