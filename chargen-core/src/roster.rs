//! The in-memory character store.

use crate::character::{Character, CharacterId};
use crate::inventory::Item;

/// All characters created during the life of the process.
///
/// The roster does no locking of its own; share it behind a lock when
/// requests run concurrently.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    characters: Vec<Character>,
}

/// One character paired with one of its items.
#[derive(Debug, Clone, Copy)]
pub struct ListingRow<'a> {
    pub character: &'a Character,
    pub item: &'a Item,
}

/// Flattened view of the roster.
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    /// Number of stored characters, including those with no items.
    pub count: usize,
    /// One row per (character, item); characters without items add none.
    pub rows: Vec<ListingRow<'a>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, character: Character) -> CharacterId {
        let id = character.id();
        self.characters.push(character);
        id
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id() == id)
    }

    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id() == id)
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn clear(&mut self) {
        self.characters.clear();
    }

    pub fn listing(&self) -> Listing<'_> {
        let rows = self
            .characters
            .iter()
            .flat_map(|character| {
                character
                    .inventory()
                    .items()
                    .iter()
                    .map(move |item| ListingRow { character, item })
            })
            .collect();

        Listing {
            count: self.characters.len(),
            rows,
        }
    }
}
