//! Characters: identity, abilities, inventory and condition.

use crate::abilities::{Abilities, AbilityError};
use crate::condition::Condition;
use crate::inventory::{Inventory, InventoryError, Item, Stacking};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Mana granted per point of intelligence.
pub const MANA_PER_INTELLIGENCE: u32 = 50;

/// Unique identifier for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Character fields that can be changed or must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Race,
    Name,
    Class,
    Condition,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Race => "race",
            Field::Name => "name",
            Field::Class => "class",
            Field::Condition => "condition",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from character validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharacterError {
    #[error("character validation failed: {0} cannot be empty")]
    EmptyField(Field),

    #[error(transparent)]
    Ability(#[from] AbilityError),
}

/// Whether a setter changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldChange {
    Applied,
    /// The replacement was blank, so the old value was kept.
    Ignored,
}

/// A player character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    id: CharacterId,
    race: String,
    name: String,
    class: String,
    abilities: Abilities,
    inventory: Inventory,
    condition: Condition,
    mana_points: u32,
}

impl Character {
    /// Assemble a character. Nothing is validated here; call
    /// [`Character::validate`] when that matters.
    pub fn new(
        race: impl Into<String>,
        name: impl Into<String>,
        class: impl Into<String>,
        abilities: Abilities,
        inventory: Inventory,
        condition: Condition,
    ) -> Self {
        let mana_points = u32::from(abilities.intelligence()) * MANA_PER_INTELLIGENCE;
        Self {
            id: CharacterId::new(),
            race: race.into(),
            name: name.into(),
            class: class.into(),
            abilities,
            inventory,
            condition,
            mana_points,
        }
    }

    /// Default abilities, an empty inventory and a healthy condition.
    pub fn with_defaults(
        race: impl Into<String>,
        name: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        Self::new(
            race,
            name,
            class,
            Abilities::default(),
            Inventory::new(),
            Condition::healthy(),
        )
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn race(&self) -> &str {
        &self.race
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn abilities(&self) -> &Abilities {
        &self.abilities
    }

    /// Mutable access to abilities.
    ///
    /// Mana points are fixed at construction and do not follow later
    /// intelligence changes.
    pub fn abilities_mut(&mut self) -> &mut Abilities {
        &mut self.abilities
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn mana_points(&self) -> u32 {
        self.mana_points
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> FieldChange {
        replace_unless_blank(&mut self.name, name.into())
    }

    pub fn set_class(&mut self, class: impl Into<String>) -> FieldChange {
        replace_unless_blank(&mut self.class, class.into())
    }

    pub fn set_condition(&mut self, condition: Condition) -> FieldChange {
        if condition.is_blank() {
            return FieldChange::Ignored;
        }
        self.condition = condition;
        FieldChange::Applied
    }

    pub fn set_inventory(&mut self, inventory: Inventory) {
        self.inventory = inventory;
    }

    /// Add an item to the inventory, stacking where possible.
    pub fn add_item(&mut self, item: Item) -> Result<Stacking, InventoryError> {
        self.inventory.add_item(item)
    }

    /// Check identity fields are non-empty and abilities are in range.
    ///
    /// Only the empty string counts as missing here; whitespace is kept.
    pub fn validate(&self) -> Result<(), CharacterError> {
        for (field, value) in [
            (Field::Race, &self.race),
            (Field::Name, &self.name),
            (Field::Class, &self.class),
        ] {
            if value.is_empty() {
                return Err(CharacterError::EmptyField(field));
            }
        }
        self.abilities.validate()?;
        Ok(())
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}), condition {}",
            self.race, self.name, self.class, self.condition
        )
    }
}

fn replace_unless_blank(slot: &mut String, value: String) -> FieldChange {
    if value.trim().is_empty() {
        return FieldChange::Ignored;
    }
    *slot = value;
    FieldChange::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::Ability;

    fn sample() -> Character {
        let abilities = Abilities::new(7, 5, 5, 5, 5, 8).unwrap();
        Character::new(
            "Elf",
            "Lirael",
            "Ranger",
            abilities,
            Inventory::new(),
            Condition::new("Rested"),
        )
    }

    #[test]
    fn test_mana_points_from_intelligence() {
        let character = sample();
        assert_eq!(character.mana_points(), 400);
    }

    #[test]
    fn test_with_defaults() {
        let character = Character::with_defaults("Dwarf", "Thorin", "Fighter");
        assert_eq!(character.condition().as_str(), "Healthy");
        assert!(character.inventory().is_empty());
        assert_eq!(character.abilities().points_pool(), 5);
        assert_eq!(character.mana_points(), 250);
        assert!(character.validate().is_ok());
    }

    #[test]
    fn test_mana_points_are_not_recomputed() {
        let mut character = Character::with_defaults("Dwarf", "Thorin", "Fighter");
        character
            .abilities_mut()
            .adjust(Ability::Intelligence, 3)
            .unwrap();
        assert_eq!(character.abilities().intelligence(), 8);
        assert_eq!(character.mana_points(), 250);
    }

    #[test]
    fn test_validate_empty_fields() {
        let character = Character::with_defaults("", "Nameless", "Rogue");
        assert_eq!(
            character.validate(),
            Err(CharacterError::EmptyField(Field::Race))
        );

        let character = Character::with_defaults("Human", "", "Rogue");
        assert_eq!(
            character.validate(),
            Err(CharacterError::EmptyField(Field::Name))
        );

        let character = Character::with_defaults("Human", "Ash", "");
        assert_eq!(
            character.validate(),
            Err(CharacterError::EmptyField(Field::Class))
        );
    }

    #[test]
    fn test_validate_accepts_whitespace_fields() {
        let character = Character::with_defaults(" ", "Ash", "Bard");
        assert!(character.validate().is_ok());

        let character = Character::with_defaults("Human", "  ", "\t");
        assert!(character.validate().is_ok());
    }

    #[test]
    fn test_error_message() {
        let err = CharacterError::EmptyField(Field::Name);
        assert_eq!(
            err.to_string(),
            "character validation failed: name cannot be empty"
        );
    }

    #[test]
    fn test_blank_setters_are_ignored() {
        let mut character = sample();

        assert_eq!(character.set_name(""), FieldChange::Ignored);
        assert_eq!(character.name(), "Lirael");
        assert_eq!(character.set_name("Sabriel"), FieldChange::Applied);
        assert_eq!(character.name(), "Sabriel");

        assert_eq!(character.set_class("  "), FieldChange::Ignored);
        assert_eq!(character.class(), "Ranger");
        assert_eq!(character.set_class("Necromancer"), FieldChange::Applied);
        assert_eq!(character.class(), "Necromancer");

        assert_eq!(
            character.set_condition(Condition::default()),
            FieldChange::Ignored
        );
        assert_eq!(character.condition().as_str(), "Rested");
        assert_eq!(
            character.set_condition(Condition::new("Wounded")),
            FieldChange::Applied
        );
        assert_eq!(character.condition().as_str(), "Wounded");
    }

    #[test]
    fn test_add_item_stacks() {
        let mut character = sample();
        let arrows = || Item::new("Arrow", 12, None, Condition::new("New"), "").unwrap();

        character.add_item(arrows()).unwrap();
        let outcome = character.add_item(arrows()).unwrap();
        assert!(matches!(outcome, Stacking::Merged { total: 24, .. }));
        assert_eq!(character.inventory().len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(sample().id(), sample().id());
    }
}
