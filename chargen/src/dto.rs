//! Request and response bodies.

use crate::error::ApiError;
use chargen_core::{
    Abilities, AbilityScores, Character, CharacterId, Condition, DomainEvent, Inventory, Item,
    ListingRow, Observer,
};
use serde::{Deserialize, Serialize};

pub const CREATED_MESSAGE: &str = "Character created successfully";

// ============================================================================
// Requests
// ============================================================================

/// One entry of a `POST /create-character` batch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateCharacterRequest {
    pub race: String,
    pub name: String,
    pub class: String,
    pub inventory: InventoryRequest,
    pub abilities: AbilityScores,
    pub condition: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InventoryRequest {
    pub items: Vec<ItemRequest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemRequest {
    pub name: String,
    pub quantity: i64,
    pub condition: String,
    pub description: String,
    pub abilities: Option<AbilityScores>,
}

impl ItemRequest {
    pub fn into_item(self) -> Result<Item, ApiError> {
        Ok(Item::new(
            self.name,
            self.quantity,
            self.abilities,
            Condition::new(self.condition),
            self.description,
        )?)
    }
}

impl CreateCharacterRequest {
    /// Build a character, reporting inventory and creation events.
    ///
    /// Nothing is returned unless every part is valid.
    pub fn into_character(self, observer: &dyn Observer) -> Result<Character, ApiError> {
        let abilities = Abilities::from_scores(&self.abilities)?;

        let mut inventory = Inventory::new();
        for item in self.inventory.items {
            let stacking = inventory.add_item(item.into_item()?)?;
            observer.notify(&DomainEvent::ItemAdded(stacking));
        }

        let character = Character::new(
            self.race,
            self.name,
            self.class,
            abilities,
            inventory,
            Condition::new(self.condition),
        );
        observer.notify(&DomainEvent::CharacterCreated {
            id: character.id(),
            summary: format!("{character}; {}; {}", character.abilities(), character.inventory()),
        });
        Ok(character)
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemNames {
    pub items: Vec<ItemName>,
}

/// A created character as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSummary {
    pub id: CharacterId,
    pub name: String,
    pub race: String,
    pub class: String,
    pub abilities: AbilityScores,
    pub mana_points: u32,
    pub condition: Condition,
    pub inventory: ItemNames,
}

impl From<&Character> for CharacterSummary {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id(),
            name: character.name().to_string(),
            race: character.race().to_string(),
            class: character.class().to_string(),
            abilities: character.abilities().scores(),
            mana_points: character.mana_points(),
            condition: character.condition().clone(),
            inventory: ItemNames {
                items: character
                    .inventory()
                    .items()
                    .iter()
                    .map(|item| ItemName {
                        name: item.name().to_string(),
                    })
                    .collect(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateResponse {
    pub message: String,
    pub characters: Vec<CharacterSummary>,
}

/// The record handed to the sink for each stored character.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedRecord<'a> {
    pub message: &'a str,
    pub character: &'a CharacterSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub name: String,
    pub quantity: u64,
    pub condition: Condition,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowInventory {
    pub items: ItemView,
}

/// One character/item pair in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRow {
    pub id: CharacterId,
    pub name: String,
    pub race: String,
    pub class: String,
    pub abilities: AbilityScores,
    pub mana_points: u32,
    pub condition: Condition,
    pub inventory: RowInventory,
}

impl From<ListingRow<'_>> for CharacterRow {
    fn from(row: ListingRow<'_>) -> Self {
        let ListingRow { character, item } = row;
        Self {
            id: character.id(),
            name: character.name().to_string(),
            race: character.race().to_string(),
            class: character.class().to_string(),
            abilities: character.abilities().scores(),
            mana_points: character.mana_points(),
            condition: character.condition().clone(),
            inventory: RowInventory {
                items: ItemView {
                    name: item.name().to_string(),
                    quantity: item.quantity(),
                    condition: item.condition().clone(),
                    description: item.description().to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub count: usize,
    pub characters: Vec<CharacterRow>,
}
