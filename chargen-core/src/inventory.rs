//! Items and the inventory that stacks them.

use crate::abilities::{Ability, AbilityScores};
use crate::condition::Condition;
use std::fmt;
use thiserror::Error;

/// Lowest nonzero bonus an item may grant to one ability.
pub const MIN_ITEM_ABILITY_VALUE: i32 = 1;
/// Highest bonus an item may grant to one ability.
pub const MAX_ITEM_ABILITY_VALUE: i32 = 4;

/// Errors from item construction and inventory operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("item quantity must be positive, got {0}")]
    InvalidQuantity(i64),

    #[error("item ability {ability} value {value} must be 0 or in range [1, 4]")]
    ModifierOutOfRange { ability: Ability, value: i32 },

    #[error("item {0} not found in inventory")]
    NotFound(String),

    #[error("insufficient quantity of {name}: have {have}, need {need}")]
    InsufficientQuantity { name: String, have: u64, need: u64 },

    #[error("stack of {name} would overflow: have {have}, adding {added}")]
    QuantityOverflow { name: String, have: u64, added: u64 },
}

// ============================================================================
// Item
// ============================================================================

/// A single inventory entry.
///
/// Two items with the same name and condition are the same stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    quantity: u64,
    abilities: Option<AbilityScores>,
    condition: Condition,
    description: String,
}

impl Item {
    /// Create an item. Quantity must be positive and every bonus must be
    /// 0 (no bonus) or within [1, 4].
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        abilities: Option<AbilityScores>,
        condition: Condition,
        description: impl Into<String>,
    ) -> Result<Self, InventoryError> {
        let quantity = match u64::try_from(quantity) {
            Ok(q) if q > 0 => q,
            _ => return Err(InventoryError::InvalidQuantity(quantity)),
        };

        if let Some(bonus) = &abilities {
            validate_bonus(bonus)?;
        }

        Ok(Self {
            name: name.into(),
            quantity,
            abilities,
            condition,
            description: description.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }

    pub fn abilities(&self) -> Option<&AbilityScores> {
        self.abilities.as_ref()
    }

    pub fn set_abilities(&mut self, abilities: Option<AbilityScores>) {
        self.abilities = abilities;
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn set_condition(&mut self, condition: Condition) {
        self.condition = condition;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// True if `other` belongs in the same stack.
    pub fn stacks_with(&self, other: &Item) -> bool {
        self.name == other.name && self.condition == other.condition
    }

    fn apply(&mut self, update: ItemUpdate) {
        match update {
            ItemUpdate::Name(name) => self.set_name(name),
            ItemUpdate::Quantity(quantity) => self.set_quantity(quantity),
            ItemUpdate::Condition(condition) => self.set_condition(condition),
            ItemUpdate::Description(description) => self.set_description(description),
            ItemUpdate::Abilities(abilities) => self.set_abilities(abilities),
        }
    }
}

fn validate_bonus(bonus: &AbilityScores) -> Result<(), InventoryError> {
    let range = MIN_ITEM_ABILITY_VALUE..=MAX_ITEM_ABILITY_VALUE;
    for ability in Ability::all() {
        let value = bonus.get(ability);
        if value != 0 && !range.contains(&value) {
            return Err(InventoryError::ModifierOutOfRange { ability, value });
        }
    }
    Ok(())
}

/// A single field change for [`Inventory::change_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemUpdate {
    Name(String),
    Quantity(u64),
    Condition(Condition),
    Description(String),
    Abilities(Option<AbilityScores>),
}

// ============================================================================
// Inventory
// ============================================================================

/// What [`Inventory::add_item`] did with an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stacking {
    /// Quantity was added to an existing stack.
    Merged { name: String, added: u64, total: u64 },
    /// The item became a new entry.
    Appended { name: String, quantity: u64 },
}

/// What [`Inventory::remove_item`] left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Remaining(u64),
    /// The stack hit zero and was removed.
    Depleted,
}

/// Ordered character inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, stacking it onto an entry with the same name and
    /// condition. New entries keep insertion order.
    ///
    /// Fails without touching the inventory if the merged stack would not
    /// fit in a `u64`.
    pub fn add_item(&mut self, item: Item) -> Result<Stacking, InventoryError> {
        if let Some(existing) = self.items.iter_mut().find(|i| i.stacks_with(&item)) {
            let Some(total) = existing.quantity.checked_add(item.quantity) else {
                return Err(InventoryError::QuantityOverflow {
                    name: item.name,
                    have: existing.quantity,
                    added: item.quantity,
                });
            };
            existing.quantity = total;
            return Ok(Stacking::Merged {
                name: item.name,
                added: item.quantity,
                total: existing.quantity,
            });
        }

        let outcome = Stacking::Appended {
            name: item.name.clone(),
            quantity: item.quantity,
        };
        self.items.push(item);
        Ok(outcome)
    }

    /// Remove `quantity` units from the first item called `name`.
    ///
    /// Fails without touching the inventory if the item is missing or short.
    pub fn remove_item(&mut self, name: &str, quantity: u64) -> Result<Removal, InventoryError> {
        let idx = self
            .items
            .iter()
            .position(|i| i.name == name)
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))?;

        let item = &mut self.items[idx];
        if item.quantity < quantity {
            return Err(InventoryError::InsufficientQuantity {
                name: name.to_string(),
                have: item.quantity,
                need: quantity,
            });
        }

        item.quantity -= quantity;
        if item.quantity == 0 {
            self.items.remove(idx);
            Ok(Removal::Depleted)
        } else {
            Ok(Removal::Remaining(item.quantity))
        }
    }

    /// First item with this name, whatever its condition.
    pub fn get_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn get_item_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.name == name)
    }

    /// Check if some item with this name has at least `quantity` units.
    pub fn has_item(&self, name: &str, quantity: u64) -> bool {
        self.items
            .iter()
            .any(|i| i.name == name && i.quantity >= quantity)
    }

    /// Apply updates in order to the first item called `name`.
    ///
    /// Returns the updated item, or `None` if there is no such item.
    ///
    /// Updates are applied as given. Stacking is not re-run, so a new name
    /// or condition may match another entry, and `Quantity(0)` leaves an
    /// empty entry in place.
    pub fn change_item(
        &mut self,
        name: &str,
        updates: impl IntoIterator<Item = ItemUpdate>,
    ) -> Option<&Item> {
        let item = self.get_item_mut(name)?;
        for update in updates {
            item.apply(update);
        }
        Some(&*item)
    }

    /// Sum of all quantities, saturating at `u64::MAX`. Items carry no
    /// weight of their own, so the count stands in for it.
    pub fn total_weight(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, i| acc.saturating_add(i.quantity))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Inventory:")?;
        for item in &self.items {
            writeln!(
                f,
                "Name: {}, Quantity: {}, Condition: {}, Description: {}",
                item.name, item.quantity, item.condition, item.description
            )?;
        }
        write!(f, "Total weight: {}", self.total_weight())
    }
}
