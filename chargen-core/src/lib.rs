//! Character creation rules for a tabletop game helper.
//!
//! This crate provides:
//! - Abilities with a shared point budget
//! - Items and an inventory that stacks them by name and condition
//! - Characters and an in-memory roster
//! - Domain events with pluggable observers
//!
//! # Quick Start
//!
//! ```
//! use chargen_core::{Abilities, Character, Condition, Inventory, Item, Roster};
//!
//! let abilities = Abilities::new(7, 5, 5, 5, 5, 8)?;
//! let mut inventory = Inventory::new();
//! inventory.add_item(Item::new("Sword", 1, None, Condition::new("New"), "")?)?;
//!
//! let character = Character::new("Human", "Ash", "Fighter", abilities, inventory, Condition::healthy());
//! assert_eq!(character.mana_points(), 400);
//!
//! let mut roster = Roster::new();
//! roster.insert(character);
//! assert_eq!(roster.listing().rows.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod abilities;
pub mod character;
pub mod condition;
pub mod events;
pub mod inventory;
pub mod roster;

pub use abilities::{Abilities, Ability, AbilityChange, AbilityError, AbilityScores};
pub use character::{Character, CharacterError, CharacterId, Field, FieldChange};
pub use condition::Condition;
pub use events::{DomainEvent, NoopObserver, Observer, RecordingObserver, TracingObserver};
pub use inventory::{Inventory, InventoryError, Item, ItemUpdate, Removal, Stacking};
pub use roster::{Listing, ListingRow, Roster};
