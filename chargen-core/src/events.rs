//! Domain events and observers.
//!
//! Core types never log. Mutating methods return outcome records
//! ([`AbilityChange`], [`Stacking`], [`Removal`], [`FieldChange`]) and the
//! caller decides whether to hand them to an [`Observer`].

use crate::abilities::AbilityChange;
use crate::character::{CharacterId, Field, FieldChange};
use crate::inventory::{Removal, Stacking};
use std::sync::Arc;
use tracing::{info, warn};

/// Something that happened to a character or its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainEvent {
    AbilityChanged(AbilityChange),
    ItemAdded(Stacking),
    ItemRemoved { name: String, removal: Removal },
    InventoryCleared,
    FieldChanged { field: Field, change: FieldChange },
    CharacterCreated { id: CharacterId, summary: String },
    CharacterStored { id: CharacterId, count: usize },
}

/// Receives domain events.
pub trait Observer: Send + Sync {
    fn notify(&self, event: &DomainEvent);
}

impl<T: Observer + ?Sized> Observer for Arc<T> {
    fn notify(&self, event: &DomainEvent) {
        (**self).notify(event)
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn notify(&self, _event: &DomainEvent) {}
}

/// Writes events to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn notify(&self, event: &DomainEvent) {
        match event {
            DomainEvent::AbilityChanged(change) => info!(
                ability = %change.ability,
                from = change.from,
                to = change.to,
                points_pool = change.points_pool,
                "ability updated"
            ),
            DomainEvent::ItemAdded(Stacking::Merged { name, added, total }) => {
                info!(item = %name, added, total, "added to existing stack")
            }
            DomainEvent::ItemAdded(Stacking::Appended { name, quantity }) => {
                info!(item = %name, quantity, "added new item")
            }
            DomainEvent::ItemRemoved {
                name,
                removal: Removal::Depleted,
            } => info!(item = %name, "removed from inventory (depleted)"),
            DomainEvent::ItemRemoved {
                name,
                removal: Removal::Remaining(left),
            } => info!(item = %name, remaining = left, "removed from stack"),
            DomainEvent::InventoryCleared => info!("inventory cleared"),
            DomainEvent::FieldChanged {
                field,
                change: FieldChange::Applied,
            } => info!(%field, "field changed"),
            DomainEvent::FieldChanged {
                field,
                change: FieldChange::Ignored,
            } => warn!(%field, "field not changed, new value is empty"),
            DomainEvent::CharacterCreated { id, summary } => {
                info!(%id, character = %summary, "created character")
            }
            DomainEvent::CharacterStored { id, count } => {
                info!(%id, count, "stored character")
            }
        }
    }
}

/// Collects events in memory. Handy in tests.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: std::sync::Mutex<Vec<DomainEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far.
    pub fn events(&self) -> Vec<DomainEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Observer for RecordingObserver {
    fn notify(&self, event: &DomainEvent) {
        let mut events = match self.events.lock() {
            Ok(events) => events,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::{Abilities, Ability};

    #[test]
    fn test_recording_observer() {
        let observer = RecordingObserver::new();
        let mut abilities = Abilities::default();

        let change = abilities.adjust(Ability::Luck, 2).unwrap();
        observer.notify(&DomainEvent::AbilityChanged(change));
        observer.notify(&DomainEvent::InventoryCleared);

        let events = observer.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            DomainEvent::AbilityChanged(AbilityChange {
                ability: Ability::Luck,
                to: 7,
                points_pool: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_observers_behind_arc() {
        let recorder = Arc::new(RecordingObserver::new());
        let shared: Arc<dyn Observer> = recorder.clone();
        shared.notify(&DomainEvent::InventoryCleared);
        assert_eq!(recorder.events(), vec![DomainEvent::InventoryCleared]);

        // Neither of these should panic without a subscriber.
        NoopObserver.notify(&DomainEvent::InventoryCleared);
        TracingObserver.notify(&DomainEvent::FieldChanged {
            field: Field::Name,
            change: FieldChange::Ignored,
        });
    }
}
