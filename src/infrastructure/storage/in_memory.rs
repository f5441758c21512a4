//! In-memory storage implementation

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::storage::{Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

#[derive(Debug)]
struct Slot<E> {
    seq: u64,
    entity: E,
}

#[derive(Debug)]
struct Entries<E> {
    next_seq: u64,
    slots: HashMap<String, Slot<E>>,
}

impl<E> Entries<E> {
    fn ordered(&self) -> Vec<&E> {
        let mut slots: Vec<&Slot<E>> = self.slots.values().collect();
        slots.sort_by_key(|slot| slot.seq);
        slots.into_iter().map(|slot| &slot.entity).collect()
    }
}

/// Thread-safe in-memory storage implementation
///
/// Entities are listed in insertion order; updates keep an entity's position.
/// Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    entries: RwLock<Entries<E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Entries {
                next_seq: 0,
                slots: HashMap::new(),
            }),
        }
    }

    /// Creates storage pre-populated with entities, in the given order.
    /// A later entity with an already-seen key replaces the earlier one.
    pub fn with_entities(entities: Vec<E>) -> Self {
        let mut slots = HashMap::with_capacity(entities.len());
        let mut next_seq = 0;

        for entity in entities {
            let key = entity.key().as_str().to_string();
            let seq = slots.get(&key).map_or(next_seq, |slot: &Slot<E>| slot.seq);
            slots.insert(key, Slot { seq, entity });
            next_seq += 1;
        }

        Self {
            entries: RwLock::new(Entries { next_seq, slots }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Entries<E>>, DomainError> {
        self.entries
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Entries<E>>, DomainError> {
        self.entries
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let entries = self.read()?;
        Ok(entries.slots.get(key.as_str()).map(|slot| slot.entity.clone()))
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        let entries = self.read()?;
        Ok(entries.ordered().into_iter().cloned().collect())
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut entries = self.write()?;

        if entries.slots.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Entity with key '{}' already exists",
                key
            )));
        }

        let seq = entries.next_seq;
        entries.next_seq += 1;
        entries.slots.insert(
            key,
            Slot {
                seq,
                entity: entity.clone(),
            },
        );
        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<E, DomainError> {
        let mut entries = self.write()?;

        let Some(slot) = entries.slots.get_mut(entity.key().as_str()) else {
            return Err(DomainError::not_found(format!(
                "Entity with key '{}' not found",
                entity.key().as_str()
            )));
        };

        slot.entity = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        let mut entries = self.write()?;
        Ok(entries.slots.remove(key.as_str()).is_some())
    }

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        let entries = self.read()?;
        Ok(entries.slots.contains_key(key.as_str()))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let entries = self.read()?;
        Ok(entries.slots.len())
    }
}
