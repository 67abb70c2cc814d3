//! Name registry: entity name → entity, with unique names.

use im::OrdMap;
use pingboard_foundation::{Error, Result};

use crate::entity::Entity;

/// Maps names to the entities declared under them.
///
/// Holds gadgets only; balls are never registered.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameRegistry {
    entities: OrdMap<String, Entity>,
}

impl NameRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity under its name.
    ///
    /// # Errors
    ///
    /// Returns a duplicate name error if the name is already registered. The
    /// registry is left unchanged.
    pub(crate) fn register(&mut self, entity: Entity) -> Result<()> {
        if let Some(existing) = self.entities.get(entity.name()) {
            return Err(Error::duplicate_name(
                entity.name(),
                entity.line(),
                existing.line(),
            ));
        }
        self.entities.insert(entity.name().to_string(), entity);
        Ok(())
    }

    /// Looks up an entity by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    /// Looks up an entity named by a reference on `line`.
    ///
    /// # Errors
    ///
    /// Returns an unresolved reference error if no entity has that name.
    pub fn resolve(&self, name: &str, line: u32) -> Result<&Entity> {
        self.get(name)
            .ok_or_else(|| Error::unresolved_reference(name, line))
    }

    /// Returns true if every key is its entity's name and every footprint
    /// covers at least one cell.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.entities.iter().all(|(name, entity)| {
            let (width, height) = entity.kind().size();
            name == entity.name() && width >= 1 && height >= 1
        })
    }

    /// Returns true if an entity has this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if no entities are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates over entities in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }
}
