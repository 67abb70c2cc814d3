//! Trigger graph and reference resolution.
//!
//! The graph maps each entity name to the set of entity names it triggers
//! when a ball strikes it. Every registered entity has an entry from the
//! moment it is registered, so an edge endpoint always has one.

use im::{OrdMap, OrdSet};
use pingboard_foundation::Result;

use crate::registry::NameRegistry;

/// Adjacency relation from a trigger to the entities it activates.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerGraph {
    edges: OrdMap<String, OrdSet<String>>,
}

impl TriggerGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry with no targets for a newly registered entity.
    pub(crate) fn add_node(&mut self, name: &str) {
        self.edges.entry(name.to_string()).or_insert_with(OrdSet::new);
    }

    /// Resolves a `fire` declaration on `line` and adds the edge
    /// `trigger → action`.
    ///
    /// The trigger is looked up before the action. Adding an edge that
    /// already exists is a no-op. Returns whether the edge was new.
    ///
    /// # Errors
    ///
    /// Returns an unresolved reference error naming the first of the two
    /// names that is not registered.
    pub(crate) fn connect(
        &mut self,
        registry: &NameRegistry,
        trigger: &str,
        action: &str,
        line: u32,
    ) -> Result<bool> {
        let trigger = registry.resolve(trigger, line)?.name().to_string();
        let action = registry.resolve(action, line)?.name().to_string();

        let targets = self.edges.entry(trigger).or_insert_with(OrdSet::new);
        Ok(targets.insert(action).is_none())
    }

    /// Returns the entities `name` triggers, or `None` if `name` has no entry.
    #[must_use]
    pub fn targets(&self, name: &str) -> Option<&OrdSet<String>> {
        self.edges.get(name)
    }

    /// Returns true if the edge `trigger → action` exists.
    #[must_use]
    pub fn has_edge(&self, trigger: &str, action: &str) -> bool {
        self.edges
            .get(trigger)
            .is_some_and(|targets| targets.contains(action))
    }

    /// Returns the number of entries (one per registered entity).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(OrdSet::len).sum()
    }

    /// Iterates over `(trigger, action)` pairs in name order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().flat_map(|(trigger, targets)| {
            targets
                .iter()
                .map(move |action| (trigger.as_str(), action.as_str()))
        })
    }

    /// Returns the entities that trigger `name`.
    #[must_use]
    pub fn triggers_of(&self, name: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|(_, targets)| targets.contains(name))
            .map(|(trigger, _)| trigger.as_str())
            .collect()
    }

    /// Returns true if every key and every target is a registered name, and
    /// every registered name has an entry.
    #[must_use]
    pub fn is_closed_over(&self, registry: &NameRegistry) -> bool {
        self.edges.len() == registry.len()
            && self.edges.iter().all(|(trigger, targets)| {
                registry.contains(trigger) && targets.iter().all(|t| registry.contains(t))
            })
    }
}
