//! Parse-time configuration for the JMdict format.

use crate::dict::entities::EntityMap;

/// Options accepted by [`JMdict`](crate::JMdict) parsing.
///
/// ```
/// use jmdict_reader::{EntityMap, ParseOptions};
///
/// let options = ParseOptions::new()
///     .resolve_entities(true)
///     .entity_map(EntityMap::from_iter([("n", "noun")]));
/// assert!(options.resolves_entities());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    resolve_entities: bool,
    entity_map: EntityMap,
}

impl ParseOptions {
    /// Entity resolution off, built-in entity table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expands entity codes (`&n;`) in element text when enabled.
    pub fn resolve_entities(mut self, enabled: bool) -> Self {
        self.resolve_entities = enabled;
        self
    }

    /// Replaces the table used for entity expansion.
    pub fn entity_map(mut self, map: EntityMap) -> Self {
        self.entity_map = map;
        self
    }

    pub fn resolves_entities(&self) -> bool {
        self.resolve_entities
    }

    pub fn entities(&self) -> &EntityMap {
        &self.entity_map
    }
}
