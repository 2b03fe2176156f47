//! Identifier and description metadata attached to schema nodes.

use std::collections::HashMap;

use crate::{SchemaArena, SchemaId};

/// Metadata registered for one schema node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Type name used when the schema is emitted or referenced.
    pub id: Option<String>,
    /// Documentation attached to the emitted declaration or property.
    pub description: Option<String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Maps schema nodes to their [`Metadata`].
///
/// Lookups fall back to the node's derived-from chain in the arena, so a
/// clone produced by `describe` keeps the identifier of its original.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<SchemaId, Metadata>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: SchemaId, metadata: Metadata) {
        self.entries.insert(id, metadata);
    }

    /// Get the metadata entry for `id`, creating an empty one if needed.
    pub fn entry(&mut self, id: SchemaId) -> &mut Metadata {
        self.entries.entry(id).or_default()
    }

    /// Metadata registered directly on `id`, without inheritance.
    pub fn get(&self, id: SchemaId) -> Option<&Metadata> {
        self.entries.get(&id)
    }

    pub fn remove(&mut self, id: SchemaId) -> Option<Metadata> {
        self.entries.remove(&id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the identifier of `id`, walking the derived-from chain.
    pub fn identifier(&self, arena: &SchemaArena, id: SchemaId) -> Option<&str> {
        self.lookup(arena, id, |metadata| metadata.id.as_deref())
    }

    /// Resolve the description of `id`, walking the derived-from chain.
    pub fn description(&self, arena: &SchemaArena, id: SchemaId) -> Option<&str> {
        self.lookup(arena, id, |metadata| metadata.description.as_deref())
    }

    fn lookup<'a>(
        &'a self,
        arena: &SchemaArena,
        id: SchemaId,
        field: impl Fn(&'a Metadata) -> Option<&'a str>,
    ) -> Option<&'a str> {
        let mut current = Some(id);
        while let Some(node) = current {
            if let Some(value) = self.entries.get(&node).and_then(&field) {
                return Some(value);
            }
            current = arena.parent_of(node);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_identifier() {
        let mut arena = SchemaArena::new();
        let s = arena.string();
        arena.meta(s, "Name");
        assert_eq!(arena.registry().identifier(&arena, s), Some("Name"));
        assert_eq!(arena.registry().description(&arena, s), None);
    }

    #[test]
    fn test_identifier_inherited_through_chain() {
        let mut arena = SchemaArena::new();
        let s = arena.string();
        arena.meta(s, "Name");
        let first = arena.derive(s).unwrap();
        let second = arena.derive(first).unwrap();
        assert_eq!(arena.registry().identifier(&arena, second), Some("Name"));
    }

    #[test]
    fn test_own_value_shadows_parent() {
        let mut arena = SchemaArena::new();
        let s = arena.string();
        arena.set_metadata(s, Metadata::new().id("Base").description("base"));
        let derived = arena.describe(s, "derived");
        let registry = arena.registry();
        assert_eq!(registry.description(&arena, derived), Some("derived"));
        assert_eq!(registry.description(&arena, s), Some("base"));
        assert_eq!(registry.identifier(&arena, derived), Some("Base"));
    }

    #[test]
    fn test_alternate_registry() {
        let mut arena = SchemaArena::new();
        let s = arena.string();
        arena.meta(s, "Global");

        let mut registry = Registry::new();
        registry.insert(s, Metadata::new().id("Local"));
        assert_eq!(registry.identifier(&arena, s), Some("Local"));

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.identifier(&arena, s), None);
    }
}
