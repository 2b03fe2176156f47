//! Arena storage for schema trees.

use indexmap::IndexMap;

use crate::{EnumValue, LiteralValue, Metadata, Registry, Schema, SchemaKind, TemplatePart};

/// Stable handle to a node in a [`SchemaArena`].
///
/// Two handles are equal iff they address the same node; structurally equal
/// nodes created separately have different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaId(u32);

impl SchemaId {
    /// Build a handle from a raw index.
    pub const fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// The raw arena index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The handle for the node stored at `position`, if it fits in 32 bits.
    fn for_position(position: usize) -> Option<Self> {
        u32::try_from(position).ok().map(Self)
    }
}

/// Owns every schema node of one schema system instance, plus the default
/// metadata registry for those nodes.
#[derive(Debug, Clone)]
pub struct SchemaArena {
    nodes: Vec<Schema>,
    registry: Registry,
}

impl SchemaArena {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            registry: Registry::default(),
        }
    }

    /// Insert a node and return its handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds more nodes than a [`SchemaId`]
    /// can address.
    pub fn insert(&mut self, schema: Schema) -> SchemaId {
        let Some(id) = SchemaId::for_position(self.nodes.len()) else {
            panic!("schema arena is full ({} nodes)", self.nodes.len());
        };
        self.nodes.push(schema);
        id
    }

    /// Insert a fresh node of the given kind.
    pub fn add(&mut self, kind: SchemaKind) -> SchemaId {
        self.insert(Schema::new(kind))
    }

    pub fn get(&self, id: SchemaId) -> Option<&Schema> {
        self.nodes.get(id.index())
    }

    pub fn kind(&self, id: SchemaId) -> Option<&SchemaKind> {
        self.get(id).map(|schema| &schema.kind)
    }

    /// The node `id` was derived from.
    pub fn parent_of(&self, id: SchemaId) -> Option<SchemaId> {
        self.get(id).and_then(|schema| schema.parent)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over every node handle in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = SchemaId> + '_ {
        (0..self.nodes.len()).map(|index| SchemaId(index as u32))
    }

    /// The arena-wide metadata registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Clone `id` into a new node whose parent is `id`.
    ///
    /// Returns `None` if `id` does not exist.
    pub fn derive(&mut self, id: SchemaId) -> Option<SchemaId> {
        let kind = self.kind(id)?.clone();
        Some(self.insert(Schema {
            kind,
            parent: Some(id),
        }))
    }

    /// Register an identifier for `id` in the arena registry.
    pub fn meta(&mut self, id: SchemaId, identifier: impl Into<String>) -> SchemaId {
        self.registry.entry(id).id = Some(identifier.into());
        id
    }

    /// Register full metadata for `id` in the arena registry, replacing any
    /// previous entry.
    pub fn set_metadata(&mut self, id: SchemaId, metadata: Metadata) -> SchemaId {
        self.registry.insert(id, metadata);
        id
    }

    /// Derive a clone of `id` carrying `description`.
    ///
    /// The clone inherits the original's identifier through the parent
    /// chain. Returns `id` unchanged if it does not exist.
    pub fn describe(&mut self, id: SchemaId, description: impl Into<String>) -> SchemaId {
        let Some(derived) = self.derive(id) else {
            return id;
        };
        self.registry.entry(derived).description = Some(description.into());
        derived
    }

    /// Bind a lazy node to its target.
    ///
    /// Returns `false` if `lazy` is not an unbound lazy node.
    pub fn bind_lazy(&mut self, lazy: SchemaId, target: SchemaId) -> bool {
        match self.nodes.get_mut(lazy.index()) {
            Some(Schema {
                kind: SchemaKind::Lazy(slot @ None),
                ..
            }) => {
                *slot = Some(target);
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn string(&mut self) -> SchemaId {
        self.add(SchemaKind::String)
    }

    pub fn number(&mut self) -> SchemaId {
        self.add(SchemaKind::Number)
    }

    pub fn int(&mut self) -> SchemaId {
        self.add(SchemaKind::Int)
    }

    pub fn nan(&mut self) -> SchemaId {
        self.add(SchemaKind::Nan)
    }

    pub fn bigint(&mut self) -> SchemaId {
        self.add(SchemaKind::BigInt)
    }

    pub fn symbol(&mut self) -> SchemaId {
        self.add(SchemaKind::Symbol)
    }

    pub fn boolean(&mut self) -> SchemaId {
        self.add(SchemaKind::Boolean)
    }

    pub fn date(&mut self) -> SchemaId {
        self.add(SchemaKind::Date)
    }

    pub fn undefined(&mut self) -> SchemaId {
        self.add(SchemaKind::Undefined)
    }

    pub fn null(&mut self) -> SchemaId {
        self.add(SchemaKind::Null)
    }

    pub fn void(&mut self) -> SchemaId {
        self.add(SchemaKind::Void)
    }

    pub fn any(&mut self) -> SchemaId {
        self.add(SchemaKind::Any)
    }

    pub fn unknown(&mut self) -> SchemaId {
        self.add(SchemaKind::Unknown)
    }

    pub fn never(&mut self) -> SchemaId {
        self.add(SchemaKind::Never)
    }

    pub fn file(&mut self) -> SchemaId {
        self.add(SchemaKind::File)
    }

    pub fn literal<I, V>(&mut self, values: I) -> SchemaId
    where
        I: IntoIterator<Item = V>,
        V: Into<LiteralValue>,
    {
        self.add(SchemaKind::Literal(
            values.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn enumeration<I, K, V>(&mut self, entries: I) -> SchemaId
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<EnumValue>,
    {
        let entries: IndexMap<String, EnumValue> = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.add(SchemaKind::Enum(entries))
    }

    pub fn object<I, K>(&mut self, shape: I) -> SchemaId
    where
        I: IntoIterator<Item = (K, SchemaId)>,
        K: Into<String>,
    {
        let shape: IndexMap<String, SchemaId> = shape
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        self.add(SchemaKind::Object(shape))
    }

    pub fn array(&mut self, element: SchemaId) -> SchemaId {
        self.add(SchemaKind::Array(element))
    }

    pub fn tuple(&mut self, items: impl IntoIterator<Item = SchemaId>) -> SchemaId {
        self.add(SchemaKind::Tuple(items.into_iter().collect()))
    }

    pub fn union(&mut self, options: impl IntoIterator<Item = SchemaId>) -> SchemaId {
        self.add(SchemaKind::Union {
            options: options.into_iter().collect(),
            discriminator: None,
        })
    }

    pub fn discriminated_union(
        &mut self,
        discriminator: impl Into<String>,
        options: impl IntoIterator<Item = SchemaId>,
    ) -> SchemaId {
        self.add(SchemaKind::Union {
            options: options.into_iter().collect(),
            discriminator: Some(discriminator.into()),
        })
    }

    pub fn intersection(&mut self, left: SchemaId, right: SchemaId) -> SchemaId {
        self.add(SchemaKind::Intersection { left, right })
    }

    pub fn record(&mut self, key: SchemaId, value: SchemaId) -> SchemaId {
        self.add(SchemaKind::Record { key, value })
    }

    pub fn map(&mut self, key: SchemaId, value: SchemaId) -> SchemaId {
        self.add(SchemaKind::Map { key, value })
    }

    pub fn set(&mut self, value: SchemaId) -> SchemaId {
        self.add(SchemaKind::Set(value))
    }

    pub fn promise(&mut self, inner: SchemaId) -> SchemaId {
        self.add(SchemaKind::Promise(inner))
    }

    pub fn template_literal<I, P>(&mut self, parts: I) -> SchemaId
    where
        I: IntoIterator<Item = P>,
        P: Into<TemplatePart>,
    {
        self.add(SchemaKind::TemplateLiteral(
            parts.into_iter().map(Into::into).collect(),
        ))
    }

    /// Create an unbound lazy node; bind it with [`SchemaArena::bind_lazy`].
    pub fn lazy(&mut self) -> SchemaId {
        self.add(SchemaKind::Lazy(None))
    }

    /// Create a lazy node already bound to `target`.
    pub fn lazy_to(&mut self, target: SchemaId) -> SchemaId {
        self.add(SchemaKind::Lazy(Some(target)))
    }

    pub fn pipe(&mut self, input: SchemaId, output: SchemaId) -> SchemaId {
        self.add(SchemaKind::Pipe { input, output })
    }

    pub fn optional(&mut self, inner: SchemaId) -> SchemaId {
        self.add(SchemaKind::Optional(inner))
    }

    pub fn nonoptional(&mut self, inner: SchemaId) -> SchemaId {
        self.add(SchemaKind::NonOptional(inner))
    }

    pub fn nullable(&mut self, inner: SchemaId) -> SchemaId {
        self.add(SchemaKind::Nullable(inner))
    }

    pub fn readonly(&mut self, inner: SchemaId) -> SchemaId {
        self.add(SchemaKind::Readonly(inner))
    }

    /// Wrap `inner` in a `default` modifier.
    pub fn defaulted(&mut self, inner: SchemaId) -> SchemaId {
        self.add(SchemaKind::Default(inner))
    }

    pub fn prefault(&mut self, inner: SchemaId) -> SchemaId {
        self.add(SchemaKind::Prefault(inner))
    }

    pub fn catch(&mut self, inner: SchemaId) -> SchemaId {
        self.add(SchemaKind::Catch(inner))
    }

    pub fn success(&mut self, inner: SchemaId) -> SchemaId {
        self.add(SchemaKind::Success(inner))
    }

    pub fn custom(&mut self) -> SchemaId {
        self.add(SchemaKind::Custom)
    }

    pub fn transform(&mut self) -> SchemaId {
        self.add(SchemaKind::Transform)
    }

    pub fn unsupported(&mut self, name: impl Into<String>) -> SchemaId {
        self.add(SchemaKind::Unsupported(name.into()))
    }
}

impl Default for SchemaArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_identity_not_structure() {
        let mut arena = SchemaArena::new();
        let a = arena.string();
        let b = arena.string();
        assert_ne!(a, b);
        assert_eq!(arena.kind(a), arena.kind(b));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_object_preserves_key_order() {
        let mut arena = SchemaArena::new();
        let s = arena.string();
        let n = arena.number();
        let obj = arena.object([("b", s), ("a", n)]);
        let Some(SchemaKind::Object(shape)) = arena.kind(obj) else {
            panic!("Expected object kind");
        };
        let keys: Vec<&str> = shape.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn test_ids_beyond_u32_are_rejected() {
        assert_eq!(SchemaId::for_position(7), Some(SchemaId::from_raw(7)));
        assert_eq!(
            SchemaId::for_position(u32::MAX as usize),
            Some(SchemaId::from_raw(u32::MAX))
        );
        #[cfg(target_pointer_width = "64")]
        assert_eq!(SchemaId::for_position(u32::MAX as usize + 1), None);
    }

    #[test]
    fn test_derive_sets_parent() {
        let mut arena = SchemaArena::new();
        let s = arena.string();
        let derived = arena.derive(s).unwrap();
        assert_eq!(arena.parent_of(derived), Some(s));
        assert_eq!(arena.parent_of(s), None);
        assert_eq!(arena.kind(derived), Some(&SchemaKind::String));
    }

    #[test]
    fn test_describe_clones_with_description() {
        let mut arena = SchemaArena::new();
        let s = arena.string();
        arena.meta(s, "Name");
        let described = arena.describe(s, "Name property");
        assert_ne!(described, s);
        assert_eq!(
            arena.registry().description(&arena, described),
            Some("Name property")
        );
        assert_eq!(arena.registry().identifier(&arena, described), Some("Name"));
    }

    #[test]
    fn test_bind_lazy_once() {
        let mut arena = SchemaArena::new();
        let lazy = arena.lazy();
        let target = arena.string();
        assert!(arena.bind_lazy(lazy, target));
        assert!(!arena.bind_lazy(lazy, target));
        assert!(!arena.bind_lazy(target, lazy));
        assert_eq!(arena.kind(lazy), Some(&SchemaKind::Lazy(Some(target))));
    }

    #[test]
    fn test_missing_node() {
        let mut arena = SchemaArena::new();
        let ghost = SchemaId::from_raw(42);
        assert!(arena.get(ghost).is_none());
        assert!(arena.derive(ghost).is_none());
        assert_eq!(arena.describe(ghost, "nothing"), ghost);
    }
}
