//! Conversion options and the override hook.

use std::cmp::Ordering;
use std::fmt;

use schemats_ast::{NodeBuilder, PrintOptions, TypeNode};
use schemats_schema::{Registry, Schema, SchemaArena, SchemaId, SchemaProbe};

/// Modifiers already applied along the current chain of wrapper schemas.
///
/// They make `optional(optional(T))` collapse to a single `T | undefined`
/// and let `nonoptional` cancel an `optional` around or inside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeenModifiers {
    pub non_optional: bool,
    pub nullable: bool,
    pub optional: bool,
    pub readonly: bool,
}

/// What an override hook decided for one schema node.
#[derive(Debug, Clone, PartialEq)]
pub enum Override {
    /// Use the default conversion.
    Skip,
    /// Use this type verbatim.
    Node(TypeNode),
    /// Convert this schema instead.
    Replace(SchemaId),
}

/// The node an override hook is asked about.
#[derive(Debug, Clone, Copy)]
pub struct OverrideInput<'a> {
    pub arena: &'a SchemaArena,
    pub id: SchemaId,
    pub schema: &'a Schema,
    pub seen: SeenModifiers,
}

/// Which side of a pipe determines the emitted type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PipeStrategy {
    /// The type a value has after the pipe ran.
    #[default]
    Output,
    /// The type a value must have before entering the pipe.
    Input,
}

pub(crate) type OverrideFn<'a> = dyn Fn(&OverrideInput<'_>, &NodeBuilder) -> Override + 'a;
pub(crate) type Comparator<'a> = dyn Fn(&str, &str) -> Ordering + 'a;

/// Options for converting a single schema.
///
/// # Example
///
/// ```
/// use schemats::ConvertOptions;
///
/// let options = ConvertOptions::new()
///     .sort_keys(|a, b| a.cmp(b))
///     .export();
/// ```
#[derive(Default)]
pub struct ConvertOptions<'a> {
    pub(crate) identifiers: Vec<SchemaId>,
    pub(crate) override_with: Option<Box<OverrideFn<'a>>>,
    pub(crate) registry: Option<&'a Registry>,
    pub(crate) probe: Option<&'a dyn SchemaProbe>,
    pub(crate) sort_keys: Option<Box<Comparator<'a>>>,
    pub(crate) export: bool,
    pub(crate) pipe_strategy: PipeStrategy,
}

impl<'a> ConvertOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schemas emitted elsewhere: any node resolving to one of their
    /// identifiers is replaced by a type reference. Never applies to the
    /// root schema being converted.
    pub fn identifiers(mut self, identifiers: impl IntoIterator<Item = SchemaId>) -> Self {
        self.identifiers = identifiers.into_iter().collect();
        self
    }

    /// Hook consulted before every node is converted.
    pub fn override_with(
        mut self,
        hook: impl Fn(&OverrideInput<'_>, &NodeBuilder) -> Override + 'a,
    ) -> Self {
        self.override_with = Some(Box::new(hook));
        self
    }

    /// Use `registry` instead of the arena's own registry.
    pub fn registry(mut self, registry: &'a Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Use `probe` instead of [`StructuralProbe`](schemats_schema::StructuralProbe).
    pub fn probe(mut self, probe: &'a dyn SchemaProbe) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Order object properties with `compare` instead of declaration order.
    pub fn sort_keys(mut self, compare: impl Fn(&str, &str) -> Ordering + 'a) -> Self {
        self.sort_keys = Some(Box::new(compare));
        self
    }

    /// Emit the declaration with an `export` modifier.
    pub fn export(mut self) -> Self {
        self.export = true;
        self
    }

    pub fn pipe_strategy(mut self, strategy: PipeStrategy) -> Self {
        self.pipe_strategy = strategy;
        self
    }
}

impl fmt::Debug for ConvertOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertOptions")
            .field("identifiers", &self.identifiers)
            .field("override_with", &self.override_with.is_some())
            .field("registry", &self.registry.is_some())
            .field("probe", &self.probe.is_some())
            .field("sort_keys", &self.sort_keys.is_some())
            .field("export", &self.export)
            .field("pipe_strategy", &self.pipe_strategy)
            .finish()
    }
}

/// Options for converting a batch of schemas.
///
/// # Example
///
/// ```
/// use schemats::BatchOptions;
/// use schemats_schema::SchemaArena;
///
/// let mut arena = SchemaArena::new();
/// let name = arena.string();
/// arena.meta(name, "Name");
///
/// let options = BatchOptions::new()
///     .exported([name])
///     .sort_declarations(|a, b| a.cmp(b));
/// let output = schemats::print_many(&arena, options).unwrap();
/// assert_eq!(output, "export type Name = string;");
/// ```
#[derive(Default)]
pub struct BatchOptions<'a> {
    pub(crate) schemas: Vec<SchemaId>,
    pub(crate) exported_schemas: Vec<SchemaId>,
    pub(crate) hidden_schemas: Vec<SchemaId>,
    pub(crate) sort_declarations: Option<Box<Comparator<'a>>>,
    pub(crate) convert: ConvertOptions<'a>,
    pub(crate) print: PrintOptions,
}

impl<'a> BatchOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schemas to emit.
    pub fn schemas(mut self, schemas: impl IntoIterator<Item = SchemaId>) -> Self {
        self.schemas.extend(schemas);
        self
    }

    /// Schemas to emit with an `export` modifier.
    pub fn exported(mut self, schemas: impl IntoIterator<Item = SchemaId>) -> Self {
        self.exported_schemas.extend(schemas);
        self
    }

    /// Schemas that are referenced by name but never emitted.
    pub fn hidden(mut self, schemas: impl IntoIterator<Item = SchemaId>) -> Self {
        self.hidden_schemas.extend(schemas);
        self
    }

    /// Order declarations by identifier with `compare`.
    pub fn sort_declarations(mut self, compare: impl Fn(&str, &str) -> Ordering + 'a) -> Self {
        self.sort_declarations = Some(Box::new(compare));
        self
    }

    /// Order object properties with `compare`.
    pub fn sort_keys(mut self, compare: impl Fn(&str, &str) -> Ordering + 'a) -> Self {
        self.convert = self.convert.sort_keys(compare);
        self
    }

    pub fn override_with(
        mut self,
        hook: impl Fn(&OverrideInput<'_>, &NodeBuilder) -> Override + 'a,
    ) -> Self {
        self.convert = self.convert.override_with(hook);
        self
    }

    pub fn registry(mut self, registry: &'a Registry) -> Self {
        self.convert = self.convert.registry(registry);
        self
    }

    pub fn probe(mut self, probe: &'a dyn SchemaProbe) -> Self {
        self.convert = self.convert.probe(probe);
        self
    }

    pub fn pipe_strategy(mut self, strategy: PipeStrategy) -> Self {
        self.convert = self.convert.pipe_strategy(strategy);
        self
    }

    /// Printer configuration used by [`print_many`](crate::print_many).
    pub fn print_options(mut self, options: PrintOptions) -> Self {
        self.print = options;
        self
    }
}

impl fmt::Debug for BatchOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchOptions")
            .field("schemas", &self.schemas)
            .field("exported_schemas", &self.exported_schemas)
            .field("hidden_schemas", &self.hidden_schemas)
            .field("sort_declarations", &self.sort_declarations.is_some())
            .field("convert", &self.convert)
            .field("print", &self.print)
            .finish()
    }
}
