//! Schema → type-node translation.
//!
//! [`Translator`] walks a schema tree depth-first and builds the equivalent
//! [`TypeNode`]. Nodes whose identifier is known are replaced by a type
//! reference instead of being inlined, which is also what breaks cycles
//! through named schemas.

use std::collections::HashSet;

use schemats_ast::{Keyword, NodeBuilder, TypeNode};
use schemats_schema::{
    Registry, SchemaArena, SchemaId, SchemaKind, SchemaProbe, StructuralProbe, TemplatePart,
};
use tracing::{debug, trace};

use crate::literal::{enum_member_type, literal_type};
use crate::options::{ConvertOptions, Override, OverrideInput, PipeStrategy, SeenModifiers};
use crate::template::{self, Interpolation};
use crate::{Error, Result};

/// The chain of nodes from the root to the node being converted.
#[derive(Debug, Default)]
struct Trail {
    /// Nodes currently being converted, by identity.
    path: Vec<SchemaId>,
    /// One breadcrumb per visited node, e.g. `friends (array)`.
    crumbs: Vec<String>,
}

impl Trail {
    fn readable(&self) -> String {
        self.crumbs.join(" → ")
    }
}

/// Converts schemas of one arena into type nodes.
pub struct Translator<'a> {
    arena: &'a SchemaArena,
    options: &'a ConvertOptions<'a>,
    registry: &'a Registry,
    probe: &'a dyn SchemaProbe,
    /// Resolved identifiers of the known schemas.
    known: HashSet<String>,
    /// The known schemas themselves, by identity.
    known_nodes: HashSet<SchemaId>,
    f: NodeBuilder,
}

impl<'a> Translator<'a> {
    pub fn new(arena: &'a SchemaArena, options: &'a ConvertOptions<'a>) -> Self {
        let registry = options.registry.unwrap_or_else(|| arena.registry());
        let probe = options.probe.unwrap_or(&StructuralProbe);
        let known = options
            .identifiers
            .iter()
            .filter_map(|id| registry.identifier(arena, *id))
            .map(str::to_string)
            .collect();

        Self {
            arena,
            options,
            registry,
            probe,
            known,
            known_nodes: options.identifiers.iter().copied().collect(),
            f: NodeBuilder,
        }
    }

    /// The identifier of `id`, inherited along its derived-from chain.
    pub fn identifier(&self, id: SchemaId) -> Option<&'a str> {
        self.registry.identifier(self.arena, id)
    }

    /// The description of `id`, inherited along its derived-from chain.
    pub fn description(&self, id: SchemaId) -> Option<&'a str> {
        self.registry.description(self.arena, id)
    }

    /// Convert `id` as the root of a declaration.
    ///
    /// The root is always converted structurally, even when its own
    /// identifier is known; nested occurrences of it become references.
    pub fn to_type_node(&self, id: SchemaId) -> Result<TypeNode> {
        let mut trail = Trail::default();
        trail.crumbs.push(self.breadcrumb("#root", id)?);
        self.convert(id, &mut trail, SeenModifiers::default())
    }

    /// Convert `id`, or reference it by name if its identifier is known.
    ///
    /// ```
    /// use schemats::{ConvertOptions, Translator, render};
    /// use schemats_schema::SchemaArena;
    ///
    /// let mut arena = SchemaArena::new();
    /// let name = arena.string();
    /// arena.meta(name, "Name");
    ///
    /// let options = ConvertOptions::new().identifiers([name]);
    /// let translator = Translator::new(&arena, &options);
    /// assert_eq!(render(&translator.to_type_or_reference(name).unwrap()), "Name");
    /// assert_eq!(render(&translator.to_type_node(name).unwrap()), "string");
    /// ```
    pub fn to_type_or_reference(&self, id: SchemaId) -> Result<TypeNode> {
        let mut trail = Trail::default();
        trail.crumbs.push(self.breadcrumb("#root", id)?);
        self.resolve_or_convert(id, &mut trail, SeenModifiers::default())
    }

    fn breadcrumb(&self, role: &str, id: SchemaId) -> Result<String> {
        let kind = self.kind(id)?;
        Ok(match self.identifier(id) {
            Some(name) => format!("{} ({}, {})", role, kind.name(), name),
            None => format!("{} ({})", role, kind.name()),
        })
    }

    fn kind(&self, id: SchemaId) -> Result<&'a SchemaKind> {
        self.arena
            .kind(id)
            .ok_or_else(|| Box::new(Error::UnknownSchema { id }))
    }

    /// Descend into `child`, recording `role` in the readable path.
    fn visit(
        &self,
        child: SchemaId,
        role: &str,
        trail: &mut Trail,
        seen: SeenModifiers,
    ) -> Result<TypeNode> {
        trail.crumbs.push(self.breadcrumb(role, child)?);
        let node = self.resolve_or_convert(child, trail, seen)?;
        trail.crumbs.pop();
        Ok(node)
    }

    fn resolve_or_convert(
        &self,
        id: SchemaId,
        trail: &mut Trail,
        seen: SeenModifiers,
    ) -> Result<TypeNode> {
        if !self.known.is_empty()
            && let Some(name) = self.identifier(id)
            && self.known.contains(name)
        {
            debug!(identifier = name, "referencing known schema");
            return Ok(self.f.reference(name));
        }
        self.convert(id, trail, seen)
    }

    fn convert(&self, id: SchemaId, trail: &mut Trail, seen: SeenModifiers) -> Result<TypeNode> {
        let schema = self
            .arena
            .get(id)
            .ok_or_else(|| Box::new(Error::UnknownSchema { id }))?;
        if trail.path.contains(&id) {
            return Err(Box::new(Error::CircularReference {
                path: trail.readable(),
            }));
        }

        trace!(kind = schema.kind.name(), depth = trail.path.len(), "converting schema");
        trail.path.push(id);

        if let Some(hook) = &self.options.override_with {
            let input = OverrideInput {
                arena: self.arena,
                id,
                schema,
                seen,
            };
            match hook(&input, &self.f) {
                Override::Skip => {}
                Override::Node(node) => {
                    trail.path.pop();
                    return Ok(node);
                }
                Override::Replace(replacement) => {
                    let node = self.visit(replacement, "#override", trail, seen)?;
                    trail.path.pop();
                    return Ok(node);
                }
            }
        }

        let node = self.convert_kind(&schema.kind, trail, seen)?;
        trail.path.pop();
        Ok(node)
    }

    fn convert_kind(
        &self,
        kind: &'a SchemaKind,
        trail: &mut Trail,
        seen: SeenModifiers,
    ) -> Result<TypeNode> {
        let f = &self.f;
        let fresh = SeenModifiers::default();

        let node = match kind {
            SchemaKind::String => f.keyword(Keyword::String),
            SchemaKind::Number | SchemaKind::Int | SchemaKind::Nan => f.keyword(Keyword::Number),
            SchemaKind::BigInt => f.keyword(Keyword::BigInt),
            SchemaKind::Symbol => f.keyword(Keyword::Symbol),
            SchemaKind::Boolean => f.keyword(Keyword::Boolean),
            SchemaKind::Date => f.reference("Date"),
            SchemaKind::Undefined => f.keyword(Keyword::Undefined),
            SchemaKind::Null => f.null_literal(),
            SchemaKind::Void => {
                f.union(vec![f.keyword(Keyword::Void), f.keyword(Keyword::Undefined)])
            }
            SchemaKind::Any => f.keyword(Keyword::Any),
            SchemaKind::Unknown => f.keyword(Keyword::Unknown),
            SchemaKind::Never => f.keyword(Keyword::Never),
            SchemaKind::File => f.reference("File"),

            SchemaKind::Literal(values) => match values.as_slice() {
                [] => f.keyword(Keyword::Never),
                [value] => literal_type(f, value),
                values => f.union(values.iter().map(|v| literal_type(f, v)).collect()),
            },
            SchemaKind::Enum(entries) => f.union(
                entries
                    .values()
                    .map(|value| enum_member_type(f, value))
                    .collect(),
            ),

            SchemaKind::Object(shape) => {
                let mut entries: Vec<_> = shape.iter().collect();
                if let Some(compare) = &self.options.sort_keys {
                    entries.sort_by(|(a, _), (b, _)| compare(a.as_str(), b.as_str()));
                }

                let mut members = Vec::with_capacity(entries.len());
                for (key, child) in entries {
                    let ty = self.visit(*child, key, trail, fresh)?;
                    let mut member = f.property_signature(key, ty);
                    if self.probe.accepts_undefined(self.arena, *child) {
                        member = member.optional();
                    }
                    if seen.readonly {
                        member = member.readonly();
                    }
                    if !self.known_nodes.contains(child)
                        && let Some(doc) = self.description(*child)
                    {
                        member = member.doc(doc);
                    }
                    members.push(member);
                }
                f.type_literal(members)
            }
            SchemaKind::Array(element) => {
                let element = self.visit(*element, "#element", trail, fresh)?;
                self.readonly_if(seen, f.array(element))
            }
            SchemaKind::Tuple(items) => {
                let mut elements = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    elements.push(self.visit(*item, &format!("#option-{}", index), trail, fresh)?);
                }
                self.readonly_if(seen, f.tuple(elements))
            }
            SchemaKind::Union { options, .. } => {
                let mut types = Vec::with_capacity(options.len());
                for (index, option) in options.iter().enumerate() {
                    types.push(self.visit(*option, &format!("#option-{}", index), trail, seen)?);
                }
                f.union(types)
            }
            SchemaKind::Intersection { left, right } => {
                let left = self.visit(*left, "#left", trail, fresh)?;
                let right = self.visit(*right, "#right", trail, fresh)?;
                f.intersection(vec![left, right])
            }
            SchemaKind::Record { key, value } => {
                let key = self.visit(*key, "#key", trail, fresh)?;
                let value = self.visit(*value, "#value", trail, fresh)?;
                let record = f.generic("Record", vec![key, value]);
                if seen.readonly {
                    f.generic("Readonly", vec![record])
                } else {
                    record
                }
            }
            SchemaKind::Map { key, value } => {
                let key = self.visit(*key, "#key", trail, fresh)?;
                let value = self.visit(*value, "#value", trail, fresh)?;
                let name = if seen.readonly { "ReadonlyMap" } else { "Map" };
                f.generic(name, vec![key, value])
            }
            SchemaKind::Set(value) => {
                let value = self.visit(*value, "#value", trail, fresh)?;
                let name = if seen.readonly { "ReadonlySet" } else { "Set" };
                f.generic(name, vec![value])
            }
            SchemaKind::Promise(inner) => {
                let inner = self.visit(*inner, "#innerType", trail, fresh)?;
                f.generic("Promise", vec![inner])
            }
            SchemaKind::TemplateLiteral(parts) => self.convert_template(parts, trail)?,

            SchemaKind::Lazy(target) => {
                let Some(target) = target else {
                    return Err(Box::new(Error::UnboundLazy {
                        path: trail.readable(),
                    }));
                };
                self.visit(*target, "#getter", trail, seen)?
            }
            SchemaKind::Pipe { input, output } => match self.options.pipe_strategy {
                PipeStrategy::Output => self.visit(*output, "#out", trail, seen)?,
                PipeStrategy::Input => self.visit(*input, "#in", trail, seen)?,
            },

            SchemaKind::Optional(inner) => {
                let inner_seen = SeenModifiers {
                    optional: !seen.non_optional,
                    ..seen
                };
                let inner = self.visit(*inner, "#innerType", trail, inner_seen)?;
                if seen.optional || seen.non_optional {
                    inner
                } else {
                    f.union(vec![inner, f.keyword(Keyword::Undefined)])
                }
            }
            SchemaKind::NonOptional(inner) => {
                let inner_seen = SeenModifiers {
                    non_optional: !seen.optional,
                    ..seen
                };
                self.visit(*inner, "#innerType", trail, inner_seen)?
            }
            SchemaKind::Nullable(inner) => {
                let inner_seen = SeenModifiers {
                    nullable: true,
                    ..seen
                };
                let inner = self.visit(*inner, "#innerType", trail, inner_seen)?;
                if seen.nullable {
                    inner
                } else {
                    f.union(vec![inner, f.null_literal()])
                }
            }
            SchemaKind::Readonly(inner) => {
                let inner_seen = SeenModifiers {
                    readonly: true,
                    ..seen
                };
                self.visit(*inner, "#innerType", trail, inner_seen)?
            }
            SchemaKind::Default(inner)
            | SchemaKind::Prefault(inner)
            | SchemaKind::Catch(inner)
            | SchemaKind::Success(inner) => self.visit(*inner, "#innerType", trail, seen)?,

            SchemaKind::Custom => {
                return Err(Box::new(Error::CustomSchema {
                    path: trail.readable(),
                }));
            }
            SchemaKind::Transform => {
                return Err(Box::new(Error::Transform {
                    path: trail.readable(),
                }));
            }
            SchemaKind::Unsupported(name) => {
                return Err(Box::new(Error::UnsupportedSchema {
                    kind: name.clone(),
                    path: trail.readable(),
                }));
            }
        };

        Ok(node)
    }

    fn readonly_if(&self, seen: SeenModifiers, node: TypeNode) -> TypeNode {
        if seen.readonly {
            self.f.readonly(node)
        } else {
            node
        }
    }

    fn convert_template(&self, parts: &'a [TemplatePart], trail: &mut Trail) -> Result<TypeNode> {
        let Some(normalized) = template::normalize(parts) else {
            return Ok(self.f.keyword(Keyword::Never));
        };

        let mut spans = Vec::with_capacity(normalized.spans.len());
        for span in normalized.spans {
            let ty = match span.value {
                Interpolation::Value(value) => literal_type(&self.f, value),
                Interpolation::Schema(id) => self.visit(
                    id,
                    &format!("#part-{}", span.index),
                    trail,
                    SeenModifiers::default(),
                )?,
            };
            spans.push(self.f.template_span(ty, span.text));
        }
        Ok(self.f.template_literal(normalized.head, spans))
    }
}
