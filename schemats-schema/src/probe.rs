//! Probes answering whether a schema accepts `undefined` or `null`.

use std::collections::HashSet;

use crate::{LiteralValue, SchemaArena, SchemaId, SchemaKind};

/// Asks the schema system whether `undefined` / `null` satisfy a schema.
///
/// The generator only uses these answers to decide property optionality;
/// it never validates data itself.
pub trait SchemaProbe {
    fn accepts_undefined(&self, arena: &SchemaArena, id: SchemaId) -> bool;

    fn accepts_null(&self, arena: &SchemaArena, id: SchemaId) -> bool;
}

/// Answers probes by inspecting the schema tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralProbe;

#[derive(Clone, Copy)]
enum Probe {
    Undefined,
    Null,
}

impl StructuralProbe {
    fn accepts(
        &self,
        arena: &SchemaArena,
        id: SchemaId,
        probe: Probe,
        visiting: &mut HashSet<SchemaId>,
    ) -> bool {
        // A lazy cycle that never reaches a terminal node accepts nothing.
        if !visiting.insert(id) {
            return false;
        }
        let Some(kind) = arena.kind(id) else {
            return false;
        };

        let accepted = match kind {
            SchemaKind::Any | SchemaKind::Unknown => true,
            SchemaKind::Undefined | SchemaKind::Void => matches!(probe, Probe::Undefined),
            SchemaKind::Null => matches!(probe, Probe::Null),
            SchemaKind::Literal(values) => values.iter().any(|value| match probe {
                Probe::Undefined => *value == LiteralValue::Undefined,
                Probe::Null => *value == LiteralValue::Null,
            }),
            SchemaKind::Optional(inner) => match probe {
                Probe::Undefined => true,
                Probe::Null => self.accepts(arena, *inner, probe, visiting),
            },
            SchemaKind::Nullable(inner) => match probe {
                Probe::Null => true,
                Probe::Undefined => self.accepts(arena, *inner, probe, visiting),
            },
            SchemaKind::NonOptional(inner) => match probe {
                Probe::Undefined => false,
                Probe::Null => self.accepts(arena, *inner, probe, visiting),
            },
            // Defaults fill in `undefined` before the inner schema runs.
            SchemaKind::Default(inner) | SchemaKind::Prefault(inner) => match probe {
                Probe::Undefined => true,
                Probe::Null => self.accepts(arena, *inner, probe, visiting),
            },
            SchemaKind::Catch(_) => true,
            SchemaKind::Readonly(inner) | SchemaKind::Success(inner) => {
                self.accepts(arena, *inner, probe, visiting)
            }
            SchemaKind::Lazy(target) => {
                target.is_some_and(|target| self.accepts(arena, target, probe, visiting))
            }
            SchemaKind::Pipe { input, .. } => self.accepts(arena, *input, probe, visiting),
            SchemaKind::Union { options, .. } => options
                .iter()
                .any(|option| self.accepts(arena, *option, probe, visiting)),
            SchemaKind::Intersection { left, right } => {
                self.accepts(arena, *left, probe, visiting)
                    && self.accepts(arena, *right, probe, visiting)
            }
            SchemaKind::Transform => true,
            SchemaKind::String
            | SchemaKind::Number
            | SchemaKind::Int
            | SchemaKind::Nan
            | SchemaKind::BigInt
            | SchemaKind::Symbol
            | SchemaKind::Boolean
            | SchemaKind::Date
            | SchemaKind::Never
            | SchemaKind::File
            | SchemaKind::Enum(_)
            | SchemaKind::Object(_)
            | SchemaKind::Array(_)
            | SchemaKind::Tuple(_)
            | SchemaKind::Record { .. }
            | SchemaKind::Map { .. }
            | SchemaKind::Set(_)
            | SchemaKind::Promise(_)
            | SchemaKind::TemplateLiteral(_)
            | SchemaKind::Custom
            | SchemaKind::Unsupported(_) => false,
        };

        visiting.remove(&id);
        accepted
    }
}

impl SchemaProbe for StructuralProbe {
    fn accepts_undefined(&self, arena: &SchemaArena, id: SchemaId) -> bool {
        self.accepts(arena, id, Probe::Undefined, &mut HashSet::new())
    }

    fn accepts_null(&self, arena: &SchemaArena, id: SchemaId) -> bool {
        self.accepts(arena, id, Probe::Null, &mut HashSet::new())
    }
}
