//! Converting several schemas that reference each other by name.

use std::collections::HashMap;

use indexmap::IndexSet;
use schemats_ast::{Declaration, render_all};
use schemats_schema::{SchemaArena, SchemaId};
use tracing::debug;

use crate::declaration::assemble;
use crate::{BatchOptions, Error, Result, Translator};

/// Convert every emitted schema into a declaration.
///
/// Emitted schemas are `schemas` plus the exported ones. Every emitted or
/// hidden schema is known to the others, so nested occurrences become type
/// references instead of being inlined.
pub fn convert_many(arena: &SchemaArena, options: BatchOptions<'_>) -> Result<Vec<Declaration>> {
    let BatchOptions {
        schemas,
        exported_schemas,
        hidden_schemas,
        sort_declarations,
        mut convert,
        ..
    } = options;

    let registry = convert.registry.unwrap_or_else(|| arena.registry());
    let identifier = move |id: SchemaId| registry.identifier(arena, id);

    let outputable: IndexSet<SchemaId> = schemas
        .iter()
        .chain(exported_schemas.iter())
        .copied()
        .collect();
    let exported: IndexSet<SchemaId> = exported_schemas.into_iter().collect();

    for hidden in &hidden_schemas {
        if outputable.contains(hidden) {
            let name = identifier(*hidden)
                .map_or_else(|| format!("{:?}", hidden), str::to_string);
            return Err(Box::new(Error::ConflictingSchemaRole { name }));
        }
        if identifier(*hidden).is_none() {
            return Err(Error::hidden_without_identifier());
        }
    }

    if outputable.len() > 1 {
        let mut owners: HashMap<&str, SchemaId> = HashMap::new();
        for id in &outputable {
            let Some(name) = identifier(*id) else {
                return Err(Error::multiple_without_identifier());
            };
            if owners.insert(name, *id).is_some() {
                return Err(Box::new(Error::DuplicateIdentifier {
                    identifier: name.to_string(),
                }));
            }
        }
    }

    let mut order: Vec<SchemaId> = outputable.iter().copied().collect();
    if let Some(compare) = &sort_declarations {
        order.sort_by(|a, b| {
            compare(
                identifier(*a).unwrap_or_default(),
                identifier(*b).unwrap_or_default(),
            )
        });
    }

    convert.identifiers = outputable
        .iter()
        .chain(hidden_schemas.iter())
        .copied()
        .collect();
    debug!(
        emitted = order.len(),
        hidden = hidden_schemas.len(),
        "converting schemas"
    );

    let translator = Translator::new(arena, &convert);
    order
        .into_iter()
        .map(|id| assemble(&translator, id, exported.contains(&id)))
        .collect()
}

/// Convert and render every emitted schema, separated by blank lines.
pub fn print_many(arena: &SchemaArena, options: BatchOptions<'_>) -> Result<String> {
    let print = options.print;
    let declarations = convert_many(arena, options)?;
    Ok(render_all(&declarations, &print))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_anonymous_schema_is_allowed() {
        let mut arena = SchemaArena::new();
        let s = arena.string();
        let output = print_many(&arena, BatchOptions::new().schemas([s])).unwrap();
        assert_eq!(output, "string");
    }

    #[test]
    fn test_duplicates_are_emitted_once() {
        let mut arena = SchemaArena::new();
        let s = arena.string();
        arena.meta(s, "Name");
        let declarations =
            convert_many(&arena, BatchOptions::new().schemas([s, s]).exported([s])).unwrap();
        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].name(), Some("Name"));
    }

    #[test]
    fn test_duplicate_identifier() {
        let mut arena = SchemaArena::new();
        let a = arena.string();
        let b = arena.number();
        arena.meta(a, "Value");
        arena.meta(b, "Value");
        let err = convert_many(&arena, BatchOptions::new().schemas([a, b])).unwrap_err();
        assert!(matches!(
            *err,
            Error::DuplicateIdentifier { ref identifier } if identifier == "Value"
        ));
    }

    #[test]
    fn test_conflicting_role() {
        let mut arena = SchemaArena::new();
        let s = arena.string();
        arena.meta(s, "Name");
        let options = BatchOptions::new().schemas([s]).hidden([s]);
        let err = convert_many(&arena, options).unwrap_err();
        assert!(matches!(*err, Error::ConflictingSchemaRole { ref name } if name == "Name"));
    }
}
