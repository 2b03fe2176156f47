//! Wrapping a converted root into a declaration.

use schemats_ast::{Declaration, TypeAlias};
use schemats_schema::SchemaId;
use tracing::debug;

use crate::{Error, Result, Translator};

/// Convert `id` and name it after its identifier.
///
/// A schema without an identifier yields the bare type, unless `export`
/// is requested, which needs a name.
pub(crate) fn assemble(
    translator: &Translator<'_>,
    id: SchemaId,
    export: bool,
) -> Result<Declaration> {
    let ty = translator.to_type_node(id)?;

    let Some(name) = translator.identifier(id) else {
        if export {
            return Err(Box::new(Error::ExportWithoutIdentifier));
        }
        return Ok(Declaration::Type(ty));
    };

    debug!(name, export, "assembled type alias");
    let mut alias = TypeAlias::new(name, ty);
    if let Some(description) = translator.description(id) {
        alias = alias.doc(description);
    }
    if export {
        alias = alias.exported();
    }
    Ok(alias.into())
}

#[cfg(test)]
mod tests {
    use schemats_ast::{Keyword, TypeNode, render};
    use schemats_schema::SchemaArena;

    use super::*;
    use crate::ConvertOptions;

    #[test]
    fn test_anonymous_schema_is_bare_type() {
        let mut arena = SchemaArena::new();
        let s = arena.string();
        let options = ConvertOptions::new();
        let translator = Translator::new(&arena, &options);
        let declaration = assemble(&translator, s, false).unwrap();
        assert_eq!(declaration, Declaration::Type(TypeNode::Keyword(Keyword::String)));
    }

    #[test]
    fn test_alias_with_description() {
        let mut arena = SchemaArena::new();
        let s = arena.string();
        let described = arena.describe(s, "A person's name");
        arena.meta(described, "Name");
        let options = ConvertOptions::new();
        let translator = Translator::new(&arena, &options);
        let declaration = assemble(&translator, described, true).unwrap();
        assert_eq!(
            render(&declaration),
            "/** A person's name */\nexport type Name = string;"
        );
    }

    #[test]
    fn test_export_needs_identifier() {
        let mut arena = SchemaArena::new();
        let s = arena.string();
        let options = ConvertOptions::new();
        let translator = Translator::new(&arena, &options);
        let err = assemble(&translator, s, true).unwrap_err();
        assert!(matches!(*err, Error::ExportWithoutIdentifier));
    }
}
