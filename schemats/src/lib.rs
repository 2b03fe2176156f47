//! Convert validation schema trees into TypeScript type declarations.
//!
//! A schema built in a [`SchemaArena`](schemats_schema::SchemaArena) is
//! translated into a [`TypeNode`](schemats_ast::TypeNode) tree and wrapped
//! in a `type Name = ...;` alias when the schema has an identifier.
//!
//! ```
//! use schemats::{ConvertOptions, render};
//! use schemats_schema::SchemaArena;
//!
//! let mut arena = SchemaArena::new();
//! let name = arena.string();
//! let age = arena.number();
//! let age = arena.optional(age);
//! let user = arena.object([("name", name), ("age", age)]);
//! arena.meta(user, "User");
//!
//! let options = ConvertOptions::new().export();
//! let declaration = schemats::convert(&arena, user, &options).unwrap();
//! assert_eq!(
//!     render(&declaration),
//!     "export type User = {\n    name: string;\n    age?: number | undefined;\n};"
//! );
//! ```
//!
//! Several schemas that refer to each other are converted together with
//! [`convert_many`] or [`print_many`]; each one is emitted once and
//! referenced by name everywhere else.

mod batch;
mod declaration;
mod error;
mod literal;
mod options;
mod template;
mod translator;

pub use batch::{convert_many, print_many};
pub use error::{Error, Result};
pub use options::{
    BatchOptions, ConvertOptions, Override, OverrideInput, PipeStrategy, SeenModifiers,
};
pub use schemats_ast::{
    Declaration, NodeBuilder, PrintOptions, TypeNode, render, render_all, render_with,
};
pub use translator::Translator;

use schemats_schema::{SchemaArena, SchemaId};

/// Convert one schema into a declaration.
///
/// Nested schemas listed in [`ConvertOptions::identifiers`] are emitted as
/// type references; the root itself is always converted in full.
pub fn convert(
    arena: &SchemaArena,
    schema: SchemaId,
    options: &ConvertOptions<'_>,
) -> Result<Declaration> {
    let translator = Translator::new(arena, options);
    declaration::assemble(&translator, schema, options.export)
}
