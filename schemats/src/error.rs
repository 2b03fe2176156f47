use miette::Diagnostic;
use schemats_schema::SchemaId;
use thiserror::Error;

/// Result type for conversions (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Everything that can abort a conversion.
///
/// Every variant describes a mistake in the schema definitions or in the
/// conversion request; none of them is transient.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("circular reference detected in schema\n\nPath: {path}")]
    #[diagnostic(
        code(schemats::circular_reference),
        help(
            "assign an identifier to a schema in the cycle and list it among the known identifiers (or the batch schemas) so it is emitted as a type reference"
        )
    )]
    CircularReference { path: String },

    #[error("custom schemas cannot be automatically converted to TypeScript; use an override hook to provide the type for this schema\n\nPath: {path}")]
    #[diagnostic(code(schemats::custom_schema))]
    CustomSchema { path: String },

    #[error("transforms cannot be automatically converted to TypeScript, as their output type cannot be statically determined; use an override hook to provide the type for this schema\n\nPath: {path}")]
    #[diagnostic(code(schemats::transform))]
    Transform { path: String },

    #[error("unsupported schema kind '{kind}'\n\nPath: {path}")]
    #[diagnostic(
        code(schemats::unsupported_schema),
        help("use an override hook to provide the type for this schema")
    )]
    UnsupportedSchema { kind: String, path: String },

    #[error("lazy schema is not bound to a target\n\nPath: {path}")]
    #[diagnostic(code(schemats::unbound_lazy))]
    UnboundLazy { path: String },

    #[error("schema {id:?} does not exist in the arena")]
    #[diagnostic(code(schemats::unknown_schema))]
    UnknownSchema { id: SchemaId },

    #[error("{message}")]
    #[diagnostic(
        code(schemats::missing_identifier),
        help("register an identifier for the schema, e.g. `arena.meta(schema, \"MySchema\")`")
    )]
    MissingIdentifier { message: String },

    #[error("schema '{name}' cannot be both emitted and hidden")]
    #[diagnostic(
        code(schemats::conflicting_schema_role),
        help("remove it from either the emitted schemas or the hidden schemas")
    )]
    ConflictingSchemaRole { name: String },

    #[error("cannot export a schema without an identifier")]
    #[diagnostic(code(schemats::export_without_identifier))]
    ExportWithoutIdentifier,

    #[error("identifier '{identifier}' is used by more than one emitted schema")]
    #[diagnostic(
        code(schemats::duplicate_identifier),
        help("give each emitted schema a unique identifier")
    )]
    DuplicateIdentifier { identifier: String },
}

impl Error {
    pub(crate) fn multiple_without_identifier() -> Box<Self> {
        Box::new(Self::MissingIdentifier {
            message: "when multiple schemas are emitted, each of them must have an identifier"
                .to_string(),
        })
    }

    pub(crate) fn hidden_without_identifier() -> Box<Self> {
        Box::new(Self::MissingIdentifier {
            message: "hidden schemas are only referenced by name, so each of them must have an identifier"
                .to_string(),
        })
    }

    /// Whether the error comes from a schema the generator cannot express.
    ///
    /// These can be worked around with an override hook.
    ///
    /// ```
    /// use schemats::{ConvertOptions, Override};
    /// use schemats_schema::SchemaArena;
    ///
    /// let mut arena = SchemaArena::new();
    /// let check = arena.custom();
    ///
    /// let err = schemats::convert(&arena, check, &ConvertOptions::new()).unwrap_err();
    /// assert!(err.is_unsupported());
    ///
    /// let options =
    ///     ConvertOptions::new().override_with(|_, f| Override::Node(f.reference("Date")));
    /// assert!(schemats::convert(&arena, check, &options).is_ok());
    /// ```
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::CustomSchema { .. } | Self::Transform { .. } | Self::UnsupportedSchema { .. }
        )
    }
}
