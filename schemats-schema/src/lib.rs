//! Schema definitions consumed by the schemats type generator.
//!
//! This crate provides the read-only view of a validation schema tree that
//! the translator walks. Nodes live in a [`SchemaArena`] and are addressed by
//! [`SchemaId`]; identity (not structure) is what cycle detection and
//! identifier lookups key on.
//!
//! # Architecture
//!
//! ```text
//! SchemaArena (nodes) ─┬─ Registry (id / description metadata)
//!                      └─ SchemaProbe (accepts undefined? accepts null?)
//! ```
//!
//! The arena also exposes fluent constructors mirroring the schema
//! system's own API, so trees can be built directly in Rust:
//!
//! ```
//! use schemats_schema::SchemaArena;
//!
//! let mut arena = SchemaArena::new();
//! let name = arena.string();
//! let age = arena.number();
//! let optional_age = arena.optional(age);
//! let user = arena.object([("name", name), ("age", optional_age)]);
//! arena.meta(user, "User");
//!
//! assert_eq!(arena.registry().identifier(&arena, user), Some("User"));
//! ```

mod arena;
mod kind;
mod probe;
mod registry;

pub use arena::{SchemaArena, SchemaId};
pub use kind::{EnumValue, LiteralValue, Schema, SchemaKind, TemplatePart};
pub use probe::{SchemaProbe, StructuralProbe};
pub use registry::{Metadata, Registry};
