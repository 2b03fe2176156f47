//! Snapshot tests for declarations, references between schemas and batch
//! conversion.

use schemats::{BatchOptions, ConvertOptions, Declaration, Error, convert, print_many, render};
use schemats_schema::{Metadata, Registry, SchemaArena};

#[test]
fn test_self_reference_through_lazy() {
    let mut arena = SchemaArena::new();
    let lazy = arena.lazy();
    let user = arena.object([("mother", lazy)]);
    arena.meta(user, "User");
    arena.bind_lazy(lazy, user);

    let output = print_many(&arena, BatchOptions::new().schemas([user])).unwrap();
    insta::assert_snapshot!(output, @r"
    type User = {
        mother: User;
    };
    ");
}

#[test]
fn test_references_between_schemas() {
    let mut arena = SchemaArena::new();
    let name = arena.string();
    arena.meta(name, "Name");
    let id = arena.string();
    let age = arena.number();
    let root = arena.object([("id", id), ("name", name), ("age", age)]);
    arena.meta(root, "Root0");

    let output = print_many(&arena, BatchOptions::new().schemas([root, name])).unwrap();
    insta::assert_snapshot!(output, @r"
    type Root0 = {
        id: string;
        name: Name;
        age: number;
    };

    type Name = string;
    ");
}

#[test]
fn test_comments_on_referenced_types() {
    let mut arena = SchemaArena::new();
    let name = arena.string();
    let name = arena.describe(name, "Name type");
    arena.meta(name, "CommentedName");

    let id = arena.string();
    let age = arena.number();
    let root = arena.object([("id", id), ("name", name), ("age", age)]);
    arena.meta(root, "Root");

    let output = print_many(&arena, BatchOptions::new().schemas([root, name])).unwrap();
    insta::assert_snapshot!(output, @r"
    type Root = {
        id: string;
        name: CommentedName;
        age: number;
    };

    /** Name type */
    type CommentedName = string;
    ");
}

#[test]
fn test_described_clone_is_still_a_reference() {
    let mut arena = SchemaArena::new();
    let name = arena.string();
    let name = arena.describe(name, "Name type");
    arena.meta(name, "CommentedName");
    let property = arena.describe(name, "Name property");

    let id = arena.string();
    let age = arena.number();
    let root = arena.object([("id", id), ("name", property), ("age", age)]);
    arena.meta(root, "Root2");

    let output = print_many(&arena, BatchOptions::new().schemas([root, name])).unwrap();
    insta::assert_snapshot!(output, @r"
    type Root2 = {
        id: string;
        /** Name property */
        name: CommentedName;
        age: number;
    };

    /** Name type */
    type CommentedName = string;
    ");
}

#[test]
fn test_enum_reference_with_property_comment() {
    let mut arena = SchemaArena::new();
    let values = arena.enumeration([("ONE", 1), ("TWO", 2)]);
    arena.meta(values, "Enum");
    let key = arena.describe(values, "Comment for key");
    let test = arena.object([("key", key)]);
    arena.meta(test, "Test");

    let output = print_many(&arena, BatchOptions::new().schemas([test, values])).unwrap();
    insta::assert_snapshot!(output, @r"
    type Test = {
        /** Comment for key */
        key: Enum;
    };

    type Enum = 1 | 2;
    ");
}

#[test]
fn test_comments_only_on_declarations() {
    let mut arena = SchemaArena::new();
    let s = arena.string();
    let described = arena.describe(s, "A string");
    let output = print_many(&arena, BatchOptions::new().schemas([described])).unwrap();
    assert_eq!(output, "string");

    arena.meta(described, "MyString");
    let output = print_many(&arena, BatchOptions::new().schemas([described])).unwrap();
    insta::assert_snapshot!(output, @r"
    /** A string */
    type MyString = string;
    ");
}

#[test]
fn test_multiline_comment() {
    let mut arena = SchemaArena::new();
    let s = arena.string();
    let described = arena.describe(s, "A string\nwith multiple lines");
    arena.meta(described, "MyString");

    let output = print_many(&arena, BatchOptions::new().schemas([described])).unwrap();
    assert_eq!(
        output,
        "/**\n * A string\n * with multiple lines\n */\ntype MyString = string;"
    );
}

#[test]
fn test_export() {
    let mut arena = SchemaArena::new();
    let s = arena.string();
    arena.meta(s, "MyString");
    let output = print_many(&arena, BatchOptions::new().exported([s])).unwrap();
    assert_eq!(output, "export type MyString = string;");

    let anonymous = arena.string();
    let err = print_many(&arena, BatchOptions::new().exported([anonymous])).unwrap_err();
    assert!(matches!(*err, Error::ExportWithoutIdentifier));
    assert_eq!(
        err.to_string(),
        "cannot export a schema without an identifier"
    );
}

#[test]
fn test_only_exported_schemas_get_export() {
    let mut arena = SchemaArena::new();
    let a = arena.string();
    arena.meta(a, "A");
    let b = arena.number();
    arena.meta(b, "B");

    let output = print_many(&arena, BatchOptions::new().schemas([a]).exported([b])).unwrap();
    insta::assert_snapshot!(output, @r"
    type A = string;

    export type B = number;
    ");
}

#[test]
fn test_hidden_schemas_are_referenced_but_not_emitted() {
    let mut arena = SchemaArena::new();
    let a = arena.string();
    arena.meta(a, "TypeA");
    let b = arena.object([("a", a)]);

    let output = print_many(&arena, BatchOptions::new().schemas([b]).hidden([a])).unwrap();
    insta::assert_snapshot!(output, @r"
    {
        a: TypeA;
    }
    ");
}

#[test]
fn test_hidden_schema_needs_identifier() {
    let mut arena = SchemaArena::new();
    let a = arena.string();
    let b = arena.object([("a", a)]);

    let err = print_many(&arena, BatchOptions::new().schemas([b]).hidden([a])).unwrap_err();
    assert!(matches!(*err, Error::MissingIdentifier { .. }));
}

#[test]
fn test_multiple_schemas_need_identifiers() {
    let mut arena = SchemaArena::new();
    let a = arena.string();
    arena.meta(a, "A");
    let b = arena.number();

    let err = print_many(&arena, BatchOptions::new().schemas([a, b])).unwrap_err();
    assert!(matches!(*err, Error::MissingIdentifier { .. }));
    assert_eq!(
        err.to_string(),
        "when multiple schemas are emitted, each of them must have an identifier"
    );
}

#[test]
fn test_sort_declarations() {
    let mut arena = SchemaArena::new();
    let a = arena.string();
    arena.meta(a, "TypeA");
    let b = arena.string();
    arena.meta(b, "TypeB");
    let c = arena.string();
    arena.meta(c, "TypeC");

    let options = BatchOptions::new()
        .schemas([c, a, b])
        .sort_declarations(|a, b| a.cmp(b));
    insta::assert_snapshot!(print_many(&arena, options).unwrap(), @r"
    type TypeA = string;

    type TypeB = string;

    type TypeC = string;
    ");
}

#[test]
fn test_identifiers_match_by_name_not_identity() {
    let mut arena = SchemaArena::new();
    let first = arena.string();
    arena.meta(first, "Shared");
    let second = arena.string();
    arena.meta(second, "Shared");
    let holder = arena.object([("value", second)]);

    let options = ConvertOptions::new().identifiers([first]);
    let declaration = convert(&arena, holder, &options).unwrap();
    insta::assert_snapshot!(render(&declaration), @r"
    {
        value: Shared;
    }
    ");
}

#[test]
fn test_alternate_registry() {
    let mut arena = SchemaArena::new();
    let s = arena.string();
    arena.meta(s, "FromArena");

    let mut registry = Registry::new();
    registry.insert(s, Metadata::new().id("FromRegistry").description("Own registry"));

    let options = ConvertOptions::new().registry(&registry).export();
    let declaration = convert(&arena, s, &options).unwrap();
    assert_eq!(declaration.name(), Some("FromRegistry"));
    insta::assert_snapshot!(render(&declaration), @r"
    /** Own registry */
    export type FromRegistry = string;
    ");
}

#[test]
fn test_convert_returns_bare_type_without_identifier() {
    let mut arena = SchemaArena::new();
    let s = arena.string();
    let username = arena.optional(s);
    let age = arena.number();
    let user = arena.object([("username", username), ("age", age)]);

    let declaration = convert(&arena, user, &ConvertOptions::new()).unwrap();
    assert!(matches!(declaration, Declaration::Type(_)));
    insta::assert_snapshot!(render(&declaration), @r"
    {
        username?: string | undefined;
        age: number;
    }
    ");
}
