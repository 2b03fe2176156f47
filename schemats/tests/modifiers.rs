//! Snapshot tests for optional, nullable and transparent modifiers.

use schemats::{BatchOptions, print_many};
use schemats_schema::{SchemaArena, SchemaId};

fn print(arena: &SchemaArena, schema: SchemaId) -> String {
    print_many(arena, BatchOptions::new().schemas([schema])).expect("conversion failed")
}

#[test]
fn test_optional_is_emitted_once() {
    let mut arena = SchemaArena::new();
    let s = arena.string();
    let optional = arena.optional(s);
    assert_eq!(print(&arena, optional), "string | undefined");

    let twice = arena.optional(optional);
    let thrice = arena.optional(twice);
    assert_eq!(print(&arena, thrice), "string | undefined");
}

#[test]
fn test_optional_properties_and_tuple_items() {
    let mut arena = SchemaArena::new();
    let s = arena.string();
    let optional_string = arena.optional(s);

    let n = arena.number();
    let optional_number = arena.optional(n);
    let or = arena.union([optional_number, s]);

    let inner = arena.object([("optional", optional_string), ("required", s)]);
    let tuple = arena.tuple([optional_string, n, inner]);
    let tuple = arena.optional(tuple);

    let schema = arena.object([
        ("optional", optional_string),
        ("required", s),
        ("or", or),
        ("tuple", tuple),
    ]);

    insta::assert_snapshot!(print(&arena, schema), @r"
    {
        optional?: string | undefined;
        required: string;
        or?: (number | undefined) | string;
        tuple?: [
            string | undefined,
            number,
            {
                optional?: string | undefined;
                required: string;
            }
        ] | undefined;
    }
    ");
}

#[test]
fn test_nonoptional() {
    let mut arena = SchemaArena::new();
    let s = arena.string();
    let plain = arena.nonoptional(s);
    assert_eq!(print(&arena, plain), "string");

    let optional = arena.optional(s);
    let undone = arena.nonoptional(optional);
    assert_eq!(print(&arena, undone), "string");

    // An `optional` around a `nonoptional` still applies.
    let redone = arena.optional(undone);
    assert_eq!(print(&arena, redone), "string | undefined");
}

#[test]
fn test_nonoptional_reaches_into_unions() {
    let mut arena = SchemaArena::new();
    let s = arena.string();
    let s = arena.optional(s);
    let n = arena.number();
    let n = arena.optional(n);
    let union = arena.union([s, n]);
    let schema = arena.nonoptional(union);
    assert_eq!(print(&arena, schema), "string | number");
}

#[test]
fn test_nonoptional_reaches_into_lazy() {
    let mut arena = SchemaArena::new();
    let lazy = arena.lazy();
    let mother = arena.nonoptional(lazy);
    let user = arena.object([("mother", mother)]);
    arena.meta(user, "User");
    let optional_user = arena.optional(user);
    arena.bind_lazy(lazy, optional_user);

    insta::assert_snapshot!(print(&arena, user), @r"
    type User = {
        mother: User;
    };
    ");
}

#[test]
fn test_nullable_is_emitted_once() {
    let mut arena = SchemaArena::new();
    let s = arena.string();
    let nullable = arena.nullable(s);
    assert_eq!(print(&arena, nullable), "string | null");

    let optional = arena.optional(nullable);
    let nullable_again = arena.nullable(optional);
    let schema = arena.optional(nullable_again);
    assert_eq!(print(&arena, schema), "(string | null) | undefined");
}

#[test]
fn test_readonly_passes_through_wrappers() {
    let mut arena = SchemaArena::new();
    let s = arena.string();
    let list = arena.array(s);
    let optional = arena.optional(list);
    let readonly = arena.readonly(optional);
    let schema = arena.nullable(readonly);
    assert_eq!(
        print(&arena, schema),
        "(readonly string[] | undefined) | null"
    );

    let name = arena.string();
    let defaulted = arena.defaulted(name);
    let object = arena.object([("name", defaulted)]);
    let caught = arena.catch(object);
    let schema = arena.readonly(caught);
    insta::assert_snapshot!(print(&arena, schema), @r"
    {
        readonly name?: string;
    }
    ");
}

#[test]
fn test_readonly_reaches_every_union_branch() {
    let mut arena = SchemaArena::new();
    let s = arena.string();
    let n = arena.number();
    let list = arena.array(s);
    let pair = arena.tuple([s, n]);
    let union = arena.union([list, pair]);
    let schema = arena.readonly(union);

    insta::assert_snapshot!(print(&arena, schema), @r"
    readonly string[] | readonly [
        string,
        number
    ]
    ");
}

#[test]
fn test_transparent_wrappers() {
    let mut arena = SchemaArena::new();
    let n = arena.number();
    let wrappers = [
        arena.defaulted(n),
        arena.prefault(n),
        arena.catch(n),
        arena.success(n),
    ];
    for schema in wrappers {
        assert_eq!(print(&arena, schema), "number");
    }
}

#[test]
fn test_defaulted_property_is_optional() {
    let mut arena = SchemaArena::new();
    let n = arena.number();
    let page = arena.defaulted(n);
    let schema = arena.object([("page", page)]);
    insta::assert_snapshot!(print(&arena, schema), @r"
    {
        page?: number;
    }
    ");
}
