//! Snapshot tests for rendered declarations.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::rc::Rc;

use declgen_builder::{
    ClassBuilder, DataType, Dialect, EnumBuilder, EnumMember, Field, NamespaceBuilder, Render,
    TypeBuilder, VariableBuilder, shared,
};

fn geometry() -> NamespaceBuilder {
    let mut shape = EnumBuilder::new("Shape");
    shape
        .set_desc("Kinds of shape")
        .add_member(EnumMember::new("Circle"))
        .add_member(EnumMember::new("Square"));

    let point = ClassBuilder::new("Point")
        .with_field(Field::new("x").ty(DataType::Float))
        .with_field(Field::new("y").ty(DataType::Float));

    let mut origin = VariableBuilder::new("ORIGIN");
    origin.set_constant(true).set_type("Point");

    let mut ns = NamespaceBuilder::new("geometry");
    ns.add_variable(shared(origin))
        .add_class(shared(point))
        .add_enum(shared(shape));
    ns
}

#[test]
fn test_namespace_lua() {
    insta::assert_snapshot!(geometry().render(Dialect::Lua).unwrap(), @r"
    --#region geometry
    ---Kinds of shape
    ---@enum Shape
    Shape = {
        Circle = 0,
        Square = 1,
    }

    ---@class Point
    ---@field x number
    ---@field y number
    Point = {}

    ---@type Point
    ORIGIN = nil
    --#endregion
    ");
}

#[test]
fn test_namespace_typescript() {
    insta::assert_snapshot!(geometry().render(Dialect::TypeScript).unwrap(), @r"
    declare namespace geometry {
      /** Kinds of shape */
      enum Shape {
        Circle,
        Square,
      }

      class Point {
        x: number;
        y: number;
      }

      const ORIGIN: Point = undefined;
    }
    ");
}

#[test]
fn test_type_alias_both_dialects() {
    let mut alias = TypeBuilder::new("Callback", "fun(ok: boolean)");
    alias.set_desc("Completion handler");
    insta::assert_snapshot!(alias.render(Dialect::Lua).unwrap(), @r"
    ---Completion handler
    ---@alias Callback fun(ok: boolean)
    ");

    alias.set_type("(ok: boolean) => void");
    insta::assert_snapshot!(alias.render(Dialect::TypeScript).unwrap(), @r"
    /** Completion handler */
    declare type Callback = (ok: boolean) => void;
    ");
}

#[test]
fn test_shared_member_updates_namespace() {
    let counter = shared(VariableBuilder::new("count"));
    let mut ns = NamespaceBuilder::new("stats");
    ns.add_variable(Rc::clone(&counter));

    counter
        .borrow_mut()
        .set_type(DataType::Int32)
        .set_value(0)
        .set_desc("Number of calls");

    insta::assert_snapshot!(ns.render(Dialect::TypeScript).unwrap(), @r"
    declare namespace stats {
      /** Number of calls */
      let count: number = 0;
    }
    ");
}

#[test]
fn test_render_is_idempotent() {
    let ns = geometry();
    for dialect in Dialect::ALL {
        assert_eq!(ns.render(dialect).unwrap(), ns.render(dialect).unwrap());
    }
}
