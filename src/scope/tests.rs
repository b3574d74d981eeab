//! Unit tests for the function scope and method table.

use super::scope::{FunctionScope, MethodSignatureSource, MethodTable};

#[test]
fn test_slots_follow_declaration_order() {
    let mut scope = FunctionScope::new();

    assert_eq!(scope.declare("a".to_string(), "int32".to_string(), true), 0);
    assert_eq!(scope.declare("b".to_string(), "string".to_string(), false), 1);
    assert_eq!(scope.declare("c".to_string(), "float32".to_string(), true), 2);
    assert_eq!(scope.slot_count(), 3);
}

#[test]
fn test_lookup_returns_the_descriptor() {
    let mut scope = FunctionScope::new();
    scope.declare("count".to_string(), "int32".to_string(), true);

    let variable = scope.lookup("count").unwrap();
    assert_eq!(variable.name, "count");
    assert_eq!(variable.return_type, "int32");
    assert_eq!(variable.slot_index, 0);
    assert!(variable.is_mutable);
}

#[test]
fn test_lookup_is_stable_across_reads() {
    let mut scope = FunctionScope::new();
    scope.declare("a".to_string(), "int32".to_string(), true);
    scope.declare("b".to_string(), "int32".to_string(), true);

    // Repeated lookups never move a binding to a new slot
    assert_eq!(scope.lookup("b").unwrap().slot_index, 1);
    assert_eq!(scope.lookup("b").unwrap().slot_index, 1);
    assert_eq!(scope.lookup("a").unwrap().slot_index, 0);
}

#[test]
fn test_undeclared_name() {
    let scope = FunctionScope::new();

    assert!(!scope.is_declared("ghost"));
    assert!(scope.lookup("ghost").is_none());
}

#[test]
fn test_redeclaration_shadows_under_a_fresh_slot() {
    let mut scope = FunctionScope::new();
    scope.declare("x".to_string(), "int32".to_string(), true);
    scope.declare("x".to_string(), "string".to_string(), false);

    let variable = scope.lookup("x").unwrap();
    assert_eq!(variable.slot_index, 1);
    assert_eq!(variable.return_type, "string");
    assert!(!variable.is_mutable);
    assert_eq!(scope.slot_count(), 2);
}

#[test]
fn test_method_table_lookup() {
    let mut methods = MethodTable::new();
    methods.register("Point", "dist", "float32");

    assert_eq!(methods.method_return_type("Point", "dist"), Some("float32"));
    assert_eq!(methods.method_return_type("Point", "norm"), None);
    assert_eq!(methods.method_return_type("Line", "dist"), None);
}
