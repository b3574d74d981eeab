//! Unit tests for instruction emission.

use std::rc::Rc;

use crate::{
    ast::{ast::ExprWrapper, expressions::VariableExpr},
    lexer::lexer::tokenize,
    parser::parser::parse_expressions,
    scope::scope::MethodTable,
    Position, Span,
};

use super::{
    codegen::{generate, render},
    instruction::Instruction,
};

fn emit(source: &str) -> Vec<Instruction> {
    emit_with(source, MethodTable::new())
}

fn emit_with(source: &str, methods: MethodTable) -> Vec<Instruction> {
    let tokens = tokenize(source.to_string(), Some("test.lang".to_string())).unwrap();
    let expressions =
        parse_expressions(tokens, Rc::new("test.lang".to_string()), methods).unwrap();

    let mut instructions = vec![];
    for expression in expressions.iter() {
        instructions.extend(generate(expression).unwrap());
    }
    instructions
}

#[test]
fn test_emit_integer_literal() {
    assert_eq!(emit("42"), vec![Instruction::LdcI4("42".to_string())]);
}

#[test]
fn test_emit_float_literal() {
    assert_eq!(emit("3.14"), vec![Instruction::LdcR4("3.14".to_string())]);
}

#[test]
fn test_emit_string_literal() {
    assert_eq!(emit(r#""s""#), vec![Instruction::Ldstr("s".to_string())]);
}

#[test]
fn test_emit_respects_precedence() {
    assert_eq!(
        emit("1 + 2 * 3"),
        vec![
            Instruction::LdcI4("1".to_string()),
            Instruction::LdcI4("2".to_string()),
            Instruction::LdcI4("3".to_string()),
            Instruction::Mul,
            Instruction::Add,
        ]
    );
}

#[test]
fn test_emit_left_associative_subtraction() {
    assert_eq!(
        emit("1 - 2 - 3"),
        vec![
            Instruction::LdcI4("1".to_string()),
            Instruction::LdcI4("2".to_string()),
            Instruction::Sub,
            Instruction::LdcI4("3".to_string()),
            Instruction::Sub,
        ]
    );
}

#[test]
fn test_emit_comparison() {
    assert_eq!(
        emit("1 < 2"),
        vec![
            Instruction::LdcI4("1".to_string()),
            Instruction::LdcI4("2".to_string()),
            Instruction::Clt,
        ]
    );
}

#[test]
fn test_emit_declaration_stores_into_slot() {
    assert_eq!(
        emit("var x = 5"),
        vec![
            Instruction::LdcI4("5".to_string()),
            Instruction::Stloc(0),
        ]
    );
}

#[test]
fn test_emit_slots_follow_declaration_order() {
    assert_eq!(
        emit("var a = 1 var b = 2 b + a"),
        vec![
            Instruction::LdcI4("1".to_string()),
            Instruction::Stloc(0),
            Instruction::LdcI4("2".to_string()),
            Instruction::Stloc(1),
            Instruction::Ldloc(1),
            Instruction::Ldloc(0),
            Instruction::Add,
        ]
    );
}

#[test]
fn test_emit_repeated_reads_reuse_the_slot() {
    assert_eq!(
        emit("var a = 1 a + a"),
        vec![
            Instruction::LdcI4("1".to_string()),
            Instruction::Stloc(0),
            Instruction::Ldloc(0),
            Instruction::Ldloc(0),
            Instruction::Add,
        ]
    );
}

#[test]
fn test_emit_call_arguments_in_source_order() {
    assert_eq!(
        emit("print(\"hi\", 42)"),
        vec![
            Instruction::Ldstr("hi".to_string()),
            Instruction::LdcI4("42".to_string()),
            Instruction::Call {
                return_type: "void".to_string(),
                function: "print".to_string(),
                argument_types: vec!["string".to_string(), "int32".to_string()],
            },
        ]
    );
}

#[test]
fn test_emit_call_without_arguments() {
    let instructions = emit("print()");

    assert_eq!(
        instructions,
        vec![Instruction::Call {
            return_type: "void".to_string(),
            function: "print".to_string(),
            argument_types: vec![],
        }]
    );
    assert_eq!(render(&instructions), "call void print()\n");
}

#[test]
fn test_emit_instance_call() {
    assert_eq!(
        emit("var x = 5 x.add(1)"),
        vec![
            Instruction::LdcI4("5".to_string()),
            Instruction::Stloc(0),
            Instruction::Ldloc(0),
            Instruction::LdcI4("1".to_string()),
            Instruction::Callvirt {
                return_type: "int32".to_string(),
                class: "int32".to_string(),
                method: "add".to_string(),
                argument_types: vec!["int32".to_string()],
            },
        ]
    );
}

#[test]
fn test_emit_instance_call_with_registered_signature() {
    let mut methods = MethodTable::new();
    methods.register("Point", "dist", "float32");

    assert_eq!(
        emit_with("val p: Point = 0 p.dist(2)", methods),
        vec![
            Instruction::LdcI4("0".to_string()),
            Instruction::Stloc(0),
            Instruction::Ldloc(0),
            Instruction::LdcI4("2".to_string()),
            Instruction::Callvirt {
                return_type: "float32".to_string(),
                class: "Point".to_string(),
                method: "dist".to_string(),
                argument_types: vec!["int32".to_string()],
            },
        ]
    );
}

#[test]
fn test_bare_assignment_has_no_emission_rule() {
    let tokens = tokenize("var x = 1 x = 2".to_string(), Some("test.lang".to_string())).unwrap();
    let expressions = parse_expressions(
        tokens,
        Rc::new("test.lang".to_string()),
        MethodTable::new(),
    )
    .unwrap();

    let result = generate(&expressions[1]);

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "CodeGenError");
}

#[test]
fn test_unresolved_variable_type_fails_emission() {
    let variable = ExprWrapper::new(VariableExpr {
        name: "x".to_string(),
        return_type: None,
        slot_index: 0,
        is_mutable: true,
        is_to_set: false,
        is_return_value_used: false,
        span: Span {
            start: Position::null(),
            end: Position::null(),
        },
    });

    let result = generate(&variable);

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "CodeGenError");
}

#[test]
fn test_instruction_display() {
    assert_eq!(Instruction::LdcI4("7".to_string()).to_string(), "ldc.i4 7");
    assert_eq!(Instruction::Ldloc(2).to_string(), "ldloc.2");
    assert_eq!(Instruction::Stloc(0).to_string(), "stloc.0");
    assert_eq!(
        Instruction::Call {
            return_type: "void".to_string(),
            function: "print".to_string(),
            argument_types: vec!["string".to_string(), "int32".to_string()],
        }
        .to_string(),
        "call void print(string,int32)"
    );
    assert_eq!(
        Instruction::Callvirt {
            return_type: "int32".to_string(),
            class: "Counter".to_string(),
            method: "add".to_string(),
            argument_types: vec!["int32".to_string()],
        }
        .to_string(),
        "callvirt instance int32 Counter::add(int32)"
    );
}
