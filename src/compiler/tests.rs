//! Unit tests for three-address code generation.

use proptest::prelude::*;

use super::{
    compiler::{compile, listing, Compiler},
    tac::{TacInstruction, TacOperator},
};
use crate::{
    ast::{
        ast::Stmt,
        expressions::{BinaryOperator, LogicalOperator, UnaryOperator},
    },
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

fn parse_source(source: &str) -> Vec<Stmt> {
    parse(tokenize(source).unwrap()).unwrap()
}

/// Checks `source`, lowers it and renders every instruction.
fn tac(source: &str) -> Vec<String> {
    let program = parse_source(source);
    let (type_checker, valid) = type_check(&program);
    assert!(valid, "{}", type_checker.report());

    compile(&program)
        .iter()
        .map(|instruction| instruction.to_string())
        .collect()
}

fn count(instructions: &[TacInstruction], operator: TacOperator) -> usize {
    instructions
        .iter()
        .filter(|instruction| instruction.operator == operator)
        .count()
}

// Instructions

#[test]
fn test_instruction_display() {
    let cases = [
        (TacInstruction::binary(TacOperator::Add, "t0", "a", "b"), "t0 = a + b"),
        (TacInstruction::binary(TacOperator::Le, "t1", "x", "2.5"), "t1 = x <= 2.5"),
        (TacInstruction::binary(TacOperator::And, "t2", "p", "q"), "t2 = p && q"),
        (TacInstruction::unary(TacOperator::Neg, "t3", "a"), "t3 = -a"),
        (TacInstruction::unary(TacOperator::Not, "t4", "ok"), "t4 = !ok"),
        (TacInstruction::copy("x", "t0"), "x = t0"),
        (TacInstruction::label("L0"), "L0:"),
        (TacInstruction::goto("L1"), "goto L1"),
        (TacInstruction::if_false("t0", "L2"), "if_false t0 goto L2"),
        (TacInstruction::if_true("t0", "L3"), "if_true t0 goto L3"),
        (TacInstruction::print("\"hi\""), "print \"hi\""),
        (TacInstruction::read("x"), "read x"),
    ];

    for (instruction, expected) in cases {
        assert_eq!(instruction.to_string(), expected);
    }
}

#[test]
fn test_instruction_fields() {
    let branch = TacInstruction::if_false("t0", "L2");
    assert_eq!(branch.operator, TacOperator::IfFalse);
    assert_eq!(branch.result.as_deref(), Some("L2"));
    assert_eq!(branch.operand1.as_deref(), Some("t0"));
    assert_eq!(branch.operand2, None);

    let print = TacInstruction::print("x");
    assert_eq!(print.result, None);
    assert_eq!(print.operand1.as_deref(), Some("x"));
}

#[test]
fn test_instruction_predicates() {
    assert!(TacInstruction::label("L0").is_label());
    assert!(!TacInstruction::goto("L0").is_label());

    assert!(TacInstruction::goto("L0").is_jump());
    assert!(TacInstruction::if_false("c", "L0").is_jump());
    assert!(TacInstruction::if_true("c", "L0").is_jump());
    assert!(!TacInstruction::label("L0").is_jump());
    assert!(!TacInstruction::copy("x", "1").is_jump());

    for operator in [TacOperator::Add, TacOperator::Sub, TacOperator::Mul, TacOperator::Div] {
        assert!(TacInstruction::binary(operator, "t0", "a", "b").is_arithmetic());
    }
    assert!(TacInstruction::unary(TacOperator::Neg, "t0", "a").is_arithmetic());
    assert!(!TacInstruction::unary(TacOperator::Not, "t0", "a").is_arithmetic());
    assert!(!TacInstruction::binary(TacOperator::Lt, "t0", "a", "b").is_arithmetic());
}

#[test]
fn test_operator_mapping() {
    assert_eq!(TacOperator::from(BinaryOperator::Subtract), TacOperator::Sub);
    assert_eq!(TacOperator::from(BinaryOperator::GreaterEquals), TacOperator::Ge);
    assert_eq!(TacOperator::from(BinaryOperator::NotEquals), TacOperator::Ne);
    assert_eq!(TacOperator::from(LogicalOperator::Or), TacOperator::Or);
    assert_eq!(TacOperator::from(UnaryOperator::Negate), TacOperator::Neg);
    assert_eq!(TacOperator::from(UnaryOperator::Not), TacOperator::Not);

    assert_eq!(TacOperator::IfFalse.to_string(), "IF_FALSE");
    assert_eq!(TacOperator::Copy.to_string(), "COPY");
    assert_eq!(TacOperator::Label.symbol(), None);
}

// Generator state

#[test]
fn test_fresh_names_and_reset() {
    let mut compiler = Compiler::new();

    assert_eq!(compiler.new_temp(), "t0");
    assert_eq!(compiler.new_temp(), "t1");
    assert_eq!(compiler.new_label(), "L0");
    assert_eq!(compiler.new_label(), "L1");
    compiler.emit(TacInstruction::label("L0"));

    compiler.reset();

    assert!(compiler.instructions().is_empty());
    assert_eq!(compiler.new_temp(), "t0");
    assert_eq!(compiler.new_label(), "L0");
}

#[test]
fn test_listing() {
    let program = parse_source("var x int = 10; print(x);");
    let mut compiler = Compiler::new();
    compiler.compile_program(&program);

    assert_eq!(compiler.listing(), "  0: x = 10\n  1: print x");
    assert_eq!(listing(&[]), "");
}

#[test]
fn test_compile_program_starts_clean() {
    let program = parse_source("var x int = 1 + 2;");
    let mut compiler = Compiler::new();

    let first = compiler.compile_program(&program).to_vec();
    let second = compiler.compile_program(&program).to_vec();

    assert_eq!(first, second);
    assert_eq!(second[0].to_string(), "t0 = 1 + 2");
}

// Statements

#[test]
fn test_declarations_and_assignment() {
    assert_eq!(
        tac("var x int = 10; var y int = 20; x = x + y;"),
        vec!["x = 10", "y = 20", "t0 = x + y", "x = t0"]
    );
}

#[test]
fn test_declaration_without_value_emits_nothing() {
    assert!(tac("var z int;").is_empty());
}

#[test]
fn test_literal_operands() {
    assert_eq!(
        tac("print(1, 2.0, 2.5, \"hi\", true);"),
        vec!["print 1", "print 2.0", "print 2.5", "print \"hi\"", "print true"]
    );
    assert_eq!(tac("var r real = 3;"), vec!["r = 3"]);
}

#[test]
fn test_read_emits_one_instruction_per_variable() {
    assert_eq!(
        tac("var a int; var b real; read(a, b);"),
        vec!["read a", "read b"]
    );
}

#[test]
fn test_if_else_lowering() {
    let instructions = tac("var x int = 7; if (x > 5) { print(x); } else { print(0); }");

    assert_eq!(
        instructions[1..],
        [
            "t0 = x > 5",
            "if_false t0 goto L0",
            "print x",
            "goto L1",
            "L0:",
            "print 0",
            "L1:",
        ]
    );
}

#[test]
fn test_if_without_else_lowering() {
    let instructions = tac("var x int = 7; if x > 5 { print(x); } if x < 0 { print(0); }");

    assert_eq!(
        instructions[1..],
        [
            "t0 = x > 5",
            "if_false t0 goto L0",
            "print x",
            "L0:",
            "t1 = x < 0",
            "if_false t1 goto L2",
            "print 0",
            "L2:",
        ]
    );
}

#[test]
fn test_else_if_chain() {
    let instructions = tac("var a bool; var b bool; if a { print(1); } else if b { print(2); }");

    assert_eq!(
        instructions,
        [
            "if_false a goto L0",
            "print 1",
            "goto L1",
            "L0:",
            "if_false b goto L2",
            "print 2",
            "L2:",
            "L1:",
        ]
    );
}

#[test]
fn test_classic_for_lowering() {
    let instructions = tac("for var i int = 0; i < 3; i = i + 1 { print(i); }");

    assert_eq!(
        instructions,
        [
            "i = 0",
            "L0:",
            "t0 = i < 3",
            "if_false t0 goto L1",
            "print i",
            "t1 = i + 1",
            "i = t1",
            "goto L0",
            "L1:",
        ]
    );
}

#[test]
fn test_while_style_for_lowering() {
    let instructions = tac("var n int = 3; for n > 0 { n = n - 1; }");

    assert_eq!(
        instructions,
        [
            "n = 3",
            "L0:",
            "t0 = n > 0",
            "if_false t0 goto L1",
            "t1 = n - 1",
            "n = t1",
            "goto L0",
            "L1:",
        ]
    );
}

#[test]
fn test_infinite_for_lowering() {
    assert_eq!(tac("for { print(1); }"), ["L0:", "print 1", "goto L0", "L1:"]);
}

// Expressions

#[test]
fn test_precedence_and_grouping() {
    assert_eq!(
        tac("var x int = 1 + 2 * 3;"),
        ["t0 = 2 * 3", "t1 = 1 + t0", "x = t1"]
    );
    assert_eq!(
        tac("var x int = (1 + 2) * 3;"),
        ["t0 = 1 + 2", "t1 = t0 * 3", "x = t1"]
    );
}

#[test]
fn test_unary_lowering() {
    assert_eq!(
        tac("var x int = 1; var y int = -x; var z bool = !true;"),
        ["x = 1", "t0 = -x", "y = t0", "t1 = !true", "z = t1"]
    );
}

#[test]
fn test_and_short_circuit() {
    assert_eq!(
        tac("var a bool = true; var b bool = false; var c bool = a && b;"),
        [
            "a = true",
            "b = false",
            "if_false a goto L0",
            "if_false b goto L0",
            "t0 = true",
            "goto L1",
            "L0:",
            "t0 = false",
            "L1:",
            "c = t0",
        ]
    );
}

#[test]
fn test_or_short_circuit() {
    assert_eq!(
        tac("var a bool; var b bool; var c bool = a || b;"),
        [
            "if_true a goto L0",
            "if_true b goto L0",
            "t0 = false",
            "goto L1",
            "L0:",
            "t0 = true",
            "L1:",
            "c = t0",
        ]
    );
}

#[test]
fn test_short_circuit_shape() {
    for (operator, branch) in [("&&", TacOperator::IfFalse), ("||", TacOperator::IfTrue)] {
        let program = parse_source(&format!("var a bool; var b bool; print(a {} b);", operator));
        let instructions = compile(&program);

        assert_eq!(count(&instructions, branch), 2);
        assert_eq!(count(&instructions, TacOperator::Copy), 2);
        assert_eq!(count(&instructions, TacOperator::Goto), 1);
        assert_eq!(count(&instructions, TacOperator::Label), 2);
        assert_eq!(instructions.last().map(|i| i.to_string()), Some(String::from("print t0")));
    }
}

#[test]
fn test_nested_short_circuit_uses_fresh_names() {
    let program = parse_source("var a bool; var b bool; var c bool; var d bool = a && b || c;");
    let instructions = compile(&program);

    assert_eq!(count(&instructions, TacOperator::Label), 4);
    assert_eq!(
        instructions.last().map(|i| i.to_string()),
        Some(String::from("d = t0"))
    );
}

#[test]
fn test_empty_program() {
    assert!(compile(&[]).is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_generation_is_deterministic(
        first in 0i64..1000,
        rest in prop::collection::vec((0usize..4, 1i64..1000), 0..12),
    ) {
        let mut source = format!("var x int = {}", first);
        for (operator, value) in &rest {
            source.push_str(&format!(" {} {}", ["+", "-", "*", "/"][*operator], value));
        }
        source.push(';');

        let program = parse_source(&source);
        let once = compile(&program);
        let twice = compile(&program);
        prop_assert_eq!(&once, &twice);

        // One temporary per operator, numbered from zero, then the copy
        let arithmetic: Vec<&TacInstruction> =
            once.iter().filter(|instruction| instruction.is_arithmetic()).collect();
        prop_assert_eq!(arithmetic.len(), rest.len());
        for (index, instruction) in arithmetic.iter().enumerate() {
            let expected = format!("t{}", index);
            prop_assert_eq!(instruction.result.as_deref(), Some(expected.as_str()));
        }
        prop_assert_eq!(once.len(), rest.len() + 1);
    }
}
