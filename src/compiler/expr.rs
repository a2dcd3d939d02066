use crate::ast::{
    ast::Expr,
    expressions::{LogicalExpr, LogicalOperator},
};

use super::{
    compiler::Compiler,
    tac::{TacInstruction, TacOperator},
};

/// Lowers `expression` and returns the operand holding its value: the
/// literal text, the variable name, or a new temporary.
///
/// Operands are lowered before the operator that uses them.
pub fn gen_expression(compiler: &mut Compiler, expression: &Expr) -> String {
    match expression {
        Expr::Literal(literal) => literal.value.to_string(),
        Expr::Variable(symbol) => symbol.value.clone(),
        Expr::Grouping(grouping) => gen_expression(compiler, &grouping.inner),
        Expr::Binary(binary) => {
            let left = gen_expression(compiler, &binary.left);
            let right = gen_expression(compiler, &binary.right);
            let result = compiler.new_temp();

            compiler.emit(TacInstruction::binary(
                TacOperator::from(binary.operator),
                &result,
                &left,
                &right,
            ));
            result
        }
        Expr::Unary(unary) => {
            let operand = gen_expression(compiler, &unary.operand);
            let result = compiler.new_temp();

            compiler.emit(TacInstruction::unary(
                TacOperator::from(unary.operator),
                &result,
                &operand,
            ));
            result
        }
        Expr::Logical(logical) => gen_short_circuit(compiler, logical),
    }
}

/// `a && b`:
///
/// ```text
///     if_false a goto Lf
///     if_false b goto Lf
///     t = true
///     goto Lend
/// Lf:
///     t = false
/// Lend:
/// ```
///
/// `a || b` is the mirror image with `if_true` and the values swapped.
/// Each occurrence gets its own temporary and labels.
fn gen_short_circuit(compiler: &mut Compiler, logical: &LogicalExpr) -> String {
    let result = compiler.new_temp();
    let short_label = compiler.new_label();
    let end_label = compiler.new_label();

    let (branch, short_value, fallthrough_value): (fn(&str, &str) -> TacInstruction, _, _) =
        match logical.operator {
            LogicalOperator::And => (TacInstruction::if_false, "false", "true"),
            LogicalOperator::Or => (TacInstruction::if_true, "true", "false"),
        };

    let left = gen_expression(compiler, &logical.left);
    compiler.emit(branch(&left, &short_label));

    let right = gen_expression(compiler, &logical.right);
    compiler.emit(branch(&right, &short_label));

    compiler.emit(TacInstruction::copy(&result, fallthrough_value));
    compiler.emit(TacInstruction::goto(&end_label));

    compiler.emit(TacInstruction::label(&short_label));
    compiler.emit(TacInstruction::copy(&result, short_value));

    compiler.emit(TacInstruction::label(&end_label));

    result
}
