//! S-expression rendering of the AST, e.g. `(+ 1 (* 2 3))`.

use super::ast::{Expr, Stmt};

/// One statement per line.
pub fn print_program(program: &[Stmt]) -> String {
    program
        .iter()
        .map(print_stmt)
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn print_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Block(block) => parenthesize("block", block.body.iter().map(print_stmt)),
        Stmt::VarDecl(decl) => {
            let mut parts = vec![decl.identifier.name.clone(), decl.explicit_type.to_string()];
            if let Some(value) = &decl.assigned_value {
                parts.push(print_expr(value));
            }
            parenthesize("var", parts)
        }
        Stmt::Assignment(assignment) => parenthesize(
            "assign",
            [assignment.assignee.name.clone(), print_expr(&assignment.value)],
        ),
        Stmt::If(if_stmt) => {
            let mut parts = vec![print_expr(&if_stmt.condition), print_stmt(&if_stmt.then_body)];
            if let Some(else_body) = &if_stmt.else_body {
                parts.push(print_stmt(else_body));
            }
            parenthesize("if", parts)
        }
        Stmt::For(for_stmt) => {
            let init = for_stmt
                .init
                .as_deref()
                .map_or_else(|| String::from("nil"), print_stmt);
            let condition = for_stmt
                .condition
                .as_ref()
                .map_or_else(|| String::from("true"), print_expr);
            let increment = for_stmt
                .increment
                .as_deref()
                .map_or_else(|| String::from("nil"), print_stmt);

            format!(
                "(for {} ; {} ; {} {})",
                init,
                condition,
                increment,
                print_stmt(&for_stmt.body)
            )
        }
        Stmt::Print(print) => parenthesize("print", print.expressions.iter().map(print_expr)),
        Stmt::Read(read) => parenthesize("read", read.variables.iter().map(|v| v.name.clone())),
    }
}

pub fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Binary(binary) => parenthesize(
            binary.operator.symbol(),
            [print_expr(&binary.left), print_expr(&binary.right)],
        ),
        Expr::Logical(logical) => parenthesize(
            logical.operator.symbol(),
            [print_expr(&logical.left), print_expr(&logical.right)],
        ),
        Expr::Unary(unary) => parenthesize(unary.operator.symbol(), [print_expr(&unary.operand)]),
        Expr::Literal(literal) => literal.value.to_string(),
        Expr::Grouping(grouping) => parenthesize("group", [print_expr(&grouping.inner)]),
        Expr::Variable(symbol) => symbol.value.clone(),
    }
}

fn parenthesize(name: &str, parts: impl IntoIterator<Item = String>) -> String {
    let mut output = format!("({}", name);
    for part in parts {
        output.push(' ');
        output.push_str(&part);
    }
    output.push(')');
    output
}
