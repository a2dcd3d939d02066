use crate::ast::{
    ast::Stmt,
    statements::{ForStmt, IfStmt},
};

use super::{compiler::Compiler, expr::gen_expression, tac::TacInstruction};

pub fn gen_statement(compiler: &mut Compiler, statement: &Stmt) {
    match statement {
        Stmt::Block(block) => {
            // Scopes only matter to the type checker; names are flat here
            for stmt in &block.body {
                gen_statement(compiler, stmt);
            }
        }
        Stmt::VarDecl(var_decl) => {
            if let Some(value) = &var_decl.assigned_value {
                let value = gen_expression(compiler, value);
                compiler.emit(TacInstruction::copy(&var_decl.identifier.name, &value));
            }
        }
        Stmt::Assignment(assignment) => {
            let value = gen_expression(compiler, &assignment.value);
            compiler.emit(TacInstruction::copy(&assignment.assignee.name, &value));
        }
        Stmt::If(if_stmt) => gen_if(compiler, if_stmt),
        Stmt::For(for_stmt) => gen_for(compiler, for_stmt),
        Stmt::Print(print) => {
            for expr in &print.expressions {
                let value = gen_expression(compiler, expr);
                compiler.emit(TacInstruction::print(&value));
            }
        }
        Stmt::Read(read) => {
            for variable in &read.variables {
                compiler.emit(TacInstruction::read(&variable.name));
            }
        }
    }
}

/// ```text
///     if_false cond goto else
///     <then>
///     goto end          (only with an else branch)
/// else:
///     <else>
/// end:                  (only with an else branch)
/// ```
fn gen_if(compiler: &mut Compiler, if_stmt: &IfStmt) {
    let condition = gen_expression(compiler, &if_stmt.condition);
    let else_label = compiler.new_label();
    let end_label = compiler.new_label();

    compiler.emit(TacInstruction::if_false(&condition, &else_label));
    gen_statement(compiler, &if_stmt.then_body);

    match &if_stmt.else_body {
        Some(else_body) => {
            compiler.emit(TacInstruction::goto(&end_label));
            compiler.emit(TacInstruction::label(&else_label));
            gen_statement(compiler, else_body);
            compiler.emit(TacInstruction::label(&end_label));
        }
        None => compiler.emit(TacInstruction::label(&else_label)),
    }
}

/// ```text
///     <init>
/// start:
///     if_false cond goto end   (only with a condition)
///     <body>
///     <increment>
///     goto start
/// end:
/// ```
fn gen_for(compiler: &mut Compiler, for_stmt: &ForStmt) {
    let start_label = compiler.new_label();
    let end_label = compiler.new_label();

    if let Some(init) = &for_stmt.init {
        gen_statement(compiler, init);
    }

    compiler.emit(TacInstruction::label(&start_label));

    if let Some(condition) = &for_stmt.condition {
        let condition = gen_expression(compiler, condition);
        compiler.emit(TacInstruction::if_false(&condition, &end_label));
    }

    gen_statement(compiler, &for_stmt.body);

    if let Some(increment) = &for_stmt.increment {
        gen_statement(compiler, increment);
    }

    compiler.emit(TacInstruction::goto(&start_label));
    compiler.emit(TacInstruction::label(&end_label));
}
