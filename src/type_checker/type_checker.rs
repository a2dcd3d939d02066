use log::{debug, warn};

use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::{BinaryExpr, Literal, LogicalExpr, UnaryExpr, UnaryOperator},
        statements::{AssignmentStmt, BlockStmt, ForStmt, IfStmt, ReadStmt, VarDeclStmt},
        types::Type,
    },
    errors::diagnostics::{Diagnostic, SemanticError, Severity},
    Position,
};

use super::environment::SymbolTable;

/// State of one analysis run: the scope stack and every diagnostic found
/// so far. Local problems are recorded and the walk carries on.
#[derive(Debug, Default)]
pub struct TypeChecker {
    symbol_table: SymbolTable,
    diagnostics: Vec<Diagnostic>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            symbol_table: SymbolTable::new(),
            diagnostics: vec![],
        }
    }

    /// Analyzes `program` from a clean state and returns whether it is valid.
    pub fn check_program(&mut self, program: &[Stmt]) -> bool {
        self.symbol_table = SymbolTable::new();
        self.diagnostics.clear();

        debug!("semantic analysis of {} statements", program.len());
        for stmt in program {
            type_check_stmt(self, stmt);
        }
        debug!(
            "semantic analysis finished: {} errors, {} warnings",
            self.errors().len(),
            self.warnings().len()
        );

        self.is_valid()
    }

    pub fn add_diagnostic(&mut self, error: SemanticError, position: Option<Position>) {
        self.diagnostics.push(Diagnostic::new(error, position));
    }

    /// All diagnostics in the order they were found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    fn with_severity(&self, severity: Severity) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity() == severity)
            .collect()
    }

    /// Warnings alone keep a program valid.
    pub fn is_valid(&self) -> bool {
        self.diagnostics.iter().all(|diagnostic| !diagnostic.is_error())
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    /// Human-readable listing of every diagnostic.
    pub fn report(&self) -> String {
        if self.diagnostics.is_empty() {
            return String::from("No semantic errors found.");
        }

        let mut output = format!(
            "Found {} error(s) and {} warning(s):",
            self.errors().len(),
            self.warnings().len()
        );
        for diagnostic in &self.diagnostics {
            output.push_str("\n  ");
            output.push_str(&diagnostic.to_string());
        }
        output
    }
}

/// Runs a fresh analysis over `program`, returning the checker (for its
/// diagnostics) and whether the program is valid.
pub fn type_check(program: &[Stmt]) -> (TypeChecker, bool) {
    let mut type_checker = TypeChecker::new();
    let valid = type_checker.check_program(program);
    (type_checker, valid)
}

pub fn type_check_block(type_checker: &mut TypeChecker, block: &BlockStmt) {
    type_checker.symbol_table.enter_scope();
    for stmt in &block.body {
        type_check_stmt(type_checker, stmt);
    }
    type_checker.symbol_table.exit_scope();
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, stmt: &Stmt) {
    match stmt {
        Stmt::Block(block) => type_check_block(type_checker, block),
        Stmt::VarDecl(var_decl) => type_check_var_decl(type_checker, var_decl),
        Stmt::Assignment(assignment) => type_check_assignment(type_checker, assignment),
        Stmt::If(if_stmt) => type_check_if(type_checker, if_stmt),
        Stmt::For(for_stmt) => type_check_for(type_checker, for_stmt),
        Stmt::Print(print) => {
            // Anything is printable; this only surfaces errors inside the arguments
            for expr in &print.expressions {
                type_check_expr(type_checker, expr);
            }
        }
        Stmt::Read(read) => type_check_read(type_checker, read),
    }
}

fn type_check_var_decl(type_checker: &mut TypeChecker, var_decl: &VarDeclStmt) {
    let declared_type = Type::from(var_decl.explicit_type);
    let name = &var_decl.identifier.name;

    if !type_checker.symbol_table.declare(
        name,
        declared_type,
        var_decl.assigned_value.is_some(),
    ) {
        type_checker.add_diagnostic(
            SemanticError::VariableAlreadyDeclared {
                variable: name.clone(),
            },
            Some(var_decl.identifier.span.start),
        );
    }

    // Checked even after a failed declaration, against the type written here
    if let Some(value) = &var_decl.assigned_value {
        let value_type = type_check_expr(type_checker, value);
        check_assignable(type_checker, name, declared_type, value_type, value);
    }
}

fn type_check_assignment(type_checker: &mut TypeChecker, assignment: &AssignmentStmt) {
    let name = &assignment.assignee.name;

    let Some(target_type) = type_checker
        .symbol_table
        .resolve(name)
        .map(|symbol| symbol.symbol_type)
    else {
        // The value is not analyzed: anything it reports would be noise
        type_checker.add_diagnostic(
            SemanticError::VariableNotDeclared {
                variable: name.clone(),
            },
            Some(assignment.assignee.span.start),
        );
        return;
    };

    let value_type = type_check_expr(type_checker, &assignment.value);
    check_assignable(type_checker, name, target_type, value_type, &assignment.value);
    type_checker.symbol_table.mark_initialized(name);
}

fn check_assignable(
    type_checker: &mut TypeChecker,
    name: &str,
    expected: Type,
    received: Type,
    value: &Expr,
) {
    if received == Type::ErrorMarker || expected.is_compatible_with(&received) {
        return;
    }

    type_checker.add_diagnostic(
        SemanticError::InvalidAssignmentType {
            variable: name.to_string(),
            expected,
            received,
        },
        Some(value.get_span().start),
    );
}

fn type_check_condition(type_checker: &mut TypeChecker, condition: &Expr, statement: &str) {
    let condition_type = type_check_expr(type_checker, condition);

    if condition_type != Type::Boolean && condition_type != Type::ErrorMarker {
        type_checker.add_diagnostic(
            SemanticError::InvalidConditionType {
                statement: statement.to_string(),
                found: condition_type,
            },
            Some(condition.get_span().start),
        );
    }
}

fn type_check_if(type_checker: &mut TypeChecker, if_stmt: &IfStmt) {
    type_check_condition(type_checker, &if_stmt.condition, "if");
    type_check_stmt(type_checker, &if_stmt.then_body);
    if let Some(else_body) = &if_stmt.else_body {
        type_check_stmt(type_checker, else_body);
    }
}

/// The loop gets its own scope so an induction variable declared in the
/// initializer is local to the loop.
fn type_check_for(type_checker: &mut TypeChecker, for_stmt: &ForStmt) {
    type_checker.symbol_table.enter_scope();

    if let Some(init) = &for_stmt.init {
        type_check_stmt(type_checker, init);
    }
    if let Some(condition) = &for_stmt.condition {
        type_check_condition(type_checker, condition, "for");
    }
    if let Some(increment) = &for_stmt.increment {
        type_check_stmt(type_checker, increment);
    }
    type_check_stmt(type_checker, &for_stmt.body);

    type_checker.symbol_table.exit_scope();
}

fn type_check_read(type_checker: &mut TypeChecker, read: &ReadStmt) {
    for variable in &read.variables {
        if type_checker.symbol_table.exists(&variable.name) {
            type_checker.symbol_table.mark_initialized(&variable.name);
        } else {
            type_checker.add_diagnostic(
                SemanticError::VariableNotDeclared {
                    variable: variable.name.clone(),
                },
                Some(variable.span.start),
            );
        }
    }
}

pub fn type_check_expr(type_checker: &mut TypeChecker, expr: &Expr) -> Type {
    match expr {
        Expr::Binary(binary) => type_check_binary(type_checker, binary),
        Expr::Logical(logical) => type_check_logical(type_checker, logical),
        Expr::Unary(unary) => type_check_unary(type_checker, unary),
        Expr::Literal(literal) => match literal.value {
            Literal::Integer(_) => Type::Integer,
            Literal::Real(_) => Type::Real,
            Literal::Text(_) => Type::Text,
            Literal::Boolean(_) => Type::Boolean,
            Literal::Null => Type::Absent,
        },
        Expr::Grouping(grouping) => type_check_expr(type_checker, &grouping.inner),
        Expr::Variable(symbol) => {
            let Some(resolved) = type_checker.symbol_table.resolve(&symbol.value).cloned() else {
                type_checker.add_diagnostic(
                    SemanticError::VariableNotDeclared {
                        variable: symbol.value.clone(),
                    },
                    Some(symbol.span.start),
                );
                return Type::ErrorMarker;
            };

            if !resolved.initialized {
                warn!(
                    "{}: variable '{}' may be used before being initialized",
                    symbol.span.start, symbol.value
                );
                type_checker.add_diagnostic(
                    SemanticError::VariableUninitializedUse {
                        variable: symbol.value.clone(),
                    },
                    Some(symbol.span.start),
                );
            }

            resolved.symbol_type
        }
    }
}

fn type_check_binary(type_checker: &mut TypeChecker, binary: &BinaryExpr) -> Type {
    let left = type_check_expr(type_checker, &binary.left);
    let right = type_check_expr(type_checker, &binary.right);

    if left == Type::ErrorMarker || right == Type::ErrorMarker {
        return Type::ErrorMarker;
    }

    if binary.operator.is_equality() {
        if !left.is_compatible_with(&right) {
            type_checker.add_diagnostic(
                SemanticError::TypeMismatch { left, right },
                Some(binary.operator_position),
            );
            return Type::ErrorMarker;
        }
        return Type::Boolean;
    }

    if !left.is_numeric() || !right.is_numeric() {
        type_checker.add_diagnostic(
            SemanticError::InvalidOperationType {
                operator: binary.operator.symbol().to_string(),
                details: format!("requires numeric operands, found {} and {}", left, right),
            },
            Some(binary.operator_position),
        );
        return Type::ErrorMarker;
    }

    if binary.operator.is_relational() {
        Type::Boolean
    } else {
        Type::promote(left, right)
    }
}

fn type_check_logical(type_checker: &mut TypeChecker, logical: &LogicalExpr) -> Type {
    let left = type_check_expr(type_checker, &logical.left);
    let right = type_check_expr(type_checker, &logical.right);

    let mut flagged = false;
    for (side, operand) in [("left", left), ("right", right)] {
        if operand != Type::Boolean && operand != Type::ErrorMarker {
            type_checker.add_diagnostic(
                SemanticError::InvalidOperationType {
                    operator: logical.operator.symbol().to_string(),
                    details: format!("expects a boolean {} operand, found {}", side, operand),
                },
                Some(logical.operator_position),
            );
            flagged = true;
        }
    }

    if flagged {
        Type::ErrorMarker
    } else {
        Type::Boolean
    }
}

fn type_check_unary(type_checker: &mut TypeChecker, unary: &UnaryExpr) -> Type {
    let operand = type_check_expr(type_checker, &unary.operand);

    if operand == Type::ErrorMarker {
        return Type::ErrorMarker;
    }

    let (accepted, result, expected) = match unary.operator {
        UnaryOperator::Not => (operand == Type::Boolean, Type::Boolean, "a boolean"),
        UnaryOperator::Negate => (operand.is_numeric(), operand, "a numeric"),
    };

    if accepted {
        return result;
    }

    type_checker.add_diagnostic(
        SemanticError::InvalidOperationType {
            operator: unary.operator.symbol().to_string(),
            details: format!("expects {} operand, found {}", expected, operand),
        },
        Some(unary.span.start),
    );
    Type::ErrorMarker
}
