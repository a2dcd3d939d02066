//! Main compiler module.
//!
//! This module contains the `Compiler` context that lowers a program to
//! three-address code. It owns the output instruction list and the
//! counters used to name temporaries (`t0`, `t1`, ...) and labels
//! (`L0`, `L1`, ...). Both counters start from zero on every run, so
//! compiling the same program twice gives identical output.
//!
//! The compiler assumes the program already passed semantic analysis.

use log::{debug, trace};

use crate::ast::ast::Stmt;

use super::{stmt::gen_statement, tac::TacInstruction};

/// Generation state for one run, passed by `&mut` through the lowering
/// functions.
#[derive(Debug, Default)]
pub struct Compiler {
    /// Instructions emitted so far, in program order
    instructions: Vec<TacInstruction>,
    /// Next temporary number
    temp_counter: usize,
    /// Next label number
    label_counter: usize,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler {
            instructions: vec![],
            temp_counter: 0,
            label_counter: 0,
        }
    }

    /// Drops all output and restarts both counters.
    pub fn reset(&mut self) {
        self.instructions.clear();
        self.temp_counter = 0;
        self.label_counter = 0;
    }

    pub fn new_temp(&mut self) -> String {
        let temp = format!("t{}", self.temp_counter);
        self.temp_counter += 1;
        temp
    }

    pub fn new_label(&mut self) -> String {
        let label = format!("L{}", self.label_counter);
        self.label_counter += 1;
        label
    }

    pub fn emit(&mut self, instruction: TacInstruction) {
        trace!("{:3}: {}", self.instructions.len(), instruction);
        self.instructions.push(instruction);
    }

    pub fn instructions(&self) -> &[TacInstruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<TacInstruction> {
        self.instructions
    }

    pub fn listing(&self) -> String {
        listing(&self.instructions)
    }

    /// Lowers `program` from a clean state.
    pub fn compile_program(&mut self, program: &[Stmt]) -> &[TacInstruction] {
        self.reset();

        debug!("generating TAC for {} statements", program.len());
        for stmt in program {
            gen_statement(self, stmt);
        }
        debug!(
            "generated {} instructions ({} temporaries, {} labels)",
            self.instructions.len(),
            self.temp_counter,
            self.label_counter
        );

        &self.instructions
    }
}

/// One-shot entry point: lowers `program` with a fresh compiler.
pub fn compile(program: &[Stmt]) -> Vec<TacInstruction> {
    let mut compiler = Compiler::new();
    compiler.compile_program(program);
    compiler.into_instructions()
}

/// Numbered listing, one `%3d: instr` line per instruction.
pub fn listing(instructions: &[TacInstruction]) -> String {
    instructions
        .iter()
        .enumerate()
        .map(|(index, instruction)| format!("{:3}: {}", index, instruction))
        .collect::<Vec<String>>()
        .join("\n")
}
