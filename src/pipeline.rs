//! End-to-end driver: tokenize, parse, analyze, then generate TAC.
//!
//! A lexical or syntax error stops the pipeline. Semantic diagnostics do
//! not; they are returned with the parsed program, and code generation only
//! runs when none of them is an error.

use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;

use crate::{
    ast::ast::Stmt,
    compiler::{compiler::compile, tac::TacInstruction},
    errors::{diagnostics::Diagnostic, errors::Error},
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{file}: {error}")]
    Syntax { file: String, error: Error },
}

impl PipelineError {
    /// The front-end error that stopped the pipeline.
    pub fn error(&self) -> &Error {
        match self {
            PipelineError::Syntax { error, .. } => error,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CompileOptions {
    /// Generate TAC once the program is known to be valid
    pub emit_tac: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions { emit_tac: true }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Timings {
    pub tokenize: Duration,
    pub parse: Duration,
    pub analyze: Duration,
    pub generate: Option<Duration>,
}

impl Timings {
    pub fn total(&self) -> Duration {
        self.tokenize + self.parse + self.analyze + self.generate.unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct CompileOutput {
    pub tokens: Vec<Token>,
    pub program: Vec<Stmt>,
    pub diagnostics: Vec<Diagnostic>,
    /// `None` when the program has semantic errors or generation was disabled
    pub instructions: Option<Vec<TacInstruction>>,
    pub timings: Timings,
}

impl CompileOutput {
    /// True when no diagnostic is an error.
    pub fn is_valid(&self) -> bool {
        self.diagnostics.iter().all(|diagnostic| !diagnostic.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }
}

pub fn compile_source(source: &str, file: &str) -> Result<CompileOutput, PipelineError> {
    compile_source_with(source, file, &CompileOptions::default())
}

pub fn compile_source_with(
    source: &str,
    file: &str,
    options: &CompileOptions,
) -> Result<CompileOutput, PipelineError> {
    let syntax_error = |error: Error| PipelineError::Syntax {
        file: file.to_string(),
        error,
    };

    debug!("compiling {}", file);

    let start = Instant::now();
    let tokens = tokenize(source).map_err(syntax_error)?;
    let tokenize_time = start.elapsed();

    let start = Instant::now();
    let program = parse(tokens.clone()).map_err(syntax_error)?;
    let parse_time = start.elapsed();

    let start = Instant::now();
    let (type_checker, valid) = type_check(&program);
    let analyze_time = start.elapsed();

    let mut timings = Timings {
        tokenize: tokenize_time,
        parse: parse_time,
        analyze: analyze_time,
        generate: None,
    };

    let instructions = if valid && options.emit_tac {
        let start = Instant::now();
        let instructions = compile(&program);
        timings.generate = Some(start.elapsed());
        Some(instructions)
    } else {
        if !valid {
            debug!("{}: skipping TAC generation, program has semantic errors", file);
        }
        None
    };

    Ok(CompileOutput {
        tokens,
        program,
        diagnostics: type_checker.diagnostics().to_vec(),
        instructions,
        timings,
    })
}
