use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode};

use anyhow::{bail, Context, Result};
use log::{LevelFilter, Log, Metadata, Record};
use minigo::{
    ast::printer::print_program,
    compiler::compiler::listing,
    pipeline::{compile_source_with, CompileOptions, PipelineError},
    render_diagnostic, render_error,
};

const USAGE: &str = "usage: minigo <file> [--tokens] [--ast] [--timings] [--no-tac]";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// `MINIGO_LOG` takes a level name (`error` .. `trace`, or `off`).
fn init_logging() {
    let level = env::var("MINIGO_LOG")
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[derive(Debug, Default)]
struct Options {
    file: PathBuf,
    tokens: bool,
    ast: bool,
    timings: bool,
    no_tac: bool,
}

impl Options {
    fn from_args(args: &[String]) -> Result<Self> {
        let mut options = Options::default();
        let mut file = None;

        for arg in args {
            match arg.as_str() {
                "--tokens" => options.tokens = true,
                "--ast" => options.ast = true,
                "--timings" => options.timings = true,
                "--no-tac" => options.no_tac = true,
                flag if flag.starts_with("--") => bail!("unknown option '{}'", flag),
                path if file.is_none() => file = Some(PathBuf::from(path)),
                extra => bail!("unexpected argument '{}'", extra),
            }
        }

        options.file = file.context("no input file given")?;
        Ok(options)
    }
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match Options::from_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}\n{}", err, USAGE);
            return ExitCode::from(2);
        }
    };

    match run(&options) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run(options: &Options) -> Result<ExitCode> {
    let source = read_to_string(&options.file)
        .with_context(|| format!("failed to read {}", options.file.display()))?;

    let file_name = options
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| options.file.display().to_string());

    let compile_options = CompileOptions {
        emit_tac: !options.no_tac,
    };

    let output = match compile_source_with(&source, &file_name, &compile_options) {
        Ok(output) => output,
        Err(err @ PipelineError::Syntax { .. }) => {
            eprint!("{}", render_error(err.error(), &source, &file_name));
            return Ok(ExitCode::from(1));
        }
    };

    if options.tokens {
        for token in &output.tokens {
            println!("{}", token);
        }
    }

    if options.ast {
        println!("{}", print_program(&output.program));
    }

    for diagnostic in &output.diagnostics {
        eprint!("{}", render_diagnostic(diagnostic, &source, &file_name));
    }

    if options.timings {
        let timings = &output.timings;
        println!("Tokenized in {:?}", timings.tokenize);
        println!("Parsed in {:?}", timings.parse);
        println!("Type checked in {:?}", timings.analyze);
        if let Some(generate) = timings.generate {
            println!("Generated TAC in {:?}", generate);
        }
        println!("Total time: {:?}", timings.total());
    }

    if !output.is_valid() {
        eprintln!(
            "{}: {} error(s), {} warning(s)",
            file_name,
            output.error_count(),
            output.warning_count()
        );
        return Ok(ExitCode::from(1));
    }

    if let Some(instructions) = &output.instructions {
        println!("{}", listing(instructions));
    }

    Ok(ExitCode::SUCCESS)
}
