//! `quill run`: parse and evaluate a program.

use std::io::Write;

use quill_eval::{Entity, Environment, Interpreter, DEFAULT_MAX_CALL_DEPTH};
use quill_parse::parse_source;
use tracing::debug;

use crate::{Outcome, Reporter};

/// Options accepted by `quill run`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunOptions {
    pub path: String,
    /// `None` disables the call-depth limit.
    pub max_call_depth: Option<usize>,
}

/// Parse the arguments following `run`.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut path = None;
    let mut max_call_depth = Some(DEFAULT_MAX_CALL_DEPTH);

    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            let depth = value
                .parse::<usize>()
                .map_err(|_| format!("invalid value for --max-depth: '{value}'"))?;
            max_call_depth = Some(depth);
        } else if arg == "--no-depth-limit" {
            max_call_depth = None;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let path = path.ok_or_else(|| "missing file path".to_owned())?;
    Ok(RunOptions {
        path,
        max_call_depth,
    })
}

/// Parse and evaluate `source` in `env`.
///
/// Prints the result's inspect string, or nothing when it is `null`. Parse
/// errors are rendered instead and nothing is evaluated.
pub fn run_source(
    source: &str,
    interpreter: &mut Interpreter,
    env: &Environment,
    reporter: &Reporter,
    out: &mut dyn Write,
) -> std::io::Result<Outcome> {
    let parsed = parse_source(source);
    if parsed.has_errors() {
        debug!(errors = parsed.errors.len(), "not evaluating after parse errors");
        reporter.render_parse_errors(source, &parsed.errors, out)?;
        return Ok(Outcome::ParseErrors);
    }

    let result = interpreter.eval_program(&parsed.program, env);
    match result {
        Entity::Null => Ok(Outcome::Success),
        Entity::Error(_) => {
            writeln!(out, "{}", result.inspect())?;
            Ok(Outcome::RuntimeError)
        }
        _ => {
            writeln!(out, "{}", result.inspect())?;
            Ok(Outcome::Success)
        }
    }
}

/// `quill run <file>`: evaluate a file in a fresh root environment.
pub fn run_file(
    options: &RunOptions,
    source: &str,
    color: bool,
    out: &mut dyn Write,
) -> std::io::Result<Outcome> {
    debug!(path = %options.path, bytes = source.len(), "running file");
    let mut interpreter = Interpreter::builder()
        .max_call_depth(options.max_call_depth)
        .build();
    let reporter = Reporter::new(options.path.as_str()).with_color(color);
    run_source(source, &mut interpreter, &Environment::new(), &reporter, out)
}
