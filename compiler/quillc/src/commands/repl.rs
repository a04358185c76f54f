//! `quill repl`: a line-at-a-time read-eval-print loop.

use std::io::{BufRead, Write};

use quill_eval::{Environment, Interpreter};

use super::run_source;
use crate::Reporter;

const PROMPT: &str = ">> ";

/// Evaluate `input` line by line until it is exhausted.
///
/// All lines share one root environment, so bindings persist. Errors are
/// printed and the loop carries on.
pub fn repl(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    interpreter: &mut Interpreter,
    color: bool,
) -> std::io::Result<()> {
    let env = Environment::new();
    let reporter = Reporter::new("<repl>").with_color(color);
    let mut line = String::new();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        run_source(&line, interpreter, &env, &reporter, out)?;
    }
}
